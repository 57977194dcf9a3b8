//! 嵌入资源管理
//!
//! 使用 rust-embed 将生成文件的模板编译进二进制

pub mod files;

pub use files::TemplateAssets;
