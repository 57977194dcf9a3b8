//! 工具模块
//!
//! 提供文件系统、外部进程与 Git 相关的工具函数

pub mod fs;
pub mod git;
pub mod process;

// 重导出
pub use fs::*;
pub use git::*;
pub use process::*;
