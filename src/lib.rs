// goscaffold - Library Root
//
// Go 项目脚手架：goc 负责项目 / 子模块初始化，gop 负责定位与打开项目

pub mod config;
pub mod error;
pub mod patch;
pub mod project;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use config::Settings;
pub use error::{exit_code_for, ScaffoldError};
pub use utils::{SystemRunner, ToolRunner};
