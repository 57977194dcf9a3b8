//! 领域错误与退出码
//!
//! IO 与进程调用的错误统一走 `anyhow`；需要映射到特定退出码的情况
//! 使用 `ScaffoldError`，由二进制入口 downcast 后决定进程状态。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid name '{0}'. Use only letters, numbers, _, - or . ; must start with a letter.")]
    InvalidName(String),

    #[error("{} already exists in {}. Aborting.", crate::project::ENTRY_FILE, .0.display())]
    EntryFileExists(PathBuf),

    #[error("'{0}' not found in your PATH.")]
    ToolNotFound(String),

    #[error("'{tool}' exited with {status}")]
    ToolFailed { tool: String, status: String },

    #[error("Invalid choice: {0}")]
    InvalidSelection(String),

    #[error("No project specified.")]
    NoProjectSpecified,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidName(_) => 2,
            ScaffoldError::EntryFileExists(_) => 3,
            ScaffoldError::ToolNotFound(_) => 4,
            ScaffoldError::ToolFailed { .. } => 5,
            ScaffoldError::InvalidSelection(_) => 6,
            ScaffoldError::NoProjectSpecified => 7,
            ScaffoldError::Config(_) => 1,
        }
    }
}

/// 从 anyhow 错误链中取出退出码，未知错误为 1
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScaffoldError>())
        .map(ScaffoldError::exit_code)
        .unwrap_or(1)
}
