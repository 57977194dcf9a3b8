//! 外部工具调用
//!
//! 所有外部程序（go、git、编辑器、goc）都通过 `ToolRunner` 调用，
//! 工作目录按次指定，进程自身的当前目录从不改变。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ScaffoldError;

/// 外部工具执行器
pub trait ToolRunner {
    /// 在 PATH 中查找工具
    fn locate(&self, tool: &str) -> Option<PathBuf>;

    /// 在 `cwd` 中同步运行工具，等待其结束
    ///
    /// 工具不存在返回 `ScaffoldError::ToolNotFound`，
    /// 非零退出返回 `ScaffoldError::ToolFailed`。
    fn run(&self, tool: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// 基于 PATH 查找与 `std::process::Command` 的默认实现
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }

    fn run(&self, tool: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let exe = self
            .locate(tool)
            .ok_or_else(|| ScaffoldError::ToolNotFound(tool.to_string()))?;

        // stdio 继承，让工具自己的输出直接显示
        let status = Command::new(&exe)
            .args(args)
            .current_dir(cwd)
            .status()
            .with_context(|| format!("Failed to execute {}", exe.display()))?;

        if !status.success() {
            return Err(ScaffoldError::ToolFailed {
                tool: tool.to_string(),
                status: status.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
