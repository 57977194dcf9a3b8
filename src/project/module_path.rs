//! Go 模块路径
//!
//! 解析 go.mod 的 `module` 指令，以及调用 `go mod init`

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::config::Settings;
use crate::utils::{dir_name, read_file_if_exists, ToolRunner};

pub const GO_MOD_FILE: &str = "go.mod";

/// 取 go.mod 内容中第一条 `module` 指令的路径
pub fn parse_module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        if tokens.next()? != "module" {
            return None;
        }
        let path = tokens.next()?.trim_matches('"');
        if path.is_empty() || path.starts_with("//") {
            None
        } else {
            Some(path.to_string())
        }
    })
}

/// 读取 `dir/go.mod` 中的模块路径
///
/// go.mod 不存在或没有 `module` 指令时为 None；存在但读取失败时返回错误。
pub fn read_module_path(dir: &Path) -> Result<Option<String>> {
    let content = read_file_if_exists(&dir.join(GO_MOD_FILE))?;
    Ok(content.and_then(|c| parse_module_directive(&c)))
}

/// 根模块路径：优先 go.mod，否则用前缀 + 目录名
pub fn resolve_root_module_path(dir: &Path, settings: &Settings) -> Result<String> {
    if let Some(path) = read_module_path(dir)? {
        return Ok(path);
    }
    Ok(settings.module_path_for(&dir_name(dir)?))
}

/// 在 `dir` 中执行 `go mod init <module_path>`，失败即中止
pub fn go_mod_init(
    runner: &dyn ToolRunner,
    settings: &Settings,
    dir: &Path,
    module_path: &str,
) -> Result<()> {
    println!(
        "{}",
        format!("📦 go mod init {} ({})", module_path, dir.display()).cyan()
    );
    runner
        .run(&settings.go_bin, &["mod", "init", module_path], dir)
        .with_context(|| format!("Failed to initialize module {}", module_path))
}
