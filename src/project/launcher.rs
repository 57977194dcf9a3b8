//! 项目定位与启动
//!
//! 列出项目根目录下的子目录，按编号选择或按名称定位；
//! 项目不存在时创建并调用初始化程序，最后用编辑器打开。

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::validator::validate_name;
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::utils::{create_dir_all, dir_exists, ToolRunner};

/// 菜单选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Project(String),
}

/// 项目目录状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectState {
    /// 目录已存在，视为已初始化
    Existing,
    /// 新建目录并调用了初始化程序
    Created,
}

/// 项目根目录下的子目录名（排序）
pub fn list_projects(root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read projects root: {}", root.display()))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.path().is_dir() {
            projects.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    projects.sort();
    Ok(projects)
}

/// 编号菜单文本，1 起始，0 为退出
pub fn render_menu(projects: &[String]) -> String {
    let mut menu = String::from("Select a project to open (number):\n");
    for (idx, name) in projects.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", idx + 1, name));
    }
    menu.push_str("0. Exit\n");
    menu
}

/// 解析用户输入的编号
pub fn parse_selection(input: &str, projects: &[String]) -> Result<Selection, ScaffoldError> {
    let trimmed = input.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| ScaffoldError::InvalidSelection(format!("'{}' is not a number", trimmed)))?;

    match choice {
        0 => Ok(Selection::Exit),
        n if n <= projects.len() => Ok(Selection::Project(projects[n - 1].clone())),
        n => Err(ScaffoldError::InvalidSelection(format!(
            "{} is out of range (0-{})",
            n,
            projects.len()
        ))),
    }
}

/// 显示菜单并读取一行选择，不重试
pub fn prompt_selection<R, W>(projects: &[String], mut input: R, mut output: W) -> Result<Selection>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}Your choice: ", render_menu(projects))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read selection")?;

    Ok(parse_selection(&line, projects)?)
}

/// 确保 `root/name` 存在；新建时调用初始化程序
///
/// 初始化程序缺失或失败只提示警告，目录保留。
pub fn ensure_project(
    root: &Path,
    name: &str,
    description: Option<&str>,
    settings: &Settings,
    runner: &dyn ToolRunner,
) -> Result<(PathBuf, ProjectState)> {
    let project_path = root.join(name);

    if dir_exists(&project_path) {
        println!("Project exists: {}", project_path.display().to_string().green());
        return Ok((project_path, ProjectState::Existing));
    }

    validate_name(name)?;
    create_dir_all(&project_path)?;
    println!("Created project: {}", project_path.display().to_string().green());

    let mut args = Vec::new();
    if let Some(desc) = description {
        args.push("--desc");
        args.push(desc);
    }

    if let Err(e) = runner.run(&settings.initializer_bin, &args, &project_path) {
        println!(
            "{}",
            format!("⚠️  Error running {}: {}", settings.initializer_bin, e).yellow()
        );
    }

    Ok((project_path, ProjectState::Created))
}

/// 用编辑器打开项目，失败时仅提示，返回是否成功
pub fn open_in_editor(path: &Path, settings: &Settings, runner: &dyn ToolRunner) -> bool {
    let target = path.to_string_lossy().into_owned();
    match runner.run(&settings.editor, &[target.as_str()], path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{}", format!("⚠️  {}", e).yellow());
            eprintln!(
                "{}",
                format!("Could not open {}! Please check your PATH.", settings.editor).yellow()
            );
            false
        }
    }
}
