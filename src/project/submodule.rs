//! 子模块登记
//!
//! 创建子目录与包文件，初始化嵌套模块，写入 README 并在 main.go 中导入。

use anyhow::Result;
use colored::*;
use std::path::Path;

use super::initializer::ensure_makefile;
use super::module_path::{go_mod_init, resolve_root_module_path, GO_MOD_FILE};
use super::validator::{package_ident, validate_name};
use super::{ENTRY_FILE, README_FILE};
use crate::config::Settings;
use crate::patch::{patch_entry_file, update_readme, ImportOutcome};
use crate::templates::TemplateAssets;
use crate::utils::{create_dir_all, dir_exists, write_if_absent, ToolRunner};

/// 子模块登记结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleReport {
    pub module_path: String,
    pub created_dir: bool,
    pub module_initialized: bool,
    pub import: ImportOutcome,
}

/// 在项目目录 `dir` 下登记子模块 `name`
///
/// 子目录已存在、go.mod 已存在或 main.go 缺失都只提示警告；
/// `go mod init` 失败则中止。
pub fn register_submodule(
    dir: &Path,
    name: &str,
    description: Option<&str>,
    settings: &Settings,
    runner: &dyn ToolRunner,
) -> Result<SubmoduleReport> {
    validate_name(name)?;

    let sub_dir = dir.join(name);
    let created_dir = !dir_exists(&sub_dir);
    if created_dir {
        create_dir_all(&sub_dir)?;
    } else {
        println!(
            "{}",
            format!("⚠️  Subfolder '{}' already exists.", name).yellow()
        );
    }

    let root_module = resolve_root_module_path(dir, settings)?;
    let module_path = format!("{}/{}", root_module, name);

    write_if_absent(
        &sub_dir.join(format!("{}.go", name)),
        &TemplateAssets::package_go(&package_ident(name))?,
    )?;

    // 嵌套模块在子目录中初始化，进程当前目录不变
    let module_initialized = if sub_dir.join(GO_MOD_FILE).exists() {
        println!(
            "{}",
            format!("ℹ️  {}/{} already exists; skipping go mod init.", name, GO_MOD_FILE).yellow()
        );
        false
    } else {
        go_mod_init(runner, settings, &sub_dir, &module_path)?;
        true
    };

    ensure_makefile(dir)?;
    update_readme(&dir.join(README_FILE), name, description)?;

    let import = patch_entry_file(&dir.join(ENTRY_FILE), &module_path)?;
    match import {
        ImportOutcome::Imported => {
            println!("{}", format!("➕ Imported '{}' in {}!", name, ENTRY_FILE).cyan())
        }
        ImportOutcome::AlreadyImported => println!(
            "{}",
            format!("ℹ️  Submodule '{}' already imported in {}.", name, ENTRY_FILE).yellow()
        ),
        ImportOutcome::MissingEntryFile => println!(
            "{}",
            format!("⚠️  {} not found; cannot import submodule.", ENTRY_FILE).yellow()
        ),
    }

    println!(
        "{}",
        format!("✅ Submodule '{}' created and registered!", name).green()
    );

    Ok(SubmoduleReport {
        module_path,
        created_dir,
        module_initialized,
        import,
    })
}
