//! 项目初始化
//!
//! 在目标目录创建 main.go、go.mod、.gitignore、README.md、Makefile，
//! 并可选地初始化 Git 仓库。

use anyhow::Result;
use colored::*;
use std::path::Path;

use super::module_path::go_mod_init;
use super::validator::validate_name;
use super::{ENTRY_FILE, GITIGNORE_FILE, MAKEFILE, README_FILE};
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::templates::TemplateAssets;
use crate::utils::{init_repository, write_file, write_if_absent, ToolRunner};

pub const DEFAULT_DESCRIPTION: &str = "Auto-generated Go project.";

/// 项目初始化参数
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub name: String,
    pub description: String,
    pub init_git: bool,
}

impl ProjectOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            init_git: true,
        }
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        if let Some(desc) = description.filter(|d| !d.trim().is_empty()) {
            self.description = desc.to_string();
        }
        self
    }

    pub fn with_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }
}

/// 确保 Makefile 存在；已存在时视为用户文件，从不覆盖
pub fn ensure_makefile(dir: &Path) -> Result<bool> {
    write_if_absent(&dir.join(MAKEFILE), &TemplateAssets::makefile()?)
}

/// 在 `dir` 中初始化 Go 项目，返回模块路径
///
/// 名称非法或 main.go 已存在时直接返回错误，不写任何文件。
/// README.md 与 .gitignore 每次都会重写。
pub fn init_project(
    dir: &Path,
    options: &ProjectOptions,
    settings: &Settings,
    runner: &dyn ToolRunner,
) -> Result<String> {
    validate_name(&options.name)?;

    if dir.join(ENTRY_FILE).exists() {
        return Err(ScaffoldError::EntryFileExists(dir.to_path_buf()).into());
    }

    let module_path = settings.module_path_for(&options.name);
    println!(
        "{}",
        format!(
            "📦 Creating Go project in: {} (module: {})",
            dir.display(),
            module_path
        )
        .cyan()
    );

    write_file(&dir.join(ENTRY_FILE), &TemplateAssets::main_go(&options.name)?)?;

    go_mod_init(runner, settings, dir, &module_path)?;

    write_file(&dir.join(GITIGNORE_FILE), &TemplateAssets::gitignore()?)?;
    write_file(
        &dir.join(README_FILE),
        &TemplateAssets::readme(&options.name, &options.description)?,
    )?;
    ensure_makefile(dir)?;

    if options.init_git {
        init_repository(runner, &settings.git_bin, dir);
    } else {
        println!("{}", "ℹ️  Skipped Git initialization.".yellow());
    }

    println!("{}", "✅ Done! Your Go project is ready.".green());
    Ok(module_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::module_path::read_module_path;
    use crate::utils::process::testing::FakeRunner;
    use std::fs;
    use tempfile::TempDir;

    fn settings() -> Settings {
        Settings {
            module_prefix: "github.com/tester/".to_string(),
            ..Settings::default()
        }
    }

    fn project_dir(temp: &TempDir) -> std::path::PathBuf {
        let dir = temp.path().join("demo");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_init_project_writes_files() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        let runner = FakeRunner::new();
        let options = ProjectOptions::new("demo").with_git(false);

        let module = init_project(&dir, &options, &settings(), &runner).unwrap();
        assert_eq!(module, "github.com/tester/demo");

        for file in [ENTRY_FILE, GITIGNORE_FILE, README_FILE, MAKEFILE] {
            assert!(dir.join(file).is_file(), "{}", file);
        }
        let readme = fs::read_to_string(dir.join(README_FILE)).unwrap();
        assert!(readme.contains("demo"));
        assert!(readme.contains(DEFAULT_DESCRIPTION));
        assert!(fs::read_to_string(dir.join(ENTRY_FILE))
            .unwrap()
            .contains("Welcome to demo!"));
        assert_eq!(read_module_path(&dir).unwrap(), Some(module));
        assert!(runner.calls_to("git").is_empty());
    }

    #[test]
    fn test_init_project_with_git() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        let runner = FakeRunner::new();
        let options = ProjectOptions::new("demo").with_description(Some("A demo service"));

        init_project(&dir, &options, &settings(), &runner).unwrap();

        assert_eq!(runner.calls_to("git").len(), 3);
        assert_eq!(
            fs::read_to_string(dir.join(README_FILE)).unwrap(),
            "# demo\n\nA demo service\n"
        );
    }

    #[test]
    fn test_init_project_without_git_binary() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        let runner = FakeRunner::new().without("git");

        let result = init_project(&dir, &ProjectOptions::new("demo"), &settings(), &runner);
        assert!(result.is_ok());
        assert!(runner.calls_to("git").is_empty());
    }

    #[test]
    fn test_invalid_name_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        let runner = FakeRunner::new();

        let err = init_project(&dir, &ProjectOptions::new("1bad"), &settings(), &runner)
            .unwrap_err();
        assert_eq!(crate::error::exit_code_for(&err), 2);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_existing_entry_file_aborts() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        fs::write(dir.join(ENTRY_FILE), "package main\n").unwrap();
        let runner = FakeRunner::new();

        let err = init_project(&dir, &ProjectOptions::new("demo"), &settings(), &runner)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::EntryFileExists(_))
        ));
        assert_eq!(fs::read_to_string(dir.join(ENTRY_FILE)).unwrap(), "package main\n");
        assert!(!dir.join(README_FILE).exists());
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_module_init_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        let runner = FakeRunner::new().failing("go");

        let err = init_project(&dir, &ProjectOptions::new("demo"), &settings(), &runner)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ToolFailed { .. })
        ));
        assert!(!dir.join(README_FILE).exists());
        assert!(!dir.join(MAKEFILE).exists());
    }

    #[test]
    fn test_makefile_is_never_overwritten() {
        let temp = TempDir::new().unwrap();
        let dir = project_dir(&temp);
        fs::write(dir.join(MAKEFILE), "custom:\n\techo mine\n").unwrap();
        let runner = FakeRunner::new();

        init_project(&dir, &ProjectOptions::new("demo").with_git(false), &settings(), &runner)
            .unwrap();
        assert!(!ensure_makefile(&dir).unwrap());

        assert_eq!(
            fs::read_to_string(dir.join(MAKEFILE)).unwrap(),
            "custom:\n\techo mine\n"
        );
    }
}
