//! 项目管理模块
//!
//! 提供名称校验、Go 项目初始化、子模块登记与项目定位功能

pub mod initializer;
pub mod launcher;
pub mod module_path;
pub mod submodule;
pub mod validator;

/// 程序入口文件
pub const ENTRY_FILE: &str = "main.go";
pub const README_FILE: &str = "README.md";
pub const MAKEFILE: &str = "Makefile";
pub const GITIGNORE_FILE: &str = ".gitignore";

// 重导出
pub use initializer::{ensure_makefile, init_project, ProjectOptions, DEFAULT_DESCRIPTION};
pub use launcher::{
    ensure_project, list_projects, open_in_editor, parse_selection, prompt_selection,
    ProjectState, Selection,
};
pub use module_path::{go_mod_init, parse_module_directive, read_module_path, resolve_root_module_path};
pub use submodule::{register_submodule, SubmoduleReport};
pub use validator::{is_valid_name, package_ident, validate_name};
