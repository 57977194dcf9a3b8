//! 文本修补
//!
//! 对 main.go 的 import 段与 README 的子模块列表做幂等修改。
//! 纯函数负责计算新内容，文件读写由外层的 `*_file` 函数完成。

pub mod imports;
pub mod readme;

pub use imports::{add_import, patch_entry_file, ImportOutcome, ImportPatch, ImportSection};
pub use readme::{submodule_line, update_readme, upsert_submodule, SUBMODULES_HEADING};
