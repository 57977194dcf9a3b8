//! README.md 子模块列表维护

use anyhow::Result;
use std::path::Path;

use crate::utils::{read_file_if_exists, write_file};

pub const SUBMODULES_HEADING: &str = "## Submodules";

/// 子模块的列表行（不含换行）：`` - `name`: description ``
pub fn submodule_line(name: &str, description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(desc) => format!("- `{}`: {}", name, desc),
        None => format!("- `{}`", name),
    }
}

/// 计算登记子模块后的 README 内容
///
/// - 没有 README 时生成只含标题与该行的新文件
/// - 缺少 `## Submodules` 标题时追加到末尾
/// - 删除该子模块已有的行，再把新行追加到文件末尾
pub fn upsert_submodule(existing: Option<&str>, name: &str, description: Option<&str>) -> String {
    let line = submodule_line(name, description);

    let Some(content) = existing else {
        return format!("# Submodules\n\n{}\n", line);
    };

    let mut content = content.to_string();
    if !content.lines().any(|l| l.trim() == SUBMODULES_HEADING) {
        content.push_str(&format!("\n{}\n", SUBMODULES_HEADING));
    }

    let marker = format!("- `{}`", name);
    let mut updated = content
        .lines()
        .filter(|l| !l.trim_start().starts_with(&marker))
        .collect::<Vec<_>>()
        .join("\n");

    if !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&line);
    updated.push('\n');
    updated
}

/// 读取、更新并写回 README
///
/// README 存在但无法读取时返回错误，原文件保持不变。
pub fn update_readme(path: &Path, name: &str, description: Option<&str>) -> Result<()> {
    let existing = read_file_if_exists(path)?;
    let content = upsert_submodule(existing.as_deref(), name, description);
    write_file(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PROJECT_README: &str = "# demo\n\nAuto-generated Go project.\n";

    #[test]
    fn test_submodule_line() {
        assert_eq!(submodule_line("utils", None), "- `utils`");
        assert_eq!(submodule_line("utils", Some("")), "- `utils`");
        assert_eq!(submodule_line("utils", Some("   ")), "- `utils`");
        assert_eq!(
            submodule_line("utils", Some("  padded  ")),
            "- `utils`: padded"
        );
        assert_eq!(
            submodule_line("utils", Some("helpers")),
            "- `utils`: helpers"
        );
    }

    #[test]
    fn test_new_readme() {
        assert_eq!(
            upsert_submodule(None, "utils", Some("helpers")),
            "# Submodules\n\n- `utils`: helpers\n"
        );
    }

    #[test]
    fn test_heading_appended_once() {
        let once = upsert_submodule(Some(PROJECT_README), "utils", None);
        assert_eq!(
            once,
            "# demo\n\nAuto-generated Go project.\n\n## Submodules\n- `utils`\n"
        );

        let two = upsert_submodule(Some(&once), "store", Some("persistence"));
        assert_eq!(two.matches(SUBMODULES_HEADING).count(), 1);
        assert!(two.ends_with("- `utils`\n- `store`: persistence\n"));
    }

    #[test]
    fn test_idempotent() {
        let once = upsert_submodule(Some(PROJECT_README), "utils", Some("helpers"));
        let twice = upsert_submodule(Some(&once), "utils", Some("helpers"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reregister_replaces_line() {
        let first = upsert_submodule(Some(PROJECT_README), "utils", Some("old"));
        let second = upsert_submodule(Some(&first), "utils", Some("new"));

        let lines: Vec<&str> = second
            .lines()
            .filter(|l| l.trim_start().starts_with("- `utils`"))
            .collect();
        assert_eq!(lines, vec!["- `utils`: new"]);
    }

    #[test]
    fn test_similar_names_are_kept() {
        let first = upsert_submodule(Some(PROJECT_README), "utils2", None);
        let second = upsert_submodule(Some(&first), "utils", None);
        assert!(second.contains("- `utils2`\n"));
        assert!(second.ends_with("- `utils`\n"));
    }

    #[test]
    fn test_indented_line_removed() {
        let content = "# demo\n\n## Submodules\n  - `utils`: indented\n";
        let out = upsert_submodule(Some(content), "utils", None);
        assert_eq!(out, "# demo\n\n## Submodules\n- `utils`\n");
    }

    #[test]
    fn test_update_readme_file() {
        let temp = TempDir::new().unwrap();
        let readme = temp.path().join("README.md");

        update_readme(&readme, "utils", None).unwrap();
        update_readme(&readme, "utils", Some("helpers")).unwrap();

        let content = std::fs::read_to_string(&readme).unwrap();
        assert_eq!(
            content,
            "# Submodules\n\n\n## Submodules\n- `utils`: helpers\n"
        );

        update_readme(&readme, "utils", Some("helpers")).unwrap();
        assert_eq!(std::fs::read_to_string(&readme).unwrap(), content);
    }

    #[test]
    fn test_unreadable_readme_is_left_untouched() {
        let temp = TempDir::new().unwrap();
        let readme = temp.path().join("README.md");
        let original: &[u8] = b"# caf\xe9 notes\n\nlots of user text\nmore\n";
        std::fs::write(&readme, original).unwrap();

        assert!(update_readme(&readme, "utils", None).is_err());
        assert_eq!(std::fs::read(&readme).unwrap(), original);
    }
}
