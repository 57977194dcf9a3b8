//! 模板文件嵌入
//!
//! 嵌入项目初始化所需的模板文件，`{{key}}` 占位符在渲染时替换

use anyhow::{anyhow, Result};
use rust_embed::RustEmbed;

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// main.go 模板
    pub fn main_go(name: &str) -> Result<String> {
        Self::render("main.go.tmpl", &[("name", name)])
    }

    /// 子模块包文件模板
    pub fn package_go(package: &str) -> Result<String> {
        Self::render("package.go.tmpl", &[("package", package)])
    }

    /// README.md 模板
    pub fn readme(name: &str, description: &str) -> Result<String> {
        Self::render(
            "README.md.tmpl",
            &[("name", name), ("description", description)],
        )
    }

    /// .gitignore 内容
    pub fn gitignore() -> Result<String> {
        Self::get_file("gitignore")
    }

    /// Makefile 内容
    pub fn makefile() -> Result<String> {
        Self::get_file("Makefile")
    }

    fn render(filename: &str, vars: &[(&str, &str)]) -> Result<String> {
        let template = Self::get_file(filename)?;
        Ok(vars.iter().fold(template, |acc, (key, value)| {
            acc.replace(&format!("{{{{{}}}}}", key), value)
        }))
    }

    /// 获取指定模板文件
    fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename)
            .ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }

    /// 列出所有可用的模板文件
    pub fn list_templates() -> Vec<String> {
        Self::iter()
            .map(|path| path.as_ref().to_string())
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
