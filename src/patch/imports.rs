//! main.go import 段修补
//!
//! 先把 import 段解析成 `ImportSection`（无 / 单行 / 多行块），
//! 再按形状生成新的文本，其余部分逐字节保留。

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;
use std::path::Path;

use crate::utils::{file_exists, read_file, write_file};

/// 模板 main.go 自带的默认 import
pub const DEFAULT_IMPORT: &str = "fmt";

lazy_static! {
    // `import (` 后紧跟换行的多行块
    static ref BLOCK_OPEN: Regex = Regex::new(r"(?m)^import[ \t]*\([ \t]*\r?\n").unwrap();
    static ref SINGLE_DEFAULT: Regex =
        Regex::new(&format!(r#"(?m)^import[ \t]+"{}""#, regex::escape(DEFAULT_IMPORT))).unwrap();
    static ref PACKAGE_LINE: Regex = Regex::new(r"(?m)^package[ \t]+[^\n]*(\n|$)").unwrap();
    static ref QUOTED_PATH: Regex = Regex::new(r#""([^"]+)""#).unwrap();
}

/// main.go 中 import 段的形状
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSection {
    /// 没有 import 段；新块插入 `insert_at`（package 行之后）
    Absent { insert_at: usize },
    /// `import "fmt"` 单行形式，`span` 覆盖整条语句
    Single { span: Range<usize>, path: String },
    /// `import ( ... )` 多行块，`close_at` 指向右括号
    Block { close_at: usize, paths: Vec<String> },
}

impl ImportSection {
    /// 解析 import 段，优先级：多行块 > 单行默认 import > 无
    pub fn parse(source: &str) -> Self {
        if let Some(open) = BLOCK_OPEN.find(source) {
            let body_start = open.end();
            let close_at = find_block_close(&source[body_start..])
                .map(|i| body_start + i)
                .unwrap_or(source.len());

            let paths = QUOTED_PATH
                .captures_iter(&source[body_start..close_at])
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .collect();

            return ImportSection::Block { close_at, paths };
        }

        if let Some(single) = SINGLE_DEFAULT.find(source) {
            return ImportSection::Single {
                span: single.range(),
                path: DEFAULT_IMPORT.to_string(),
            };
        }

        let insert_at = PACKAGE_LINE.find(source).map(|m| m.end()).unwrap_or(0);
        ImportSection::Absent { insert_at }
    }

    /// 段中已有的 import 路径
    pub fn paths(&self) -> Vec<&str> {
        match self {
            ImportSection::Absent { .. } => Vec::new(),
            ImportSection::Single { path, .. } => vec![path.as_str()],
            ImportSection::Block { paths, .. } => paths.iter().map(String::as_str).collect(),
        }
    }
}

/// 块内第一个不在字符串或 `//` 注释里的 `)`
fn find_block_close(body: &str) -> Option<usize> {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let mut in_string = false;
        let mut prev = '\0';
        for (i, c) in line.char_indices() {
            match c {
                '"' => in_string = !in_string,
                '/' if !in_string && prev == '/' => break,
                ')' if !in_string => return Some(offset + i),
                _ => {}
            }
            prev = c;
        }
        offset += line.len();
    }
    None
}

/// 生成多行 import 块（不含结尾换行）
pub fn render_block(paths: &[&str]) -> String {
    let mut block = String::from("import (\n");
    for path in paths {
        block.push_str(&format!("\t\"{}\"\n", path));
    }
    block.push(')');
    block
}

/// `add_import` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportPatch {
    AlreadyImported,
    Patched(String),
}

/// 计算加入 `import_path` 之后的 main.go 内容
///
/// 带引号的路径只要在文件中出现过就视为已导入，不做任何修改。
pub fn add_import(source: &str, import_path: &str) -> ImportPatch {
    let quoted = format!("\"{}\"", import_path);
    if source.contains(&quoted) {
        return ImportPatch::AlreadyImported;
    }

    let patched = match ImportSection::parse(source) {
        ImportSection::Block { close_at, .. } => {
            let before = &source[..close_at];
            // 右括号前的缩进留在原行
            let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
            if before[line_start..].trim().is_empty() {
                splice(source, line_start..line_start, &format!("\t{}\n", quoted))
            } else {
                splice(source, close_at..close_at, &format!("\n\t{}\n", quoted))
            }
        }
        ImportSection::Single { span, path } => {
            splice(source, span, &render_block(&[path.as_str(), import_path]))
        }
        ImportSection::Absent { insert_at } => {
            let mut block = String::new();
            if insert_at > 0 && !source[..insert_at].ends_with('\n') {
                block.push('\n');
            }
            block.push('\n');
            block.push_str(&render_block(&[DEFAULT_IMPORT, import_path]));
            block.push('\n');
            splice(source, insert_at..insert_at, &block)
        }
    };

    ImportPatch::Patched(patched)
}

fn splice(source: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(source.len() + replacement.len());
    out.push_str(&source[..range.start]);
    out.push_str(replacement);
    out.push_str(&source[range.end..]);
    out
}

/// `patch_entry_file` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported,
    AlreadyImported,
    MissingEntryFile,
}

/// 在入口文件中导入 `import_path`，文件不存在时不做任何事
pub fn patch_entry_file(entry_file: &Path, import_path: &str) -> Result<ImportOutcome> {
    if !file_exists(entry_file) {
        return Ok(ImportOutcome::MissingEntryFile);
    }

    let source = read_file(entry_file)?;
    match add_import(&source, import_path) {
        ImportPatch::AlreadyImported => Ok(ImportOutcome::AlreadyImported),
        ImportPatch::Patched(content) => {
            write_file(entry_file, &content)?;
            Ok(ImportOutcome::Imported)
        }
    }
}
