//! 运行配置
//!
//! 默认值 → YAML 配置文件 → 环境变量，后者覆盖前者。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

pub const DEFAULT_MODULE_PREFIX: &str = "github.com/ouzrourextra/";

const CONFIG_ENV: &str = "GOSCAFFOLD_CONFIG";

/// 工具配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 模块路径前缀，例如 `github.com/user/`
    pub module_prefix: String,
    /// `gop` 管理的项目根目录
    pub projects_root: PathBuf,
    pub go_bin: String,
    pub git_bin: String,
    pub editor: String,
    /// `gop` 创建新项目时调用的初始化程序
    pub initializer_bin: String,
}

impl Default for Settings {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
            projects_root: home.join("Go"),
            go_bin: "go".to_string(),
            git_bin: "git".to_string(),
            editor: "code".to_string(),
            initializer_bin: "goc".to_string(),
        }
    }
}

impl Settings {
    /// 加载配置：默认值、配置文件、环境变量
    pub fn load() -> Result<Self> {
        let mut settings = match config_file_path() {
            Some(path) if path.is_file() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env(|key| env::var(key).ok());
        settings.normalize();
        Ok(settings)
    }

    /// 从 YAML 文件读取，缺省字段取默认值
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            ScaffoldError::Config(format!("{}: {}", path.display(), e)).into()
        })
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("GOSCAFFOLD_PREFIX") {
            self.module_prefix = v;
        }
        if let Some(v) = non_empty("GOSCAFFOLD_ROOT") {
            self.projects_root = PathBuf::from(v);
        }
        if let Some(v) = non_empty("GOSCAFFOLD_GO") {
            self.go_bin = v;
        }
        if let Some(v) = non_empty("GOSCAFFOLD_GIT") {
            self.git_bin = v;
        }
        if let Some(v) = non_empty("GOSCAFFOLD_EDITOR") {
            self.editor = v;
        }
        if let Some(v) = non_empty("GOSCAFFOLD_INITIALIZER") {
            self.initializer_bin = v;
        }
    }

    fn normalize(&mut self) {
        let prefix = self.module_prefix.trim();
        self.module_prefix = if prefix.is_empty() || prefix.ends_with('/') {
            prefix.to_string()
        } else {
            format!("{}/", prefix)
        };
    }

    /// 以前缀拼出模块路径
    pub fn module_path_for(&self, name: &str) -> String {
        format!("{}{}", self.module_prefix, name)
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("goscaffold").join("config.yaml"))
}
