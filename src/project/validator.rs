//! 项目 / 子模块名称校验

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ScaffoldError;

lazy_static! {
    // 字母开头，后续为字母、数字、_、-、.
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_.\-]*$").unwrap();
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// 把合法名称转换成可用作 Go `package` 的标识符
pub fn package_ident(name: &str) -> String {
    name.chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .collect()
}
