//! 诊断结果与修复请求

use super::document::DocumentId;
use serde::Serialize;
use std::fmt;

/// 文本中的一个位置，行列均从 0 开始，列按 UTF-16 码元计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// 半开区间 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// 修复请求：要补充的变量名 + 发起修复的文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixRequest {
    pub variable_name: String,
    pub document: DocumentId,
}

impl FixRequest {
    pub fn new(variable_name: impl Into<String>, document: DocumentId) -> Self {
        Self {
            variable_name: variable_name.into(),
            document,
        }
    }

    /// 快速修复的标题
    #[must_use]
    pub fn title(&self) -> String {
        format!("Add {} to .env file", self.variable_name)
    }
}

/// 单条诊断
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    pub range: Range,
    pub fix: FixRequest,
}

impl Diagnostic {
    /// 未声明变量的警告
    pub fn undeclared(name: &str, range: Range, document: DocumentId) -> Self {
        Self {
            message: format!("{name} is not defined in any .env file"),
            severity: Severity::Warning,
            range,
            fix: FixRequest::new(name, document),
        }
    }

    #[must_use]
    pub fn variable_name(&self) -> &str {
        &self.fix.variable_name
    }
}
