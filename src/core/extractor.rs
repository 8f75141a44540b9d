//! 按语言提取环境变量引用
//!
//! 纯文本匹配，不做语法分析：拼接出来的变量名、非字面量参数都不会被识别。
//! 大小写不敏感只作用于 ASCII，变量名只由 `[A-Za-z0-9_]` 组成。
//! 新增一种语言只需要在 [`ExtractionRule::for_language`] 里加一条规则。

use crate::domain::models::{DocumentId, SourceLanguage, VariableReference};
use regex::Regex;
use std::sync::LazyLock;

static TYPESCRIPT_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)process\.env\.([A-Z0-9_]+)").expect("process.env 正则无效")
});

static GO_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)os\.Getenv\("([A-Z0-9_]+)"\)"#).expect("os.Getenv 正则无效")
});

/// 一条提取规则：匹配模式 + 变量名所在的捕获组
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRule {
    pattern: &'static LazyLock<Regex>,
    name_group: usize,
}

impl ExtractionRule {
    #[must_use]
    pub fn for_language(language: SourceLanguage) -> Self {
        match language {
            SourceLanguage::TypeScriptLike => Self {
                pattern: &TYPESCRIPT_LIKE,
                name_group: 1,
            },
            SourceLanguage::GoLike => Self {
                pattern: &GO_LIKE,
                name_group: 1,
            },
        }
    }

    pub fn pattern(&self) -> &'static Regex {
        self.pattern
    }
}

/// 从文本中按出现顺序惰性地提取变量引用
///
/// 无状态，每次调用都从头扫描。
pub fn extract<'t>(
    text: &'t str,
    language: SourceLanguage,
    document: &'t DocumentId,
) -> impl Iterator<Item = VariableReference> + 't {
    let rule = ExtractionRule::for_language(language);
    rule.pattern().captures_iter(text).filter_map(move |caps| {
        let name = caps.get(rule.name_group)?;
        Some(VariableReference {
            name: name.as_str().to_string(),
            start: name.start(),
            end: name.end(),
            document: document.clone(),
        })
    })
}
