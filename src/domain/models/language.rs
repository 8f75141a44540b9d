//! 源码语言标签

use std::path::Path;

/// 支持的源码语言族
///
/// 每个语言族恰好对应一个提取模式，见 `core::extractor`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    /// `process.env.NAME`
    TypeScriptLike,
    /// `os.Getenv("NAME")`
    GoLike,
}

impl SourceLanguage {
    /// 从编辑器语言标识解析，不支持的标识返回 None
    #[must_use]
    pub fn from_language_id(id: &str) -> Option<Self> {
        match id {
            "typescript" | "javascript" | "typescriptreact" | "javascriptreact" => {
                Some(SourceLanguage::TypeScriptLike)
            }
            "go" => Some(SourceLanguage::GoLike),
            _ => None,
        }
    }

    /// 按扩展名推断文件对应的语言标识
    #[must_use]
    pub fn language_id_for_path(path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "ts" | "mts" | "cts" => Some("typescript"),
            "tsx" => Some("typescriptreact"),
            "js" | "mjs" | "cjs" => Some("javascript"),
            "jsx" => Some("javascriptreact"),
            "go" => Some("go"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_language_id() {
        assert_eq!(
            SourceLanguage::from_language_id("javascript"),
            Some(SourceLanguage::TypeScriptLike)
        );
        assert_eq!(
            SourceLanguage::from_language_id("go"),
            Some(SourceLanguage::GoLike)
        );
        assert_eq!(SourceLanguage::from_language_id("python"), None);
    }

    #[test]
    fn test_language_id_for_path() {
        assert_eq!(
            SourceLanguage::language_id_for_path(Path::new("src/app.TSX")),
            Some("typescriptreact")
        );
        assert_eq!(
            SourceLanguage::language_id_for_path(Path::new("main.go")),
            Some("go")
        );
        assert_eq!(SourceLanguage::language_id_for_path(Path::new("Makefile")), None);
        assert_eq!(SourceLanguage::language_id_for_path(Path::new("a.py")), None);
    }
}
