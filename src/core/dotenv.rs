//! .env 格式解析器
//!
//! 只关心键是否存在，但值仍按常见 dotenv 语法解析，
//! 这样多行引号值里的内容不会被误当成新的键。

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `[export ]KEY = rest` 或 `[export ]KEY: rest`
static LINE_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?([A-Za-z0-9_.\-]+)(?:\s*=\s*|:\s+)(.*)$")
        .expect("dotenv 行正则无效")
});

/// 解析出的一条声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvEntry {
    pub key: String,
    pub value: String,
    /// 声明所在的行号（从 1 开始）
    pub line: usize,
}

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行
    /// - 格式：[export ]KEY=VALUE，等号两侧允许空格；也接受 `KEY: VALUE`（冒号后必须有空白）
    /// - 值可用单引号、双引号或反引号包裹，引号值可以跨行
    /// - 未加引号的值里，空白后的 # 开始行内注释
    /// - 无法识别的行直接跳过，不会中断解析
    #[must_use]
    pub fn parse(content: &str) -> Vec<DotenvEntry> {
        let lines: Vec<&str> = content.lines().collect();
        let mut entries = Vec::new();
        let mut idx = 0;

        while idx < lines.len() {
            let line = lines[idx];
            let line_no = idx + 1;
            idx += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(caps) = LINE_HEAD.captures(line) else {
                debug!(line = line_no, "跳过无法解析的 .env 行");
                continue;
            };
            let key = caps[1].to_string();
            let rest = caps.get(2).map_or("", |m| m.as_str());

            let value = match rest.chars().next() {
                Some(quote @ ('"' | '\'' | '`')) => {
                    let (value, consumed) = Self::parse_quoted(&rest[1..], quote, &lines[idx..]);
                    idx += consumed;
                    value
                }
                _ => Self::strip_inline_comment(rest).to_string(),
            };

            entries.push(DotenvEntry {
                key,
                value,
                line: line_no,
            });
        }

        entries
    }

    /// 只返回键名，按出现顺序
    pub fn keys(content: &str) -> impl Iterator<Item = String> {
        Self::parse(content).into_iter().map(|e| e.key)
    }

    /// 解析引号值，返回 (值, 额外消耗的行数)
    ///
    /// 找不到闭合引号时退化为当前行剩余的原始文本，不吞掉后续行。
    fn parse_quoted(first: &str, quote: char, following: &[&str]) -> (String, usize) {
        if let Some(end) = find_closing(first, quote) {
            return (unescape(&first[..end], quote), 0);
        }

        let mut buf = first.to_string();
        for (i, next) in following.iter().enumerate() {
            buf.push('\n');
            if let Some(end) = find_closing(next, quote) {
                buf.push_str(&next[..end]);
                return (unescape(&buf, quote), i + 1);
            }
            buf.push_str(next);
        }

        debug!("引号未闭合，按原始文本处理");
        let raw = format!("{quote}{first}");
        (Self::strip_inline_comment(&raw).to_string(), 0)
    }

    fn strip_inline_comment(value: &str) -> &str {
        let bytes = value.as_bytes();
        let cut = (0..bytes.len())
            .find(|&i| bytes[i] == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()))
            .unwrap_or(bytes.len());
        value[..cut].trim()
    }
}

/// 查找未转义的闭合引号
fn find_closing(s: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote == '"' {
            escaped = true;
        } else if c == quote {
            return Some(i);
        }
    }
    None
}

fn unescape(value: &str, quote: char) -> String {
    if quote != '"' {
        return value.to_string();
    }
    value
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = r"
# 注释会被忽略
KEY1=value1
KEY2=value2
        ";

        let result = DotenvParser::parse(content);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].key, "KEY1");
        assert_eq!(result[0].value, "value1");
        assert_eq!(result[1].line, 4);
    }

    #[test]
    fn test_parse_empty_value() {
        let result = DotenvParser::parse("KEY=\nKEY2=value");
        assert_eq!(result[0].key, "KEY");
        assert_eq!(result[0].value, "");
        assert_eq!(result[1].value, "value");
    }

    #[test]
    fn test_export_prefix_and_spaces() {
        let result = DotenvParser::parse("export API_URL = http://localhost # dev");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "API_URL");
        assert_eq!(result[0].value, "http://localhost");
    }

    #[test]
    fn test_colon_separator() {
        let content = "HOST: localhost\nexport PORT: \"8080\"\nURL=http://a:b\nhttp://not-a-key\nTIGHT:1";
        let result = DotenvParser::parse(content);
        let keys: Vec<&str> = result.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["HOST", "PORT", "URL"]);
        assert_eq!(result[0].value, "localhost");
        assert_eq!(result[1].value, "8080");
        assert_eq!(result[2].value, "http://a:b");
    }

    #[test]
    fn test_hash_inside_unquoted_value() {
        let result = DotenvParser::parse("COLOR=#fff\nURL=a#b");
        assert_eq!(result[0].value, "");
        assert_eq!(result[1].value, "a#b");
    }

    #[test]
    fn test_quoted_values() {
        let content = "A=\"hello # world\"\nB='single'\nC=`tick`\nD=\"esc \\\"q\\\"\"";
        let result = DotenvParser::parse(content);
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].value, "hello # world");
        assert_eq!(result[1].value, "single");
        assert_eq!(result[2].value, "tick");
        assert_eq!(result[3].value, "esc \"q\"");
    }

    #[test]
    fn test_multiline_quoted_value_hides_inner_keys() {
        let content = "CERT=\"-----BEGIN-----\nNOT_A_KEY=1\n-----END-----\"\nAFTER=2";
        let keys: Vec<String> = DotenvParser::keys(content).collect();
        assert_eq!(keys, vec!["CERT", "AFTER"]);

        let result = DotenvParser::parse(content);
        assert!(result[0].value.contains("NOT_A_KEY=1"));
        assert_eq!(result[1].line, 4);
    }

    #[test]
    fn test_unterminated_quote_keeps_following_lines() {
        let content = "BROKEN=\"oops\nNEXT=1";
        let keys: Vec<String> = DotenvParser::keys(content).collect();
        assert_eq!(keys, vec!["BROKEN", "NEXT"]);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let content = "just some text\n=novalue\nBAD KEY=1\nGOOD=1";
        let keys: Vec<String> = DotenvParser::keys(content).collect();
        assert_eq!(keys, vec!["GOOD"]);
    }
}
