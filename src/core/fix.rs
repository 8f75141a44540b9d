//! 追加声明的文本修改
//!
//! 只计算追加的文本，不改动已有行。

/// 对文件内容计算修复结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendResult {
    /// 需要追加到文件末尾的文本
    Append(String),
    /// 已有 `NAME=` 开头的行
    AlreadyPresent,
}

/// 判断内容中是否已有以 `NAME=` 开头的行
///
/// 只做前缀匹配：`NAME=` 与 `NAME=value` 同样视为已声明。
#[must_use]
pub fn is_declared(content: &str, name: &str) -> bool {
    let prefix = format!("{name}=");
    content.lines().any(|line| line.starts_with(&prefix))
}

/// 计算要追加的 `\nNAME=`，已声明时返回 `AlreadyPresent`
#[must_use]
pub fn append_declaration(content: &str, name: &str) -> AppendResult {
    if is_declared(content, name) {
        return AppendResult::AlreadyPresent;
    }
    AppendResult::Append(format!("\n{name}="))
}
