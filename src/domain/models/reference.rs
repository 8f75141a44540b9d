//! 源码中发现的变量引用

use super::document::DocumentId;

/// 一次变量引用，`start..end` 是变量名在文本中的字节区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub document: DocumentId,
}
