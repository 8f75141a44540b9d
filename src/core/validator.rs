//! 文档校验：引用集合与已声明集合做差

use crate::core::extractor;
use crate::core::line_index::LineIndex;
use crate::domain::models::{DeclaredVarSet, Diagnostic, Document, Range, SourceLanguage};

/// 找出文档中引用了但未在任何 .env 文件声明的变量
///
/// 按扫描顺序输出，不去重；不支持的语言返回空列表。
#[must_use]
pub fn validate(document: &Document, declared: &DeclaredVarSet) -> Vec<Diagnostic> {
    let Some(language) = SourceLanguage::from_language_id(&document.language_id) else {
        return Vec::new();
    };

    let index = LineIndex::new(&document.text);
    extractor::extract(&document.text, language, &document.id)
        .filter(|reference| !declared.contains(&reference.name))
        .map(|reference| {
            let range = Range::new(index.position(reference.start), index.position(reference.end));
            Diagnostic::undeclared(&reference.name, range, reference.document)
        })
        .collect()
}
