//! 诊断渲染

use crate::application::DiagnosticStore;
use crate::domain::error::Result;
use crate::domain::models::{Diagnostic, Range, Severity};
use crate::infrastructure::paths::display_relative;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct DocumentView<'a> {
    document: &'a str,
    diagnostics: Vec<DiagnosticView<'a>>,
}

#[derive(Serialize)]
struct DiagnosticView<'a> {
    message: &'a str,
    severity: Severity,
    range: Range,
    variable: &'a str,
    fix: FixView,
}

/// 对应编辑器里的快速修复
#[derive(Serialize)]
struct FixView {
    title: String,
    command: String,
}

impl<'a> From<&'a Diagnostic> for DiagnosticView<'a> {
    fn from(d: &'a Diagnostic) -> Self {
        Self {
            message: &d.message,
            severity: d.severity,
            range: d.range,
            variable: d.variable_name(),
            fix: FixView {
                title: d.fix.title(),
                command: format!(
                    "envlint fix {} --document {}",
                    d.fix.variable_name, d.fix.document
                ),
            },
        }
    }
}

/// `path:line:col: warning: message`，行列从 1 开始
pub fn render_text(store: &DiagnosticStore, root: &Path) -> Vec<String> {
    store
        .iter()
        .flat_map(|(document, diagnostics)| {
            let shown = display_relative(root, &document.to_path());
            diagnostics.iter().map(move |d| {
                format!(
                    "{}:{}:{}: {}: {}",
                    shown,
                    d.range.start.line + 1,
                    d.range.start.character + 1,
                    d.severity,
                    d.message
                )
            })
        })
        .collect()
}

/// 只输出有诊断的文档
pub fn render_json(store: &DiagnosticStore) -> Result<String> {
    let views: Vec<DocumentView<'_>> = store
        .iter()
        .filter(|(_, diagnostics)| !diagnostics.is_empty())
        .map(|(document, diagnostics)| DocumentView {
            document: document.as_str(),
            diagnostics: diagnostics.iter().map(DiagnosticView::from).collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DocumentId, Position};

    fn store() -> DiagnosticStore {
        let mut store = DiagnosticStore::new();
        let doc = DocumentId::new("/work/src/app.ts");
        let range = Range::new(Position::new(2, 12), Position::new(2, 18));
        store.publish(
            doc.clone(),
            vec![Diagnostic::undeclared("SECRET", range, doc)],
        );
        store.publish(DocumentId::new("/work/clean.go"), vec![]);
        store
    }

    #[test]
    fn test_render_text() {
        let lines = render_text(&store(), Path::new("/work"));
        assert_eq!(
            lines,
            vec!["src/app.ts:3:13: warning: SECRET is not defined in any .env file"]
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&store()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let documents = value.as_array().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["document"], "/work/src/app.ts");
        let diag = &documents[0]["diagnostics"][0];
        assert_eq!(diag["variable"], "SECRET");
        assert_eq!(diag["severity"], "warning");
        assert_eq!(diag["range"]["start"]["line"], 2);
        assert_eq!(diag["range"]["end"]["character"], 18);
        assert_eq!(diag["fix"]["title"], "Add SECRET to .env file");
        assert_eq!(
            diag["fix"]["command"],
            "envlint fix SECRET --document /work/src/app.ts"
        );
    }
}
