//! 领域实体

pub mod diagnostic;
pub mod document;
pub mod env_file;
pub mod fix;
pub mod language;
pub mod reference;

pub use diagnostic::{Diagnostic, FixRequest, Position, Range, Severity};
pub use document::{Document, DocumentId};
pub use env_file::{DeclaredVarSet, EnvFile};
pub use fix::FixOutcome;
pub use language::SourceLanguage;
pub use reference::VariableReference;
