//! Domain Layer - 核心业务实体
//!
//! 包含：
//! - models: 领域实体
//! - repositories: 工作区与选择器接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DomainError, Result};
pub use models::{
    DeclaredVarSet, Diagnostic, Document, DocumentId, EnvFile, FixOutcome, FixRequest,
    SourceLanguage, VariableReference,
};
pub use repositories::{EnvFileSelector, WorkspaceRepository};
