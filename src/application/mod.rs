//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 校验与修复用例
//! - diagnostics: 已发布诊断的存储

pub mod diagnostics;
pub mod services;

pub use diagnostics::DiagnosticStore;
pub use services::{FixService, PassSummary, ValidationService};
