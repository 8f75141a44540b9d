//! 应用服务（用例实现）

pub mod fix_service;
pub mod validation_service;

pub use fix_service::FixService;
pub use validation_service::{EnvFileReport, PassSummary, ValidationService};
