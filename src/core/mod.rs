//! 核心扫描与比对逻辑
//!
//! 这里的函数都是纯函数：输入文本，输出集合、引用或诊断，不做任何 I/O。

pub mod dotenv;
pub mod env_store;
pub mod extractor;
pub mod fix;
pub mod line_index;
pub mod validator;

pub use dotenv::{DotenvEntry, DotenvParser};
pub use env_store::EnvStore;
pub use extractor::{ExtractionRule, extract};
pub use fix::{AppendResult, append_declaration, is_declared};
pub use line_index::LineIndex;
pub use validator::validate;
