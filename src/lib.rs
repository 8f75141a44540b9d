//! envlint - 环境变量声明检查工具
//!
//! 扫描源码里对环境变量的引用，与工作区中 `.env*` 文件的声明做差，
//! 报告未声明的变量，并提供把变量追加到 .env 文件的修复。
//!
//! 分层结构：
//! - domain: 实体、错误与端口
//! - core: 纯扫描与比对逻辑
//! - application: 校验/修复用例与诊断存储
//! - infrastructure: 文件系统、配置、监听
//! - commands / cli / app: 终端宿主

// 领域层
pub mod domain;

// 核心逻辑
pub mod core;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

// 日志
pub mod logging;

#[cfg(test)]
pub(crate) mod test_utils;

// 重新导出常用类型
pub use application::{DiagnosticStore, FixService, ValidationService};
pub use domain::{
    DeclaredVarSet, Diagnostic, Document, DocumentId, DomainError, EnvFile, FixOutcome,
    FixRequest, Result, SourceLanguage, VariableReference,
};
