//! 修复应用服务

use crate::core::{AppendResult, append_declaration};
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{EnvFile, FixOutcome, FixRequest};
use crate::domain::repositories::{EnvFileSelector, WorkspaceRepository};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::info;

static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("变量名正则无效"));

/// 修复服务：把缺失的变量追加到选中的 .env 文件
pub struct FixService {
    repository: Arc<dyn WorkspaceRepository>,
}

impl FixService {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    /// 处理一次修复请求
    ///
    /// - 没有候选文件：`NoEnvFileFound`
    /// - 只有一个：直接使用
    /// - 多个：交给选择器，选择器返回 None 时取消
    pub async fn apply(
        &self,
        request: &FixRequest,
        selector: &dyn EnvFileSelector,
    ) -> Result<FixOutcome> {
        Self::check_name(&request.variable_name)?;

        let mut candidates = self.repository.find_env_files().await?;
        let target = match candidates.len() {
            0 => return Err(DomainError::NoEnvFileFound),
            1 => candidates.remove(0),
            _ => match selector.select(&candidates).await? {
                Some(file) => file,
                None => return Ok(FixOutcome::Cancelled),
            },
        };

        self.apply_to(&request.variable_name, target).await
    }

    /// 向指定文件追加声明，已有 `NAME=` 行时不做任何修改
    pub async fn apply_to(&self, name: &str, file: EnvFile) -> Result<FixOutcome> {
        Self::check_name(name)?;

        let content = self.repository.read_file(file.path()).await?;
        match append_declaration(&content, name) {
            AppendResult::AlreadyPresent => Ok(FixOutcome::AlreadyDeclared {
                name: name.to_string(),
                file,
            }),
            AppendResult::Append(suffix) => {
                self.repository.append_file(file.path(), &suffix).await?;
                info!(variable = name, path = %file.path().display(), "已追加变量声明");
                Ok(FixOutcome::Added {
                    name: name.to_string(),
                    file,
                })
            }
        }
    }

    fn check_name(name: &str) -> Result<()> {
        if VALID_NAME.is_match(name) {
            Ok(())
        } else {
            Err(DomainError::InvalidArgument(format!("无效的变量名: {name:?}")))
        }
    }
}
