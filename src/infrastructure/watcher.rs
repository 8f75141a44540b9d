//! 工作区文件监听
//!
//! notify 的回调线程只负责把事件送进通道，
//! 重新校验在调用方的单线程事件循环里串行执行，两次校验不会重叠。

use crate::domain::error::{DomainError, Result};
use crate::infrastructure::workspace::ScanFilter;
use notify::event::EventKind;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, warn};

/// 工作区监听器
pub struct WorkspaceWatcher {
    // 持有监听器，drop 时停止监听
    _watcher: RecommendedWatcher,
    events: UnboundedReceiver<notify::Result<Event>>,
    filter: ScanFilter,
    debounce: Duration,
}

impl WorkspaceWatcher {
    /// 递归监听工作区根目录
    pub fn start(filter: ScanFilter, debounce_ms: u64) -> Result<Self> {
        let (tx, events) = mpsc::unbounded_channel();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            // 接收端已关闭说明监听结束
            let _ = tx.send(res);
        })
        .map_err(|e| DomainError::Watch(format!("创建文件监听器失败: {}", e)))?;

        watcher
            .watch(filter.root(), RecursiveMode::Recursive)
            .map_err(|e| {
                DomainError::Watch(format!("监听 {} 失败: {}", filter.root().display(), e))
            })?;

        Ok(Self {
            _watcher: watcher,
            events,
            filter,
            debounce: Duration::from_millis(debounce_ms),
        })
    }

    /// 等待下一批相关变更
    ///
    /// 收到第一个相关事件后继续收集，直到安静 `debounce` 时长。
    /// 通道关闭时返回 None。
    pub async fn next_change(&mut self) -> Option<Vec<PathBuf>> {
        loop {
            let first = self.events.recv().await?;
            let mut changed = self.relevant_paths(first);
            if changed.is_empty() {
                continue;
            }

            while let Ok(Some(event)) = tokio::time::timeout(self.debounce, self.events.recv()).await
            {
                changed.extend(self.relevant_paths(event));
            }

            changed.sort();
            changed.dedup();
            return Some(changed);
        }
    }

    fn relevant_paths(&self, event: notify::Result<Event>) -> Vec<PathBuf> {
        match event {
            Ok(event) => {
                if !matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    return Vec::new();
                }
                event
                    .paths
                    .into_iter()
                    .filter(|p| self.filter.is_relevant(p))
                    .inspect(|p| debug!(path = %p.display(), "检测到文件变更"))
                    .collect()
            }
            Err(e) => {
                warn!(error = %e, "文件监听出错");
                Vec::new()
            }
        }
    }
}
