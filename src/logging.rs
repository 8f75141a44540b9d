//! 日志初始化
//!
//! 日志统一写到 stderr，stdout 只留给诊断输出。`RUST_LOG` 优先于 -v。

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// 按 -v 次数选择默认级别
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// 安装全局订阅器
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for(verbosity)).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1),
        )
        .try_init()?;
    Ok(())
}
