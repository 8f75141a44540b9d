//! envlint 主程序入口
//!
//! 设计原则：
//! - 入口代码简洁，逻辑委托给 app 模块
//! - 单线程运行时：所有操作只在 I/O 处让出
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use envlint::app::{AppConfig, Application};
use envlint::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose > 0;

    let runtime = match startup(cli.verbose) {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("初始化失败: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async move {
        let app = Application::new(AppConfig {
            verbose,
            root: cli.root,
            config_file: cli.config,
        })?;
        app.run(cli.command).await
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report(verbose);
            ExitCode::FAILURE
        }
    }
}

/// 初始化日志和单线程运行时
fn startup(verbosity: u8) -> anyhow::Result<tokio::runtime::Runtime> {
    envlint::logging::init(verbosity).context("日志初始化失败")?;
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("创建运行时失败")
}
