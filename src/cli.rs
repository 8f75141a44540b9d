//! CLI 参数定义

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// envlint - 检查源码引用的环境变量是否在 .env 文件中声明
#[derive(Parser, Debug)]
#[command(
    name = "envlint",
    version,
    about = "检查源码引用的环境变量是否在 .env 文件中声明",
    long_about = "扫描 TypeScript/JavaScript 的 process.env.NAME 和 Go 的 os.Getenv(\"NAME\")，\n\
        找出没有在任何 .env* 文件中声明的变量，并可一键追加到 .env 文件。\n\n\
        示例:\n  \
        envlint check\n  \
        envlint check src/server.ts --format json\n  \
        envlint fix DB_HOST --env-file .env.local\n  \
        envlint files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式（可重复，-vv 输出 trace 日志）
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// 工作区根目录（默认当前目录）
    #[arg(short, long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 校验源码中的环境变量引用
    Check {
        /// 只校验指定文件（默认扫描整个工作区）
        files: Vec<PathBuf>,
        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// 发现未声明变量时以非零状态退出
        #[arg(long)]
        strict: bool,
    },

    /// 把变量追加到 .env 文件
    Fix {
        /// 变量名称
        name: String,
        /// 引用该变量的文档
        #[arg(short, long, value_name = "PATH")]
        document: Option<PathBuf>,
        /// 目标 .env 文件（多个候选时不再询问）
        #[arg(short, long, value_name = "PATH")]
        env_file: Option<PathBuf>,
    },

    /// 列出 .env 文件及声明的变量
    Files {
        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// 监听文件变更并持续校验
    #[cfg(feature = "watch")]
    Watch {
        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
