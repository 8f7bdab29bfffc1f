//! LabelGraph CLI 工具
//!
//! 交互式命令行界面，也支持 `-e` 和脚本文件批量执行

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use labelgraph::cli::{Command, CommandCompleter, CommandResult, PrintMode, Session};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "labelgraph-cli")]
#[command(about = "LabelGraph 命令行工具", version)]
struct Args {
    /// 启动时导入的 CSV 边列表（可多次指定）
    #[arg(short, long)]
    load: Vec<PathBuf>,

    /// 执行命令后退出（多条命令以 ; 分隔）
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 执行脚本文件后退出
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// 输出格式: table 或 plain
    #[arg(short, long, default_value = "table")]
    mode: PrintMode,

    /// 日志详细程度（-v, -vv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut session = Session::new(args.mode);

    for path in &args.load {
        let result = session
            .execute(Command::Load(path.clone()))
            .with_context(|| format!("导入失败: {}", path.display()))?;
        print_result(&result);
    }

    if let Some(commands) = &args.execute {
        return run_batch(&mut session, commands.split(';'));
    }

    if let Some(script) = &args.script {
        let content = std::fs::read_to_string(script)
            .with_context(|| format!("无法读取脚本: {}", script.display()))?;
        return run_batch(&mut session, content.lines());
    }

    repl(&mut session)
}

/// 执行单行，输出结果；错误交给调用方
fn run_line(session: &mut Session, line: &str) -> labelgraph::Result<CommandResult> {
    let result = session.run_line(line)?;
    print_result(&result);
    Ok(result)
}

fn print_result(result: &CommandResult) {
    if let CommandResult::Message(msg) = result {
        print!("{}", msg);
    }
}

/// 批量执行；出错的命令打印后继续，最终以非零状态退出
fn run_batch<'a>(session: &mut Session, lines: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut failures = 0usize;
    for line in lines {
        match run_line(session, line) {
            Ok(CommandResult::Exit) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} {}", "错误:".red().bold(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} 条命令执行失败", failures);
    }
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".labelgraph_history"))
}

fn repl(session: &mut Session) -> Result<()> {
    println!("{}", "LabelGraph CLI - 带标签的加权无向图".bold());
    println!("=====================================");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().context("无法初始化行编辑器")?;
    rl.set_helper(Some(CommandCompleter::new()));

    let history = history_path();
    if let Some(path) = &history {
        // 首次运行时历史文件不存在
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("labelgraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match run_line(session, line) {
                    Ok(CommandResult::Exit) => break,
                    Ok(_) => {}
                    Err(e) => println!("{} {}", "错误:".red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            warn!(error = %e, "failed to save history");
        }
    }

    println!("再见！");
    Ok(())
}
