//! 命令行交互组件
//!
//! 命令解析、结果打印和 Tab 补全，仅由 `labelgraph-cli` 使用

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{Command, CommandResult, Session};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
