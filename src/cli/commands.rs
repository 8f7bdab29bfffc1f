//! 控制台命令处理
//!
//! 解析一行输入为 `Command`，再由 `Session` 在图上执行

use crate::cli::printer::{PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};
use crate::import::EdgeListImporter;
use std::path::PathBuf;

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddVertex(String),
    RemoveVertex(String),
    AddEdge(String, String, Weight),
    RemoveEdge(String, String),
    Path(String, String),
    Neighbors(String),
    Show,
    Stats,
    Load(PathBuf),
    Mode(PrintMode),
    Clear,
    Help,
    Quit,
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
}

fn usage(text: &str) -> Error {
    Error::ParseError(format!("用法: {}", text))
}

fn parse_weight(s: &str) -> Result<Weight> {
    s.parse()
        .map_err(|_| Error::ParseError(format!("无效的权重: {} (需为非负整数)", s)))
}

impl Command {
    /// 解析一行输入；空行和 `#` 注释返回 None
    pub fn parse(input: &str) -> Result<Option<Command>> {
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            return Ok(None);
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        let command = match cmd.as_str() {
            "vertex" | "v" => match args {
                ["add", label] => Command::AddVertex(label.to_string()),
                ["rm" | "remove" | "del", label] => Command::RemoveVertex(label.to_string()),
                _ => return Err(usage("vertex add|rm <标签>")),
            },
            "av" => match args {
                [label] => Command::AddVertex(label.to_string()),
                _ => return Err(usage("av <标签>")),
            },
            "rv" => match args {
                [label] => Command::RemoveVertex(label.to_string()),
                _ => return Err(usage("rv <标签>")),
            },

            "edge" | "e" => match args {
                ["add", a, b, w] => Command::AddEdge(a.to_string(), b.to_string(), parse_weight(w)?),
                ["rm" | "remove" | "del", a, b] => Command::RemoveEdge(a.to_string(), b.to_string()),
                _ => return Err(usage("edge add <a> <b> <权重> | edge rm <a> <b>")),
            },
            "ae" => match args {
                [a, b, w] => Command::AddEdge(a.to_string(), b.to_string(), parse_weight(w)?),
                _ => return Err(usage("ae <a> <b> <权重>")),
            },
            "re" => match args {
                [a, b] => Command::RemoveEdge(a.to_string(), b.to_string()),
                _ => return Err(usage("re <a> <b>")),
            },

            "path" | "sp" | "shortest" => match args {
                [a, b] => Command::Path(a.to_string(), b.to_string()),
                _ => return Err(usage("path <起点> <终点>")),
            },
            "neighbors" | "n" => match args {
                [label] => Command::Neighbors(label.to_string()),
                _ => return Err(usage("neighbors <标签>")),
            },

            "show" | "dump" | "print" => Command::Show,
            "stats" | "info" => Command::Stats,
            "load" | "import" => match args {
                [path] => Command::Load(PathBuf::from(path)),
                _ => return Err(usage("load <文件>")),
            },
            "mode" => match args {
                [mode] => Command::Mode(mode.parse().map_err(Error::ParseError)?),
                _ => return Err(usage("mode <table|plain>")),
            },
            "clear" => Command::Clear,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,

            _ => {
                return Err(Error::ParseError(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    cmd
                )))
            }
        };

        Ok(Some(command))
    }
}

/// 控制台会话：持有图和打印器
pub struct Session {
    graph: Graph,
    printer: Printer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Session {
    pub fn new(mode: PrintMode) -> Self {
        Self {
            graph: Graph::new(),
            printer: Printer::new(mode),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 解析并执行一行输入
    pub fn run_line(&mut self, line: &str) -> Result<CommandResult> {
        match Command::parse(line)? {
            Some(cmd) => self.execute(cmd),
            None => Ok(CommandResult::Continue),
        }
    }

    /// 执行命令
    pub fn execute(&mut self, cmd: Command) -> Result<CommandResult> {
        let result = match cmd {
            Command::AddVertex(label) => {
                self.graph.add_vertex(&label)?;
                CommandResult::Message(format!("Added vertex {}\n", label))
            }
            Command::RemoveVertex(label) => {
                self.graph.remove_vertex(&label)?;
                CommandResult::Message(format!("Removed vertex {}\n", label))
            }
            Command::AddEdge(a, b, w) => {
                self.graph.add_edge(&a, &b, w)?;
                CommandResult::Message(format!("Added edge {} - {} ({})\n", a, b, w))
            }
            Command::RemoveEdge(a, b) => {
                self.graph.remove_edge(&a, &b)?;
                CommandResult::Message(format!("Removed edge {} - {}\n", a, b))
            }
            Command::Path(a, b) => {
                let path = self.graph.shortest_path(&a, &b)?;
                CommandResult::Message(self.printer.format_path(&a, &b, &path))
            }
            Command::Neighbors(label) => {
                let neighbors = self.graph.neighbors(&label)?;
                CommandResult::Message(self.printer.format_neighbors(&label, &neighbors))
            }
            Command::Show => CommandResult::Message(self.printer.format_graph(&self.graph)),
            Command::Stats => CommandResult::Message(
                self.printer
                    .format_stats(self.graph.vertex_count(), self.graph.edge_count()),
            ),
            Command::Load(path) => {
                let stats = EdgeListImporter::new(&mut self.graph).import_path(&path)?;
                CommandResult::Message(self.printer.format_import(&stats))
            }
            Command::Mode(mode) => {
                self.printer.set_mode(mode);
                CommandResult::Message(format!("Output mode: {:?}\n", mode))
            }
            Command::Clear => {
                self.graph.clear();
                CommandResult::Message("Graph cleared\n".to_string())
            }
            Command::Help => CommandResult::Message(Printer::help_text()),
            Command::Quit => CommandResult::Exit,
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<CommandResult>) -> String {
        match result.unwrap() {
            CommandResult::Message(m) => m,
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("vertex add x").unwrap(),
            Some(Command::AddVertex("x".into()))
        );
        assert_eq!(
            Command::parse("  ae a b 7 ").unwrap(),
            Some(Command::AddEdge("a".into(), "b".into(), 7))
        );
        assert_eq!(
            Command::parse("edge rm a b").unwrap(),
            Some(Command::RemoveEdge("a".into(), "b".into()))
        );
        assert_eq!(
            Command::parse("SP 1 5").unwrap(),
            Some(Command::Path("1".into(), "5".into()))
        );
        assert_eq!(
            Command::parse("mode plain").unwrap(),
            Some(Command::Mode(PrintMode::Plain))
        );
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("# comment").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("ae a b -1"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("path a"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("frobnicate"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("mode json"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_session_builds_and_queries() {
        let mut session = Session::new(PrintMode::Plain);
        for line in ["av 1", "av 2", "av 3", "ae 1 2 4", "ae 2 3 4", "ae 1 3 10"] {
            session.run_line(line).unwrap();
        }

        let out = message(session.run_line("path 1 3"));
        assert!(out.contains("Distance: 8"));
        assert!(out.contains("Path: 1 -> 2 -> 3"));

        let out = message(session.run_line("stats"));
        assert_eq!(out, "vertices: 3\nedges: 3\n");

        assert_eq!(session.run_line("quit").unwrap(), CommandResult::Exit);
        assert_eq!(session.run_line("   ").unwrap(), CommandResult::Continue);
    }

    #[test]
    fn test_session_surfaces_graph_errors() {
        let mut session = Session::default();
        session.run_line("av a").unwrap();

        assert!(matches!(session.run_line("av a"), Err(Error::DuplicateVertex(_))));
        assert!(matches!(session.run_line("ae a a 1"), Err(Error::SelfLoop(_))));
        assert!(matches!(session.run_line("path a b"), Err(Error::VertexNotFound(_))));
        // 错误后会话仍可用
        session.run_line("av b").unwrap();
        assert!(matches!(
            session.run_line("path a b"),
            Err(Error::NoPathExists { .. })
        ));
        assert_eq!(session.graph().vertex_count(), 2);
    }

    #[test]
    fn test_session_load_sample_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data/cities.csv");
        let mut session = Session::new(PrintMode::Plain);

        let out = message(session.execute(Command::Load(path)));
        assert!(out.starts_with("Imported 7 vertices, 9 edges (0 rows skipped"));

        let out = message(session.run_line("path LIB CAS"));
        assert!(out.contains("Distance: 1532"));
        assert!(out.contains("Path: LIB -> ENB -> CAS"));
    }

    #[test]
    fn test_session_clear() {
        let mut session = Session::default();
        session.run_line("av a").unwrap();
        session.run_line("clear").unwrap();
        assert!(session.graph().is_empty());
        assert_eq!(message(session.run_line("show")), "Empty graph\n");
    }
}
