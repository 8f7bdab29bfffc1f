//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 顶层命令列表
const COMMANDS: &[&str] = &[
    "vertex", "edge", "path", "neighbors", "show", "stats", "load", "mode", "clear", "help",
    "quit", "av", "rv", "ae", "re", "sp",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "vertex" | "v" | "edge" | "e" => Some(&["add", "rm"]),
        "mode" => Some(&["table", "plain"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'a str>) -> Vec<Pair> {
    candidates
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// LabelGraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 计算补全候选，返回替换起点和候选列表
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        match (words.as_slice(), at_word_end) {
            ([], _) => (pos, pairs(COMMANDS.iter())),
            ([word], true) => {
                let start = pos - word.len();
                let current = word.to_lowercase();
                (start, pairs(COMMANDS.iter().filter(|c| c.starts_with(&current))))
            }
            ([command], false) => match get_sub_commands(&command.to_lowercase()) {
                Some(subs) => (pos, pairs(subs.iter())),
                None => (pos, Vec::new()),
            },
            ([command, word], true) => match get_sub_commands(&command.to_lowercase()) {
                Some(subs) => {
                    // 替换起点按原词字节长度计算，小写化可能改变长度
                    let start = pos - word.len();
                    let current = word.to_lowercase();
                    (start, pairs(subs.iter().filter(|c| c.starts_with(&current))))
                }
                None => (pos, Vec::new()),
            },
            _ => (pos, Vec::new()),
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
