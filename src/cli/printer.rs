//! 结果打印器
//!
//! 提供表格和纯文本两种输出格式

use crate::algorithm::ShortestPath;
use crate::graph::{Graph, Weight};
use crate::import::ImportStats;
use prettytable::{format, row, Table};
use std::str::FromStr;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 纯文本模式
    Plain,
}

impl FromStr for PrintMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "t" => Ok(PrintMode::Table),
            "plain" | "p" | "text" => Ok(PrintMode::Plain),
            other => Err(format!("未知的输出格式: {} (可选 table, plain)", other)),
        }
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印整张图
    pub fn format_graph(&self, graph: &Graph) -> String {
        if graph.is_empty() {
            return "Empty graph\n".to_string();
        }

        match self.mode {
            PrintMode::Plain => graph.to_string(),
            PrintMode::Table => {
                let mut table = new_table();
                table.set_titles(row!["Vertex", "Neighbor", "Weight"]);
                for vertex in graph.vertices() {
                    let mut first = true;
                    for (n, w) in vertex.neighbors() {
                        let name = if first { vertex.label() } else { "" };
                        table.add_row(row![name, graph.label(n).unwrap_or("?"), w]);
                        first = false;
                    }
                    if first {
                        table.add_row(row![vertex.label(), "-", "-"]);
                    }
                }
                table.to_string()
            }
        }
    }

    /// 打印最短路径
    pub fn format_path(&self, start: &str, end: &str, path: &ShortestPath) -> String {
        format!(
            "Shortest path from {} to {}:\nDistance: {}\nPath: {}\n",
            start, end, path.weight, path
        )
    }

    /// 打印邻居
    pub fn format_neighbors(&self, label: &str, neighbors: &[(&str, Weight)]) -> String {
        if neighbors.is_empty() {
            return format!("{} has no neighbors\n", label);
        }

        match self.mode {
            PrintMode::Plain => {
                let mut out = format!("Vertex {} is connected to:\n", label);
                for (n, w) in neighbors {
                    out.push_str(&format!("  {} with weight {}\n", n, w));
                }
                out
            }
            PrintMode::Table => {
                let mut table = new_table();
                table.set_titles(row!["Neighbor", "Weight"]);
                for (n, w) in neighbors {
                    table.add_row(row![n, w]);
                }
                table.to_string()
            }
        }
    }

    /// 打印统计信息
    pub fn format_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        match self.mode {
            PrintMode::Plain => format!("vertices: {}\nedges: {}\n", vertex_count, edge_count),
            PrintMode::Table => {
                let mut table = new_table();
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", vertex_count]);
                table.add_row(row!["Edge Count", edge_count]);
                table.to_string()
            }
        }
    }

    /// 打印导入统计
    pub fn format_import(&self, stats: &ImportStats) -> String {
        format!(
            "Imported {} vertices, {} edges ({} rows skipped, {} ms)\n",
            stats.vertices_imported, stats.edges_imported, stats.errors, stats.duration_ms
        )
    }

    /// 打印帮助信息
    pub fn help_text() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   LabelGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

顶点:
  vertex add <标签>        添加顶点            (别名: av)
  vertex rm <标签>         删除顶点及关联边     (别名: rv)

边:
  edge add <a> <b> <权重>  添加无向边          (别名: ae)
  edge rm <a> <b>          删除边              (别名: re)

查询:
  path <起点> <终点>       Dijkstra 最短路径   (别名: sp)
  neighbors <标签>         查看顶点邻居        (别名: n)
  show                     打印整张图
  stats                    显示图统计信息

其他:
  load <文件>              导入 CSV 边列表 (a,b,w 或 label)
  mode <table|plain>       切换输出格式
  clear                    清空图
  help, h, ?               显示帮助
  quit, exit, q            退出程序

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}
