//! 数据导入模块
//!
//! 从 CSV 边列表批量构建图。每行格式：
//! - `label`：确保顶点存在
//! - `source,target,weight`：确保两端顶点存在并添加边
//!
//! `#` 开头的行视为注释。

use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// CSV 边列表导入器
pub struct EdgeListImporter<'g> {
    graph: &'g mut Graph,
    has_headers: bool,
    strict: bool,
}

impl<'g> EdgeListImporter<'g> {
    /// 创建导入器
    pub fn new(graph: &'g mut Graph) -> Self {
        Self {
            graph,
            has_headers: false,
            strict: false,
        }
    }

    /// 第一行是否为表头
    pub fn with_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// 严格模式：遇到第一条错误行即中止
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// 从文件导入
    pub fn import_path<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "importing edge list");
        self.import_reader(BufReader::new(file))
    }

    /// 从字符串导入
    pub fn import_str(&mut self, text: &str) -> Result<ImportStats> {
        self.import_reader(text.as_bytes())
    }

    /// 从任意读取器导入
    pub fn import_reader<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut rdr = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader);

        let mut stats = ImportStats::default();

        for (i, record) in rdr.records().enumerate() {
            let fallback = i as u64 + 1;
            let (line, result) = match record {
                Ok(record) => {
                    if record.iter().all(str::is_empty) {
                        continue;
                    }
                    let line = record.position().map(|p| p.line()).unwrap_or(fallback);
                    (line, self.apply(&record, &mut stats))
                }
                // 读取失败无法跳过当前行
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(fallback);
                    (line, Err(Error::from(e)))
                }
            };

            match result {
                Ok(()) => {}
                Err(e) if self.strict => {
                    return Err(Error::ImportError(format!("第 {} 行: {}", line, e)));
                }
                Err(e) => {
                    warn!(line, error = %e, "skipping edge list row");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, "edge list imported");
        Ok(stats)
    }

    /// 应用单行；失败时不修改图
    fn apply(&mut self, record: &StringRecord, stats: &mut ImportStats) -> Result<()> {
        match record.len() {
            1 => {
                let label = non_empty(&record[0])?;
                self.ensure_vertex(label, stats)
            }
            3 => {
                let a = non_empty(&record[0])?;
                let b = non_empty(&record[1])?;
                let weight: Weight = record[2]
                    .parse()
                    .map_err(|_| Error::ParseError(format!("无效的权重: {}", &record[2])))?;

                if a == b {
                    return Err(Error::SelfLoop(a.to_string()));
                }
                if self.graph.has_edge(a, b) {
                    return Err(Error::DuplicateEdge(a.to_string(), b.to_string()));
                }

                self.ensure_vertex(a, stats)?;
                self.ensure_vertex(b, stats)?;
                self.graph.add_edge(a, b, weight)?;
                stats.edges_imported += 1;
                Ok(())
            }
            n => Err(Error::ImportError(format!("字段数应为 1 或 3，实际为 {}", n))),
        }
    }

    fn ensure_vertex(&mut self, label: &str, stats: &mut ImportStats) -> Result<()> {
        if !self.graph.contains_vertex(label) {
            self.graph.add_vertex(label)?;
            stats.vertices_imported += 1;
        }
        Ok(())
    }
}

fn non_empty(field: &str) -> Result<&str> {
    if field.is_empty() {
        Err(Error::ImportError("顶点标签为空".to_string()))
    } else {
        Ok(field)
    }
}

/// 从 CSV 边列表文件导入（宽松模式，无表头）
pub fn import_edge_list<P: AsRef<Path>>(graph: &mut Graph, path: P) -> Result<ImportStats> {
    EdgeListImporter::new(graph).import_path(path)
}
