//! 图能力接口
//!
//! 任何带标签的加权图实现（例如将来的有向图）都可以实现这组操作

use crate::algorithm::ShortestPath;
use crate::error::Result;
use crate::graph::Weight;

/// 带标签、带权图的五个基本操作
///
/// 每个操作要么完全成功，要么返回错误且不修改图。
pub trait WeightedGraph {
    /// 添加顶点，标签已存在时返回 `DuplicateVertex`
    fn add_vertex(&mut self, label: &str) -> Result<()>;

    /// 删除顶点及其所有关联边
    fn remove_vertex(&mut self, label: &str) -> Result<()>;

    /// 添加边
    fn add_edge(&mut self, label1: &str, label2: &str, weight: Weight) -> Result<()>;

    /// 删除边
    fn remove_edge(&mut self, label1: &str, label2: &str) -> Result<()>;

    /// 最短路径（总权重 + 标签序列）
    fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath>;
}
