//! 顶点定义
//!
//! 顶点由 arena 持有，外部只通过代际句柄 `VertexId` 引用

use crate::graph::Weight;
use indexmap::IndexMap;
use std::fmt;

/// 顶点句柄（arena 槽位 + 代数）
///
/// 槽位在顶点删除后会被复用，代数随之递增，旧句柄因此不会指向新顶点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    index: u32,
    generation: u32,
}

impl VertexId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// arena 槽位
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// 槽位代数
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}#{}", self.index, self.generation)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点句柄
    id: VertexId,
    /// 顶点标签（创建后不可变）
    label: String,
    /// 邻接表：邻居句柄 -> 权重
    neighbors: IndexMap<VertexId, Weight>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: String) -> Self {
        Self {
            id,
            label,
            neighbors: IndexMap::new(),
        }
    }

    /// 获取顶点句柄
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 获取到某个邻居的边权重
    pub fn weight_to(&self, neighbor: VertexId) -> Option<Weight> {
        self.neighbors.get(&neighbor).copied()
    }

    /// 遍历邻居及权重（按插入顺序）
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbors.iter().map(|(&id, &w)| (id, w))
    }

    /// 顶点的度
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn link(&mut self, neighbor: VertexId, weight: Weight) {
        self.neighbors.insert(neighbor, weight);
    }

    pub(crate) fn unlink(&mut self, neighbor: VertexId) -> Option<Weight> {
        self.neighbors.shift_remove(&neighbor)
    }
}
