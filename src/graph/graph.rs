//! 图数据结构
//!
//! 顶点存放在 arena 中，标签索引负责 label -> 句柄，邻接表保持对称

use super::edge::Edge;
use super::index::VertexIndex;
use super::traits::WeightedGraph;
use super::vertex::{Vertex, VertexId};
use super::Weight;
use crate::algorithm::{Dijkstra, ShortestPath};
use crate::error::{Error, Result};
use std::fmt;
use tracing::debug;

/// arena 槽位
#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    vertex: Option<Vertex>,
}

/// 带标签的加权无向图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点 arena
    slots: Vec<Slot>,
    /// 空闲槽位
    free: Vec<u32>,
    /// 标签索引
    index: VertexIndex,
    /// 无向边数量
    edge_count: usize,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 查找 ====================

    /// 解析标签，不存在时返回 `VertexNotFound`
    fn resolve(&self, label: &str) -> Result<VertexId> {
        self.index
            .get(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    /// 通过句柄获取顶点，句柄失效时返回 None
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.vertex.as_ref())
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.vertex.as_mut())
    }

    /// 通过标签获取顶点句柄
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label)
    }

    /// 通过句柄获取标签
    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::label)
    }

    /// 标签是否存在
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains(label)
    }

    /// arena 槽位数（含空闲槽位），算法按此分配稠密数组
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, label: &str) -> Result<VertexId> {
        if self.index.contains(label) {
            return Err(Error::DuplicateVertex(label.to_string()));
        }

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let id = VertexId::new(index, slot.generation);
                slot.vertex = Some(Vertex::new(id, label.to_string()));
                id
            }
            None => {
                let id = VertexId::new(self.slots.len() as u32, 0);
                self.slots.push(Slot {
                    generation: 0,
                    vertex: Some(Vertex::new(id, label.to_string())),
                });
                id
            }
        };

        self.index.insert(label.to_string(), id);
        debug!(label, %id, "vertex added");
        Ok(id)
    }

    /// 删除顶点，先移除所有关联边
    pub fn remove_vertex(&mut self, label: &str) -> Result<()> {
        let id = self.resolve(label)?;

        // 邻接表对称，顶点自身的邻居就是所有引用它的顶点
        let neighbors: Vec<VertexId> = match self.vertex(id) {
            Some(v) => v.neighbors().map(|(n, _)| n).collect(),
            None => return Err(Error::VertexNotFound(label.to_string())),
        };
        for &n in &neighbors {
            if let Some(v) = self.vertex_mut(n) {
                v.unlink(id);
            }
        }
        self.edge_count -= neighbors.len();

        let slot = &mut self.slots[id.index()];
        slot.vertex = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index() as u32);
        self.index.remove(label);

        debug!(label, removed_edges = neighbors.len(), "vertex removed");
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    pub fn add_edge(&mut self, label1: &str, label2: &str, weight: Weight) -> Result<()> {
        let a = self.resolve(label1)?;
        let b = self.resolve(label2)?;

        if a == b {
            return Err(Error::SelfLoop(label1.to_string()));
        }
        if self.vertex(a).and_then(|v| v.weight_to(b)).is_some() {
            return Err(Error::DuplicateEdge(label1.to_string(), label2.to_string()));
        }

        if let Some(v) = self.vertex_mut(a) {
            v.link(b, weight);
        }
        if let Some(v) = self.vertex_mut(b) {
            v.link(a, weight);
        }
        self.edge_count += 1;

        debug!(label1, label2, weight, "edge added");
        Ok(())
    }

    /// 删除无向边
    pub fn remove_edge(&mut self, label1: &str, label2: &str) -> Result<()> {
        let a = self.resolve(label1)?;
        let b = self.resolve(label2)?;

        if self.vertex(a).and_then(|v| v.weight_to(b)).is_none() {
            return Err(Error::EdgeNotFound(label1.to_string(), label2.to_string()));
        }

        if let Some(v) = self.vertex_mut(a) {
            v.unlink(b);
        }
        if let Some(v) = self.vertex_mut(b) {
            v.unlink(a);
        }
        self.edge_count -= 1;

        debug!(label1, label2, "edge removed");
        Ok(())
    }

    /// 获取边权重
    pub fn edge_weight(&self, label1: &str, label2: &str) -> Result<Weight> {
        let a = self.resolve(label1)?;
        let b = self.resolve(label2)?;
        self.vertex(a)
            .and_then(|v| v.weight_to(b))
            .ok_or_else(|| Error::EdgeNotFound(label1.to_string(), label2.to_string()))
    }

    /// 两点之间是否有边
    pub fn has_edge(&self, label1: &str, label2: &str) -> bool {
        self.edge_weight(label1, label2).is_ok()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居标签及权重
    pub fn neighbors(&self, label: &str) -> Result<Vec<(&str, Weight)>> {
        let id = self.resolve(label)?;
        let vertex = self
            .vertex(id)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        Ok(vertex
            .neighbors()
            .filter_map(|(n, w)| self.label(n).map(|l| (l, w)))
            .collect())
    }

    /// 获取顶点的度
    pub fn degree(&self, label: &str) -> Result<usize> {
        let id = self.resolve(label)?;
        self.vertex(id)
            .map(Vertex::degree)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    // ==================== 最短路径 ====================

    /// Dijkstra 最短路径
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        Dijkstra::new(self).shortest_path(start, end)
    }

    // ==================== 统计与遍历 ====================

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// 所有标签（插入顺序）
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.iter().map(|(l, _)| l)
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.index.iter().filter_map(|(_, id)| self.vertex(id))
    }

    /// 所有边，每个无序顶点对只出现一次
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(|v| {
            let id = v.id();
            v.neighbors()
                .filter(move |(n, _)| id.index() < n.index())
                .map(move |(n, w)| Edge::new(id, n, w))
        })
    }

    /// 清空图，所有旧句柄失效
    pub fn clear(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.vertex.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(i as u32);
            }
        }
        self.index.clear();
        self.edge_count = 0;
        debug!("graph cleared");
    }
}

impl WeightedGraph for Graph {
    fn add_vertex(&mut self, label: &str) -> Result<()> {
        Graph::add_vertex(self, label).map(|_| ())
    }

    fn remove_vertex(&mut self, label: &str) -> Result<()> {
        Graph::remove_vertex(self, label)
    }

    fn add_edge(&mut self, label1: &str, label2: &str, weight: Weight) -> Result<()> {
        Graph::add_edge(self, label1, label2, weight)
    }

    fn remove_edge(&mut self, label1: &str, label2: &str) -> Result<()> {
        Graph::remove_edge(self, label1, label2)
    }

    fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        Graph::shortest_path(self, start, end)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            writeln!(f, "Vertex {} is connected to:", vertex.label())?;
            for (n, w) in vertex.neighbors() {
                if let Some(label) = self.label(n) {
                    writeln!(f, "  {} with weight {}", label, w)?;
                }
            }
        }
        Ok(())
    }
}
