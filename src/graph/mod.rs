//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod index;
mod traits;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use index::VertexIndex;
pub use traits::WeightedGraph;
pub use vertex::{Vertex, VertexId};

/// 边权重（非负整数，0 表示零代价连接）
pub type Weight = u64;
