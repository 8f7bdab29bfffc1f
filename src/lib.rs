//! LabelGraph - 带标签的加权无向图
//!
//! 小型内存图库：
//! - 按标签增删顶点和边，邻接表始终保持对称
//! - Dijkstra 单源单汇最短路径
//! - CSV 边列表导入

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{Dijkstra, ShortestPath};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexId, Weight, WeightedGraph};
pub use import::{EdgeListImporter, ImportStats};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
