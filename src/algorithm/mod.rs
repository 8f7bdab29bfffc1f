//! 图算法模块
//!
//! 单源单汇最短路径（Dijkstra）

mod dijkstra;

pub use dijkstra::{Dijkstra, ShortestPath};
