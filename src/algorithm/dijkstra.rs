//! Dijkstra 最短路径
//!
//! 二叉堆 + 惰性删除；只读访问图，从不修改

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, Weight};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use tracing::{debug, trace};

/// 未到达顶点的距离
const INFINITY: Weight = Weight::MAX;

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// 路径总权重
    pub weight: Weight,
    /// 从起点到终点的顶点标签
    pub path: Vec<String>,
}

impl ShortestPath {
    /// 路径上的边数
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" -> "))
    }
}

/// 最短路径引擎
pub struct Dijkstra<'g> {
    graph: &'g Graph,
}

impl<'g> Dijkstra<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 按标签计算最短路径
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        let s = self
            .graph
            .vertex_id(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;
        let e = self
            .graph
            .vertex_id(end)
            .ok_or_else(|| Error::VertexNotFound(end.to_string()))?;

        let (weight, ids) = self.run(s, e)?;
        let path = ids
            .into_iter()
            .filter_map(|id| self.graph.label(id).map(str::to_string))
            .collect();

        let result = ShortestPath { weight, path };
        debug!(start, end, weight, hops = result.hops(), "shortest path found");
        Ok(result)
    }

    /// 按句柄计算最短路径，返回总权重和顶点序列
    pub fn run(&self, start: VertexId, end: VertexId) -> Result<(Weight, Vec<VertexId>)> {
        if self.graph.vertex(start).is_none() {
            return Err(Error::VertexNotFound(start.to_string()));
        }
        if self.graph.vertex(end).is_none() {
            return Err(Error::VertexNotFound(end.to_string()));
        }

        if start == end {
            return Ok((0, vec![start]));
        }

        let n = self.graph.slot_count();
        let mut dist = vec![INFINITY; n];
        let mut prev: Vec<Option<VertexId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap: BinaryHeap<Reverse<(Weight, VertexId)>> = BinaryHeap::new();

        dist[start.index()] = 0;
        heap.push(Reverse((0, start)));

        while let Some(Reverse((d, current))) = heap.pop() {
            // 同一顶点可能多次入堆，只处理第一次出堆
            if settled[current.index()] {
                continue;
            }
            // 出堆顺序按距离单调不减，终点第一次出堆时距离已确定
            if current == end {
                break;
            }
            settled[current.index()] = true;

            let Some(vertex) = self.graph.vertex(current) else {
                continue;
            };
            for (neighbor, weight) in vertex.neighbors() {
                let idx = neighbor.index();
                if settled[idx] {
                    continue;
                }
                let candidate = d.saturating_add(weight);
                if candidate < dist[idx] {
                    trace!(from = %current, to = %neighbor, candidate, "relax");
                    dist[idx] = candidate;
                    prev[idx] = Some(current);
                    heap.push(Reverse((candidate, neighbor)));
                }
            }
        }

        let total = dist[end.index()];
        if total == INFINITY {
            return Err(Error::NoPathExists {
                from: self.label_or_id(start),
                to: self.label_or_id(end),
            });
        }

        let mut path = vec![end];
        let mut current = end;
        while let Some(p) = prev[current.index()] {
            path.push(p);
            current = p;
        }
        path.reverse();

        Ok((total, path))
    }

    fn label_or_id(&self, id: VertexId) -> String {
        self.graph
            .label(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 经典示例图
    fn create_test_graph() -> Graph {
        let mut graph = Graph::new();
        for l in ["1", "2", "3", "4", "5", "6"] {
            graph.add_vertex(l).unwrap();
        }
        let edges = [
            ("1", "2", 7),
            ("1", "3", 9),
            ("1", "6", 14),
            ("2", "3", 10),
            ("2", "4", 15),
            ("3", "4", 11),
            ("3", "6", 2),
            ("4", "5", 6),
            ("5", "6", 9),
        ];
        for (a, b, w) in edges {
            graph.add_edge(a, b, w).unwrap();
        }
        graph
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_test_graph();
        let result = Dijkstra::new(&graph).shortest_path("1", "5").unwrap();

        assert_eq!(result.weight, 20);
        assert_eq!(result.path, vec!["1", "3", "6", "5"]);
        assert_eq!(result.hops(), 3);
        assert_eq!(result.to_string(), "1 -> 3 -> 6 -> 5");
    }

    #[test]
    fn test_shortest_path_reverse_direction() {
        let graph = create_test_graph();
        let result = graph.shortest_path("5", "1").unwrap();

        assert_eq!(result.weight, 20);
        assert_eq!(result.path, vec!["5", "6", "3", "1"]);
    }

    #[test]
    fn test_same_vertex() {
        let graph = create_test_graph();
        let result = graph.shortest_path("4", "4").unwrap();

        assert_eq!(result.weight, 0);
        assert_eq!(result.path, vec!["4"]);
        assert_eq!(result.hops(), 0);
    }

    #[test]
    fn test_missing_vertex() {
        let graph = create_test_graph();
        assert!(matches!(
            graph.shortest_path("1", "7"),
            Err(Error::VertexNotFound(ref l)) if l == "7"
        ));
        assert!(matches!(
            graph.shortest_path("0", "1"),
            Err(Error::VertexNotFound(ref l)) if l == "0"
        ));
    }

    #[test]
    fn test_no_path() {
        let mut graph = Graph::new();
        graph.add_vertex("a").unwrap();
        graph.add_vertex("b").unwrap();

        assert!(matches!(
            graph.shortest_path("a", "b"),
            Err(Error::NoPathExists { ref from, ref to }) if from == "a" && to == "b"
        ));
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = Graph::new();
        for l in ["a", "b", "c"] {
            graph.add_vertex(l).unwrap();
        }
        graph.add_edge("a", "b", 0).unwrap();
        graph.add_edge("b", "c", 0).unwrap();
        graph.add_edge("a", "c", 1).unwrap();

        let result = graph.shortest_path("a", "c").unwrap();
        assert_eq!(result.weight, 0);
        assert_eq!(result.path, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_path_after_edge_removal() {
        let mut graph = create_test_graph();
        graph.remove_edge("3", "6").unwrap();

        let result = graph.shortest_path("1", "5").unwrap();
        // 1 -> 6 -> 5 (23) 与 1 -> 3 -> 4 -> 5 (26) 中取较小者
        assert_eq!(result.weight, 23);
        assert_eq!(result.path, vec!["1", "6", "5"]);
    }

    #[test]
    fn test_path_after_vertex_removal() {
        let mut graph = create_test_graph();
        graph.remove_vertex("6").unwrap();

        let result = graph.shortest_path("1", "5").unwrap();
        assert_eq!(result.weight, 26);
        assert_eq!(result.path, vec!["1", "3", "4", "5"]);
    }

    #[test]
    fn test_run_rejects_stale_handle() {
        let mut graph = create_test_graph();
        let stale = graph.vertex_id("2").unwrap();
        let one = graph.vertex_id("1").unwrap();
        graph.remove_vertex("2").unwrap();

        assert!(matches!(
            Dijkstra::new(&graph).run(one, stale),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let mut graph = Graph::new();
        for l in ["a", "b", "c", "d"] {
            graph.add_vertex(l).unwrap();
        }
        graph.add_edge("a", "b", Weight::MAX - 1).unwrap();
        graph.add_edge("b", "c", Weight::MAX - 1).unwrap();
        graph.add_edge("a", "d", 1).unwrap();

        assert_eq!(graph.shortest_path("a", "b").unwrap().weight, Weight::MAX - 1);
        // a -> b -> c 不可表示，视为不可达
        assert!(matches!(
            graph.shortest_path("a", "c"),
            Err(Error::NoPathExists { .. })
        ));
    }
}
