//! 边定义
//!
//! 无向边不单独存储，邻接表即边；这里只提供只读视图

use crate::graph::vertex::VertexId;
use crate::graph::Weight;

/// 无向边视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
    weight: Weight,
}

impl Edge {
    pub(crate) fn new(a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    /// 端点（顺序无意义）
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// 边权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 给定一个端点，返回另一端
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_other_endpoint() {
        let a = VertexId::new(0, 0);
        let b = VertexId::new(1, 0);
        let c = VertexId::new(2, 0);
        let e = Edge::new(a, b, 7);

        assert_eq!(e.other(a), Some(b));
        assert_eq!(e.other(b), Some(a));
        assert_eq!(e.other(c), None);
    }
}
