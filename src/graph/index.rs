//! 顶点标签索引
//!
//! 标签到顶点句柄的映射，保持插入顺序

use crate::graph::vertex::VertexId;
use indexmap::IndexMap;

/// 顶点标签注册表
#[derive(Debug, Default, Clone)]
pub struct VertexIndex {
    label_to_id: IndexMap<String, VertexId>,
}

impl VertexIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 通过标签查找顶点
    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.label_to_id.get(label).copied()
    }

    /// 标签是否已注册
    pub fn contains(&self, label: &str) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// 注册标签，已存在时返回 false 且不修改
    pub fn insert(&mut self, label: String, id: VertexId) -> bool {
        match self.label_to_id.entry(label) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    /// 移除标签
    pub fn remove(&mut self, label: &str) -> Option<VertexId> {
        self.label_to_id.shift_remove(label)
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, VertexId)> + '_ {
        self.label_to_id.iter().map(|(l, &id)| (l.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.label_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_to_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.label_to_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_rejects_duplicate_label() {
        let mut index = VertexIndex::new();
        let a = VertexId::new(0, 0);
        let b = VertexId::new(1, 0);

        assert!(index.insert("x".to_string(), a));
        assert!(!index.insert("x".to_string(), b));
        assert_eq!(index.get("x"), Some(a));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_keeps_insertion_order_after_remove() {
        let mut index = VertexIndex::new();
        for (i, l) in ["a", "b", "c"].iter().enumerate() {
            index.insert(l.to_string(), VertexId::new(i as u32, 0));
        }
        index.remove("b");

        let labels: Vec<&str> = index.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["a", "c"]);
        assert!(!index.contains("b"));
    }
}
