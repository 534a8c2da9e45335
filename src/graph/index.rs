//! 邻接索引
//!
//! 顶点到其关联边集合的映射。自环在集合中只登记一次。

use crate::graph::edge::EdgeId;
use crate::graph::vertex::VertexId;
use indexmap::IndexSet;
use std::collections::HashMap;

/// 邻接索引
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyIndex {
    /// 顶点 ID 到关联边的映射（保持插入顺序）
    incident: HashMap<VertexId, IndexSet<EdgeId>>,
}

impl AdjacencyIndex {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self {
            incident: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(vertices: usize) -> Self {
        Self {
            incident: HashMap::with_capacity(vertices),
        }
    }

    /// 登记一个没有关联边的顶点
    pub(crate) fn register(&mut self, vertex: VertexId) {
        self.incident.entry(vertex).or_default();
    }

    /// 注销顶点，返回它原有的关联边
    pub(crate) fn unregister(&mut self, vertex: VertexId) -> Option<IndexSet<EdgeId>> {
        self.incident.remove(&vertex)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, vertex: VertexId) -> bool {
        self.incident.contains_key(&vertex)
    }

    /// 把边挂到两个端点上
    pub(crate) fn attach(&mut self, edge: EdgeId, src: VertexId, dst: VertexId) {
        if let Some(edges) = self.incident.get_mut(&src) {
            edges.insert(edge);
        }
        if dst != src {
            if let Some(edges) = self.incident.get_mut(&dst) {
                edges.insert(edge);
            }
        }
    }

    /// 从两个端点上摘下边
    pub(crate) fn detach(&mut self, edge: EdgeId, src: VertexId, dst: VertexId) {
        for end in [src, dst] {
            if let Some(edges) = self.incident.get_mut(&end) {
                edges.shift_remove(&edge);
            }
        }
    }

    /// 获取顶点的关联边
    pub(crate) fn incident(&self, vertex: VertexId) -> Option<&IndexSet<EdgeId>> {
        self.incident.get(&vertex)
    }

    /// 按给定的全局位置重排每个顶点的关联边
    pub(crate) fn reorder<F>(&mut self, position: F)
    where
        F: Fn(&EdgeId) -> Option<usize>,
    {
        for edges in self.incident.values_mut() {
            edges.sort_by(|a, b| position(a).cmp(&position(b)));
        }
    }

    /// 关联边数量（自环只算一次）
    #[cfg(test)]
    pub(crate) fn incidence_count(&self, vertex: VertexId) -> usize {
        self.incident.get(&vertex).map(|e| e.len()).unwrap_or(0)
    }
}
