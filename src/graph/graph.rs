//! 图数据结构
//!
//! 内存中的有向/无向图。顶点与边记录由图独占，调用方只持有 ID；
//! 有向与无向的差别只体现在 `GraphKind` 这一处，所有度数、邻接与包含查询都据此分支。

use super::edge::{Edge, EdgeId};
use super::index::AdjacencyIndex;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::GraphKind;
use indexmap::IndexMap;
use std::cmp::Ordering;
use tracing::warn;

/// 图
///
/// 结构性修改（增删顶点或边）会使之前取得的迭代器失效；借用规则保证迭代期间无法修改。
#[derive(Debug, Clone)]
pub struct Graph<VL, EL> {
    /// 有向或无向
    kind: GraphKind,
    /// 顶点表（保持插入顺序）
    vertices: IndexMap<VertexId, Vertex<VL>>,
    /// 全局边表，`order_edges` 会重排
    edges: IndexMap<EdgeId, Edge<EL>>,
    /// 顶点到关联边的索引
    index: AdjacencyIndex,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl<VL, EL> Graph<VL, EL> {
    /// 创建空图
    pub fn new(kind: GraphKind) -> Self {
        Self::with_capacity(kind, 0, 0)
    }

    /// 创建预分配容量的空图
    pub fn with_capacity(kind: GraphKind, vertices: usize, edges: usize) -> Self {
        Self {
            kind,
            vertices: IndexMap::with_capacity(vertices),
            edges: IndexMap::with_capacity(edges),
            index: AdjacencyIndex::with_capacity(vertices),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    /// 创建空的有向图
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// 创建空的无向图
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，新顶点没有关联边
    pub fn add_vertex(&mut self, label: VL) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        self.index.register(id);
        self.vertices.insert(id, Vertex::new(id, label));

        id
    }

    /// 顶点是否在图中
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// 获取顶点
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex<VL>> {
        self.vertices.get(&vertex)
    }

    /// 获取顶点标签
    pub fn vertex_label(&self, vertex: VertexId) -> Option<&VL> {
        self.vertices.get(&vertex).map(Vertex::label)
    }

    pub fn vertex_label_mut(&mut self, vertex: VertexId) -> Option<&mut VL> {
        self.vertices.get_mut(&vertex).map(Vertex::label_mut)
    }

    /// 覆盖顶点标签，返回旧标签
    pub fn set_vertex_label(&mut self, vertex: VertexId, label: VL) -> Result<VL> {
        self.vertices
            .get_mut(&vertex)
            .map(|v| v.replace_label(label))
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// 删除顶点及其所有关联边；顶点不存在时什么也不做
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Option<VL> {
        let Some(removed) = self.vertices.shift_remove(&vertex) else {
            warn!(vertex = %vertex, "要删除的顶点不在图中");
            return None;
        };

        if let Some(incident) = self.index.unregister(vertex) {
            for edge_id in incident {
                if let Some(edge) = self.edges.shift_remove(&edge_id) {
                    self.index.detach(edge_id, edge.src(), edge.dst());
                }
            }
        }

        Some(removed.into_label())
    }

    // ==================== 边操作 ====================

    /// 添加边；有向图中方向为 from -> to
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: EL) -> Result<EdgeId> {
        for end in [from, to] {
            if !self.has_vertex(end) {
                warn!(vertex = %end, "边的端点不在图中");
                return Err(Error::VertexNotFound(end));
            }
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        self.index.attach(id, from, to);
        self.edges.insert(id, Edge::new(id, label, from, to));

        Ok(id)
    }

    /// 添加不带标签的边，标签取 `EL::default()`
    pub fn add_unlabeled_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId>
    where
        EL: Default,
    {
        self.add_edge(from, to, EL::default())
    }

    /// 边是否在图中
    pub fn has_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains_key(&edge)
    }

    /// 获取边
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge<EL>> {
        self.edges.get(&edge)
    }

    /// 获取边标签
    pub fn edge_label(&self, edge: EdgeId) -> Option<&EL> {
        self.edges.get(&edge).map(Edge::label)
    }

    pub fn edge_label_mut(&mut self, edge: EdgeId) -> Option<&mut EL> {
        self.edges.get_mut(&edge).map(Edge::label_mut)
    }

    /// 覆盖边标签，返回旧标签
    pub fn set_edge_label(&mut self, edge: EdgeId, label: EL) -> Result<EL> {
        self.edges
            .get_mut(&edge)
            .map(|e| e.replace_label(label))
            .ok_or(Error::EdgeNotFound(edge))
    }

    /// 返回边上相对于 `vertex` 的另一端
    pub fn other_end(&self, edge: EdgeId, vertex: VertexId) -> Result<VertexId> {
        self.edges
            .get(&edge)
            .ok_or(Error::EdgeNotFound(edge))?
            .other(vertex)
    }

    /// 删除边；边不在图中时什么也不做
    pub fn remove_edge(&mut self, edge: EdgeId) -> Option<EL> {
        match self.take_edge(edge) {
            Some(removed) => Some(removed.into_label()),
            None => {
                warn!(edge = %edge, "要删除的边不在图中");
                None
            }
        }
    }

    /// 删除 from 与 to 之间的所有边（无向图两个方向都删），返回删除数量
    pub fn remove_edges_between(&mut self, from: VertexId, to: VertexId) -> usize {
        if !self.endpoints_known(from, to) {
            return 0;
        }

        let directed = self.is_directed();
        let doomed: Vec<EdgeId> = self
            .incident_iter(from)
            .filter(|e| e.connects(from, to, directed))
            .map(Edge::id)
            .collect();

        for &id in &doomed {
            self.take_edge(id);
        }

        doomed.len()
    }

    /// 是否存在边 (from, to)，标签任意
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        if !self.endpoints_known(from, to) {
            return false;
        }
        let directed = self.is_directed();
        self.incident_iter(from)
            .any(|e| e.connects(from, to, directed))
    }

    /// 是否存在标签等于 `label` 的边 (from, to)
    pub fn contains_labeled(&self, from: VertexId, to: VertexId, label: &EL) -> bool
    where
        EL: PartialEq,
    {
        if !self.endpoints_known(from, to) {
            return false;
        }
        let directed = self.is_directed();
        self.incident_iter(from)
            .any(|e| e.connects(from, to, directed) && e.label() == label)
    }

    fn take_edge(&mut self, edge: EdgeId) -> Option<Edge<EL>> {
        let removed = self.edges.shift_remove(&edge)?;
        self.index.detach(edge, removed.src(), removed.dst());
        Some(removed)
    }

    fn endpoints_known(&self, from: VertexId, to: VertexId) -> bool {
        for end in [from, to] {
            if !self.has_vertex(end) {
                warn!(vertex = %end, "顶点不在图中");
                return false;
            }
        }
        true
    }

    // ==================== 度数 ====================

    /// 出度。无向图中等于关联边数，自环计两次
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.count_degree(vertex, true)
    }

    /// 入度。无向图中与出度相同
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.count_degree(vertex, false)
    }

    /// `out_degree` 的同义词，多用于无向图
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.out_degree(vertex)
    }

    fn count_degree(&self, vertex: VertexId, outgoing: bool) -> usize {
        if !self.has_vertex(vertex) {
            warn!(vertex = %vertex, "查询度数的顶点不在图中");
            return 0;
        }

        let directed = self.is_directed();
        self.incident_iter(vertex)
            .map(|e| {
                if directed {
                    let end = if outgoing { e.src() } else { e.dst() };
                    usize::from(end == vertex)
                } else if e.is_self_loop() {
                    2
                } else {
                    1
                }
            })
            .sum()
    }

    // ==================== 迭代 ====================

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 所有边（插入顺序，或最近一次 `order_edges` 的顺序）
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys().copied()
    }

    /// 后继顶点
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let directed = self.is_directed();
        self.incident_iter(vertex).filter_map(move |e| {
            if e.src() == vertex {
                Some(e.dst())
            } else if !directed && e.dst() == vertex {
                Some(e.src())
            } else {
                None
            }
        })
    }

    /// 前驱顶点
    pub fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let directed = self.is_directed();
        self.incident_iter(vertex).filter_map(move |e| {
            if e.dst() == vertex {
                Some(e.src())
            } else if !directed && e.src() == vertex {
                Some(e.dst())
            } else {
                None
            }
        })
    }

    /// `successors` 的同义词，多用于无向图
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.successors(vertex)
    }

    /// 出边；无向图中即所有关联边
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let directed = self.is_directed();
        self.incident_iter(vertex)
            .filter(move |e| e.leaves(vertex, directed))
            .map(Edge::id)
    }

    /// 入边；无向图中即所有关联边
    pub fn in_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let directed = self.is_directed();
        self.incident_iter(vertex)
            .filter(move |e| e.enters(vertex, directed))
            .map(Edge::id)
    }

    /// `out_edges` 的同义词，多用于无向图
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_edges(vertex)
    }

    fn incident_iter(&self, vertex: VertexId) -> impl Iterator<Item = &Edge<EL>> + '_ {
        self.index
            .incident(vertex)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.edges.get(id))
    }

    /// 按边标签对全局边表排序，之后的 `edges()` 与遍历都按此顺序给出边。
    /// 之后新增的边追加在末尾，直到下一次排序。
    pub fn order_edges<F>(&mut self, mut compare: F)
    where
        F: FnMut(&EL, &EL) -> Ordering,
    {
        self.edges
            .sort_by(|_, a, _, b| compare(a.label(), b.label()));

        let edges = &self.edges;
        self.index.reorder(|id| edges.get_index_of(id));
    }
}
