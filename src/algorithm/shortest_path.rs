//! A* 最短路径
//!
//! 求解器只通过 [`CostStrategy`] 读写顶点累计代价与边权，两种调用方式只是它的两个适配器：
//! - [`Accessors`]：代价与权重由外部的 `Weighter`/`Weighting` 按标签读写
//! - [`SelfWeighted`]：顶点标签与边标签自带权重
//!
//! 调用结束后，所有被关闭或被改进过的顶点的代价等于当时已知的最短距离，未到达的顶点为正无穷。

use super::weight::{Distancer, Weightable, Weighted, Weighter, Weighting, ZeroDistancer, ZERO_DISTANCER};
use crate::graph::{EdgeId, Graph, VertexId};
use priority_queue::PriorityQueue;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// 顶点代价与边权的读写策略
pub trait CostStrategy<VL, EL> {
    /// 被搜索的图
    fn graph(&self) -> &Graph<VL, EL>;

    /// 顶点当前的累计代价
    fn vertex_cost(&self, vertex: VertexId) -> f64;

    /// 写入顶点的累计代价
    fn set_vertex_cost(&mut self, vertex: VertexId, cost: f64);

    /// 边权
    fn edge_weight(&self, edge: EdgeId) -> f64;
}

/// 通过外部访问器按标签读写代价
///
/// 代价以顶点标签为键写入 `vertex_weighter`，标签相同的顶点共享同一个代价。
pub struct Accessors<'a, VL, EL, W, E> {
    graph: &'a Graph<VL, EL>,
    vertex_weighter: &'a mut W,
    edge_weighter: &'a E,
}

impl<'a, VL, EL, W, E> Accessors<'a, VL, EL, W, E> {
    pub fn new(graph: &'a Graph<VL, EL>, vertex_weighter: &'a mut W, edge_weighter: &'a E) -> Self {
        Self {
            graph,
            vertex_weighter,
            edge_weighter,
        }
    }
}

impl<VL, EL, W, E> CostStrategy<VL, EL> for Accessors<'_, VL, EL, W, E>
where
    W: Weighter<VL>,
    E: Weighting<EL>,
{
    fn graph(&self) -> &Graph<VL, EL> {
        self.graph
    }

    fn vertex_cost(&self, vertex: VertexId) -> f64 {
        self.graph
            .vertex_label(vertex)
            .map(|label| self.vertex_weighter.weight(label))
            .unwrap_or(f64::INFINITY)
    }

    fn set_vertex_cost(&mut self, vertex: VertexId, cost: f64) {
        let graph = self.graph;
        if let Some(label) = graph.vertex_label(vertex) {
            self.vertex_weighter.set_weight(label, cost);
        }
    }

    fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.graph
            .edge_label(edge)
            .map(|label| self.edge_weighter.weight(label))
            .unwrap_or(f64::INFINITY)
    }
}

/// 顶点与边的标签自带权重
pub struct SelfWeighted<'a, VL, EL> {
    graph: &'a mut Graph<VL, EL>,
}

impl<'a, VL, EL> SelfWeighted<'a, VL, EL> {
    pub fn new(graph: &'a mut Graph<VL, EL>) -> Self {
        Self { graph }
    }
}

impl<VL, EL> CostStrategy<VL, EL> for SelfWeighted<'_, VL, EL>
where
    VL: Weightable,
    EL: Weighted,
{
    fn graph(&self) -> &Graph<VL, EL> {
        self.graph
    }

    fn vertex_cost(&self, vertex: VertexId) -> f64 {
        self.graph
            .vertex_label(vertex)
            .map(|label| label.weight())
            .unwrap_or(f64::INFINITY)
    }

    fn set_vertex_cost(&mut self, vertex: VertexId, cost: f64) {
        if let Some(label) = self.graph.vertex_label_mut(vertex) {
            label.set_weight(cost);
        }
    }

    fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.graph
            .edge_label(edge)
            .map(|label| label.weight())
            .unwrap_or(f64::INFINITY)
    }
}

/// 路径结果
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// 路径上的顶点序列（含起点与终点）
    pub vertices: Vec<VertexId>,
    /// 从起点到终点的边序列
    pub edges: Vec<EdgeId>,
    /// 路径总代价
    pub total_weight: f64,
}

impl PathResult {
    /// 路径的边数
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

/// 开放集优先级：f 越小越先出队，f 相同时先入队者优先
#[derive(Debug, Clone, Copy)]
struct Priority {
    f: f64,
    seq: u64,
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

/// A* 求解器
///
/// 启发函数可采纳且一致时结果最优；否则仍会终止，但不保证最优。
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H> {
    heuristic: H,
}

impl AStar<ZeroDistancer> {
    /// 零启发函数，即 Dijkstra
    pub fn dijkstra() -> Self {
        Self::new(ZERO_DISTANCER)
    }
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// 由外部访问器读写代价的最短路径
    pub fn shortest_path<VL, EL, W, E>(
        &self,
        graph: &Graph<VL, EL>,
        source: VertexId,
        target: VertexId,
        vertex_weighter: &mut W,
        edge_weighter: &E,
    ) -> Option<PathResult>
    where
        H: Distancer<VL>,
        W: Weighter<VL>,
        E: Weighting<EL>,
    {
        let mut costs = Accessors::new(graph, vertex_weighter, edge_weighter);
        self.search(&mut costs, source, target)
    }

    /// 顶点与边标签自带权重的最短路径；代价写回顶点标签
    pub fn shortest_path_self_weighted<VL, EL>(
        &self,
        graph: &mut Graph<VL, EL>,
        source: VertexId,
        target: VertexId,
    ) -> Option<PathResult>
    where
        H: Distancer<VL>,
        VL: Weightable,
        EL: Weighted,
    {
        let mut costs = SelfWeighted::new(graph);
        self.search(&mut costs, source, target)
    }

    /// 在任意代价策略上执行 A*
    pub fn search<VL, EL, S>(&self, costs: &mut S, source: VertexId, target: VertexId) -> Option<PathResult>
    where
        H: Distancer<VL>,
        S: CostStrategy<VL, EL>,
    {
        for end in [source, target] {
            if !costs.graph().has_vertex(end) {
                warn!(vertex = %end, "最短路径的端点不在图中");
                return None;
            }
        }

        let vertices: Vec<VertexId> = costs.graph().vertices().collect();
        for vertex in vertices {
            costs.set_vertex_cost(vertex, f64::INFINITY);
        }

        let mut open: PriorityQueue<VertexId, Priority> = PriorityQueue::new();
        let mut f_scores: HashMap<VertexId, f64> = HashMap::new();
        let mut closed: HashSet<VertexId> = HashSet::new();
        let mut came_from: HashMap<VertexId, EdgeId> = HashMap::new();
        let mut seq = 0u64;

        costs.set_vertex_cost(source, 0.0);
        let f = self.estimate(costs.graph(), source, target);
        f_scores.insert(source, f);
        open.push(source, Priority { f, seq });

        while let Some((current, _)) = open.pop() {
            if current == target {
                let total = costs.vertex_cost(target);
                debug!(source = %source, target = %target, total, "到达终点");
                return Some(reconstruct(costs.graph(), &came_from, source, target, total));
            }

            closed.insert(current);
            let g_current = costs.vertex_cost(current);
            trace!(vertex = %current, cost = g_current, "展开顶点");

            let steps: Vec<(EdgeId, VertexId)> = {
                let graph = costs.graph();
                graph
                    .out_edges(current)
                    .filter_map(|edge| graph.other_end(edge, current).ok().map(|n| (edge, n)))
                    .collect()
            };

            for (edge, neighbor) in steps {
                let tentative_g = g_current + costs.edge_weight(edge);
                let tentative_f = tentative_g + self.estimate(costs.graph(), neighbor, target);
                let recorded = f_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);

                if closed.contains(&neighbor) && tentative_f >= recorded {
                    continue;
                }

                let queued = open.get(&neighbor).is_some();
                if !queued || tentative_f < recorded {
                    came_from.insert(neighbor, edge);
                    costs.set_vertex_cost(neighbor, tentative_g);
                    f_scores.insert(neighbor, tentative_f);

                    seq += 1;
                    let priority = Priority { f: tentative_f, seq };
                    if queued {
                        open.change_priority(&neighbor, priority);
                    } else {
                        open.push(neighbor, priority);
                    }
                }
            }
        }

        debug!(source = %source, target = %target, closed = closed.len(), "开放集耗尽，终点不可达");
        None
    }

    fn estimate<VL, EL>(&self, graph: &Graph<VL, EL>, vertex: VertexId, target: VertexId) -> f64
    where
        H: Distancer<VL>,
    {
        match (graph.vertex_label(vertex), graph.vertex_label(target)) {
            (Some(from), Some(to)) => self.heuristic.dist(from, to),
            _ => f64::INFINITY,
        }
    }
}

/// 从终点沿前驱边回溯到起点
fn reconstruct<VL, EL>(
    graph: &Graph<VL, EL>,
    came_from: &HashMap<VertexId, EdgeId>,
    source: VertexId,
    target: VertexId,
    total_weight: f64,
) -> PathResult {
    let mut vertices = vec![target];
    let mut edges = Vec::new();
    let mut current = target;

    while current != source && edges.len() <= came_from.len() {
        let Some(&edge) = came_from.get(&current) else {
            break;
        };
        let Ok(previous) = graph.other_end(edge, current) else {
            break;
        };
        edges.push(edge);
        vertices.push(previous);
        current = previous;
    }

    vertices.reverse();
    edges.reverse();
    PathResult {
        vertices,
        edges,
        total_weight,
    }
}

/// 外部访问器版本的 A*
pub fn shortest_path<VL, EL, W, E, H>(
    graph: &Graph<VL, EL>,
    source: VertexId,
    target: VertexId,
    vertex_weighter: &mut W,
    edge_weighter: &E,
    heuristic: H,
) -> Option<PathResult>
where
    H: Distancer<VL>,
    W: Weighter<VL>,
    E: Weighting<EL>,
{
    AStar::new(heuristic).shortest_path(graph, source, target, vertex_weighter, edge_weighter)
}

/// 自带权重版本的 A*
pub fn shortest_path_self_weighted<VL, EL, H>(
    graph: &mut Graph<VL, EL>,
    source: VertexId,
    target: VertexId,
    heuristic: H,
) -> Option<PathResult>
where
    H: Distancer<VL>,
    VL: Weightable,
    EL: Weighted,
{
    AStar::new(heuristic).shortest_path_self_weighted(graph, source, target)
}

/// Dijkstra 最短路径
pub fn dijkstra<VL, EL, W, E>(
    graph: &Graph<VL, EL>,
    source: VertexId,
    target: VertexId,
    vertex_weighter: &mut W,
    edge_weighter: &E,
) -> Option<PathResult>
where
    W: Weighter<VL>,
    E: Weighting<EL>,
{
    AStar::dijkstra().shortest_path(graph, source, target, vertex_weighter, edge_weighter)
}
