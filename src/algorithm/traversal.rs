//! 通用图遍历
//!
//! 遍历反复从边缘集合（fringe）取出一个顶点、访问它、再把未访问的后继加入边缘集合。
//! 边缘集合的取出顺序决定遍历种类：
//! - 有序遍历：按顶点标签的比较器取最小者，没有 post_visit
//! - 深度优先：栈；后继处理完后回到顶点本身调用 post_visit
//! - 广度优先：队列；同样在顶点重新出队时调用 post_visit
//!
//! 钩子通过返回 [`Flow`] 控制遍历：跳过某条边、跳过某个顶点的后继、或整体停止。
//! 已标记的顶点在同一个 [`Traversal`] 上跨多次调用保留，便于逐个连通分量继续遍历。

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;
use tracing::{debug, warn};

/// 钩子返回的控制信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// 照常继续
    #[default]
    Continue,
    /// 在 visit 中返回：顶点仍记为已访问，但不从它展开后继
    SkipSuccessors,
    /// 在 pre_visit 中返回：不经这条边把候选顶点加入边缘集合
    SkipEdge,
    /// 在任意钩子中返回：立即结束整个遍历
    Stop,
}

/// 遍历的扩展点，默认实现什么也不做
pub trait Visitor<VL, EL> {
    /// 顶点第一次出队且未被标记时调用
    fn visit(&mut self, _graph: &Graph<VL, EL>, _vertex: VertexId) -> Flow {
        Flow::Continue
    }

    /// 候选后继经 `edge` 加入边缘集合之前调用
    fn pre_visit(&mut self, _graph: &Graph<VL, EL>, _edge: EdgeId, _candidate: VertexId) -> Flow {
        Flow::Continue
    }

    /// 顶点的所有后继处理完毕后调用（仅深度优先与广度优先）
    fn post_visit(&mut self, _graph: &Graph<VL, EL>, _vertex: VertexId) -> Flow {
        Flow::Continue
    }
}

impl<VL, EL> Visitor<VL, EL> for () {}

/// 遍历种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    Ordered,
    DepthFirst,
    BreadthFirst,
}

/// 一次遍历调用的结局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    /// 边缘集合耗尽
    Exhausted,
    /// 某个钩子返回了 `Flow::Stop`
    Stopped,
}

impl Completion {
    pub fn is_stopped(&self) -> bool {
        matches!(self, Completion::Stopped)
    }
}

type LabelOrder<'g, VL> = Box<dyn Fn(&VL, &VL) -> Ordering + 'g>;

/// 最近一次使用的遍历方式，供 `continue_traversing` 复用
enum Discipline<'g, VL> {
    Ordered(LabelOrder<'g, VL>),
    DepthFirst,
    BreadthFirst,
}

impl<VL> Discipline<'_, VL> {
    fn kind(&self) -> TraversalKind {
        match self {
            Discipline::Ordered(_) => TraversalKind::Ordered,
            Discipline::DepthFirst => TraversalKind::DepthFirst,
            Discipline::BreadthFirst => TraversalKind::BreadthFirst,
        }
    }
}

/// 深度优先与广度优先边缘集合中的条目；`Leave` 是顶点重新入队的哨兵
#[derive(Debug, Clone, Copy)]
enum Pending {
    Enter(VertexId),
    Leave(VertexId),
}

/// 遍历因 `Flow::Stop` 中止的位置
#[derive(Debug, Clone, Copy)]
struct Halt {
    vertex: VertexId,
    edge: Option<EdgeId>,
}

impl Halt {
    fn at(vertex: VertexId) -> Self {
        Self { vertex, edge: None }
    }

    fn on_edge(edge: EdgeId, candidate: VertexId) -> Self {
        Self {
            vertex: candidate,
            edge: Some(edge),
        }
    }
}

/// 图遍历器
pub struct Traversal<'g, VL, EL, V> {
    /// 正在遍历的图
    graph: &'g Graph<VL, EL>,
    /// 钩子实现
    visitor: V,
    /// 已访问的顶点，跨调用保留
    marked: HashSet<VertexId>,
    /// 最近一次使用的遍历方式
    last: Option<Discipline<'g, VL>>,
    /// 导致停止的顶点
    final_vertex: Option<VertexId>,
    /// 导致停止的边（停止发生在 pre_visit 时）
    final_edge: Option<EdgeId>,
}

impl<'g, VL, EL, V> Traversal<'g, VL, EL, V>
where
    V: Visitor<VL, EL>,
{
    /// 创建遍历器
    pub fn new(graph: &'g Graph<VL, EL>, visitor: V) -> Self {
        Self {
            graph,
            visitor,
            marked: HashSet::new(),
            last: None,
            final_vertex: None,
            final_edge: None,
        }
    }

    /// 有序遍历：边缘集合按 `order` 比较顶点标签，每次取最小者
    pub fn traverse<F>(&mut self, seed: VertexId, order: F) -> Completion
    where
        F: Fn(&VL, &VL) -> Ordering + 'g,
    {
        self.last = Some(Discipline::Ordered(Box::new(order)));
        self.run(seed)
    }

    /// 深度优先遍历
    pub fn depth_first_traverse(&mut self, seed: VertexId) -> Completion {
        self.last = Some(Discipline::DepthFirst);
        self.run(seed)
    }

    /// 广度优先遍历
    pub fn breadth_first_traverse(&mut self, seed: VertexId) -> Completion {
        self.last = Some(Discipline::BreadthFirst);
        self.run(seed)
    }

    /// 以最近一次的遍历方式从 `seed` 继续，已访问的顶点不再访问
    pub fn continue_traversing(&mut self, seed: VertexId) -> Result<Completion> {
        if self.last.is_none() {
            return Err(Error::NoTraversal);
        }
        Ok(self.run(seed))
    }

    fn run(&mut self, seed: VertexId) -> Completion {
        self.final_vertex = None;
        self.final_edge = None;

        if !self.graph.has_vertex(seed) {
            warn!(vertex = %seed, "遍历起点不在图中");
            return Completion::Exhausted;
        }

        let graph = self.graph;
        let visitor = &mut self.visitor;
        let marked = &mut self.marked;
        let halt = match &self.last {
            Some(Discipline::Ordered(order)) => run_ordered(graph, visitor, marked, order, seed),
            Some(Discipline::DepthFirst) => run_depth_first(graph, visitor, marked, seed),
            Some(Discipline::BreadthFirst) => run_breadth_first(graph, visitor, marked, seed),
            None => None,
        };

        match halt {
            Some(Halt { vertex, edge }) => {
                debug!(vertex = %vertex, edge = ?edge, "遍历被钩子停止");
                self.final_vertex = Some(vertex);
                self.final_edge = edge;
                Completion::Stopped
            }
            None => Completion::Exhausted,
        }
    }

    /// 遍历提前停止时，导致停止的顶点；pre_visit 停止时为候选顶点
    pub fn final_vertex(&self) -> Option<VertexId> {
        self.final_vertex
    }

    /// 遍历在 pre_visit 中停止时，对应的边
    pub fn final_edge(&self) -> Option<EdgeId> {
        self.final_edge
    }

    /// 正在遍历的图
    pub fn graph(&self) -> &'g Graph<VL, EL> {
        self.graph
    }

    pub fn last_order(&self) -> Option<TraversalKind> {
        self.last.as_ref().map(Discipline::kind)
    }

    pub fn is_marked(&self, vertex: VertexId) -> bool {
        self.marked.contains(&vertex)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// 清除所有标记与停止记录
    pub fn reset(&mut self) {
        self.marked.clear();
        self.final_vertex = None;
        self.final_edge = None;
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

impl<VL, EL, V: fmt::Debug> fmt::Debug for Traversal<'_, VL, EL, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("visitor", &self.visitor)
            .field("marked", &self.marked.len())
            .field("last", &self.last.as_ref().map(Discipline::kind))
            .field("final_vertex", &self.final_vertex)
            .field("final_edge", &self.final_edge)
            .finish()
    }
}

/// 访问并标记顶点；返回是否继续展开后继
fn enter<VL, EL, V>(
    graph: &Graph<VL, EL>,
    visitor: &mut V,
    marked: &mut HashSet<VertexId>,
    vertex: VertexId,
) -> std::result::Result<bool, Halt>
where
    V: Visitor<VL, EL>,
{
    marked.insert(vertex);
    match visitor.visit(graph, vertex) {
        Flow::Stop => Err(Halt::at(vertex)),
        Flow::SkipSuccessors | Flow::SkipEdge => Ok(false),
        Flow::Continue => Ok(true),
    }
}

/// 候选后继的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offer {
    /// 不考虑这条边
    Ignore,
    /// 本轮已经 pre_visit 过，直接再次加入边缘集合
    Readmit,
    /// 交给 pre_visit 决定
    Ask,
}

/// 收集被接纳的候选后继（按边的枚举顺序）；经 pre_visit 接纳的顶点记入 `offered`
fn admit<VL, EL, V>(
    graph: &Graph<VL, EL>,
    visitor: &mut V,
    vertex: VertexId,
    offered: &mut HashSet<VertexId>,
    classify: impl Fn(VertexId, &HashSet<VertexId>) -> Offer,
) -> std::result::Result<Vec<VertexId>, Halt>
where
    V: Visitor<VL, EL>,
{
    let mut admitted = Vec::new();
    for edge in graph.out_edges(vertex) {
        let Ok(candidate) = graph.other_end(edge, vertex) else {
            continue;
        };
        match classify(candidate, offered) {
            Offer::Ignore => continue,
            Offer::Readmit => {
                admitted.push(candidate);
                continue;
            }
            Offer::Ask => {}
        }
        match visitor.pre_visit(graph, edge, candidate) {
            Flow::Stop => return Err(Halt::on_edge(edge, candidate)),
            Flow::SkipEdge | Flow::SkipSuccessors => {}
            Flow::Continue => {
                offered.insert(candidate);
                admitted.push(candidate);
            }
        }
    }
    Ok(admitted)
}

/// 有序遍历的边缘集合条目：标签最小者先出堆，相等时先入者优先
struct Queued<'a, VL> {
    vertex: VertexId,
    label: &'a VL,
    seq: u64,
    order: &'a (dyn Fn(&VL, &VL) -> Ordering + 'a),
}

impl<VL> Ord for Queued<'_, VL> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.order)(other.label, self.label).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<VL> PartialOrd for Queued<'_, VL> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<VL> PartialEq for Queued<'_, VL> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<VL> Eq for Queued<'_, VL> {}

fn run_ordered<VL, EL, V>(
    graph: &Graph<VL, EL>,
    visitor: &mut V,
    marked: &mut HashSet<VertexId>,
    order: &LabelOrder<'_, VL>,
    seed: VertexId,
) -> Option<Halt>
where
    V: Visitor<VL, EL>,
{
    let order: &dyn Fn(&VL, &VL) -> Ordering = &**order;
    let mut seq = 0u64;
    let mut fringe = BinaryHeap::new();
    if let Some(label) = graph.vertex_label(seed) {
        fringe.push(Queued {
            vertex: seed,
            label,
            seq,
            order,
        });
    }
    let mut offered = HashSet::from([seed]);

    while let Some(Queued { vertex, .. }) = fringe.pop() {
        if marked.contains(&vertex) {
            continue;
        }
        match enter(graph, visitor, marked, vertex) {
            Err(halt) => return Some(halt),
            Ok(false) => continue,
            Ok(true) => {}
        }

        let admitted = match admit(graph, visitor, vertex, &mut offered, |c, offered| {
            if marked.contains(&c) || offered.contains(&c) {
                Offer::Ignore
            } else {
                Offer::Ask
            }
        }) {
            Ok(admitted) => admitted,
            Err(halt) => return Some(halt),
        };
        for candidate in admitted {
            let Some(label) = graph.vertex_label(candidate) else {
                continue;
            };
            seq += 1;
            fringe.push(Queued {
                vertex: candidate,
                label,
                seq,
                order,
            });
        }
    }
    None
}

fn run_depth_first<VL, EL, V>(
    graph: &Graph<VL, EL>,
    visitor: &mut V,
    marked: &mut HashSet<VertexId>,
    seed: VertexId,
) -> Option<Halt>
where
    V: Visitor<VL, EL>,
{
    let mut fringe = vec![Pending::Enter(seed)];
    let mut offered = HashSet::new();
    while let Some(item) = fringe.pop() {
        let vertex = match item {
            Pending::Leave(vertex) => {
                if visitor.post_visit(graph, vertex) == Flow::Stop {
                    return Some(Halt::at(vertex));
                }
                continue;
            }
            Pending::Enter(vertex) if marked.contains(&vertex) => continue,
            Pending::Enter(vertex) => vertex,
        };

        match enter(graph, visitor, marked, vertex) {
            Err(halt) => return Some(halt),
            Ok(false) => continue,
            Ok(true) => {}
        }

        fringe.push(Pending::Leave(vertex));
        // 重新发现的顶点再次压栈但不再 pre_visit，保持真正的深度优先顺序
        let admitted = match admit(graph, visitor, vertex, &mut offered, |c, offered| {
            if marked.contains(&c) {
                Offer::Ignore
            } else if offered.contains(&c) {
                Offer::Readmit
            } else {
                Offer::Ask
            }
        }) {
            Ok(admitted) => admitted,
            Err(halt) => return Some(halt),
        };
        // 逆序压栈，先枚举到的后继先处理
        fringe.extend(admitted.into_iter().rev().map(Pending::Enter));
    }
    None
}

fn run_breadth_first<VL, EL, V>(
    graph: &Graph<VL, EL>,
    visitor: &mut V,
    marked: &mut HashSet<VertexId>,
    seed: VertexId,
) -> Option<Halt>
where
    V: Visitor<VL, EL>,
{
    let mut fringe = VecDeque::from([Pending::Enter(seed)]);
    let mut offered = HashSet::from([seed]);
    while let Some(item) = fringe.pop_front() {
        let vertex = match item {
            Pending::Leave(vertex) => {
                if visitor.post_visit(graph, vertex) == Flow::Stop {
                    return Some(Halt::at(vertex));
                }
                continue;
            }
            Pending::Enter(vertex) if marked.contains(&vertex) => continue,
            Pending::Enter(vertex) => vertex,
        };

        match enter(graph, visitor, marked, vertex) {
            Err(halt) => return Some(halt),
            Ok(false) => continue,
            Ok(true) => {}
        }

        let admitted = match admit(graph, visitor, vertex, &mut offered, |c, offered| {
            if marked.contains(&c) || offered.contains(&c) {
                Offer::Ignore
            } else {
                Offer::Ask
            }
        }) {
            Ok(admitted) => admitted,
            Err(halt) => return Some(halt),
        };
        fringe.extend(admitted.into_iter().map(Pending::Enter));
        fringe.push_back(Pending::Leave(vertex));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoLabel;
    use std::collections::HashMap;

    /// 记录钩子调用顺序的访问器
    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
        reject_subtree: Option<&'static str>,
        reject_edge_to: Option<&'static str>,
        stop_at: Option<&'static str>,
        stop_after: Option<&'static str>,
    }

    impl Recorder {
        fn visits(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| e.strip_prefix("visit "))
                .collect()
        }

        fn posts(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| e.strip_prefix("post "))
                .collect()
        }

        fn pres(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| e.strip_prefix("pre "))
                .collect()
        }
    }

    impl Visitor<&'static str, NoLabel> for Recorder {
        fn visit(&mut self, graph: &Graph<&'static str, NoLabel>, vertex: VertexId) -> Flow {
            let label = *graph.vertex_label(vertex).unwrap();
            self.events.push(format!("visit {label}"));
            if self.stop_at == Some(label) {
                Flow::Stop
            } else if self.reject_subtree == Some(label) {
                Flow::SkipSuccessors
            } else {
                Flow::Continue
            }
        }

        fn pre_visit(
            &mut self,
            graph: &Graph<&'static str, NoLabel>,
            edge: EdgeId,
            candidate: VertexId,
        ) -> Flow {
            let from = graph.other_end(edge, candidate).unwrap();
            let label = *graph.vertex_label(candidate).unwrap();
            self.events
                .push(format!("pre {}>{label}", graph.vertex_label(from).unwrap()));
            if self.reject_edge_to == Some(label) {
                Flow::SkipEdge
            } else {
                Flow::Continue
            }
        }

        fn post_visit(&mut self, graph: &Graph<&'static str, NoLabel>, vertex: VertexId) -> Flow {
            let label = *graph.vertex_label(vertex).unwrap();
            self.events.push(format!("post {label}"));
            if self.stop_after == Some(label) {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }
    }

    /// root -> p, q, r；p -> p1 -> p2；q -> q1；p2 -> q
    fn tree() -> (Graph<&'static str, NoLabel>, VertexId) {
        let mut graph = Graph::directed();
        let root = graph.add_vertex("root");
        let p = graph.add_vertex("p");
        let q = graph.add_vertex("q");
        let r = graph.add_vertex("r");
        let p1 = graph.add_vertex("p1");
        let p2 = graph.add_vertex("p2");
        let q1 = graph.add_vertex("q1");
        for (from, to) in [(root, p), (root, q), (root, r), (p, p1), (p1, p2), (q, q1), (p2, q)] {
            graph.add_unlabeled_edge(from, to).unwrap();
        }
        (graph, root)
    }

    #[test]
    fn test_depth_first_order() {
        let (graph, root) = tree();
        let mut traversal = Traversal::new(&graph, Recorder::default());

        assert_eq!(traversal.depth_first_traverse(root), Completion::Exhausted);

        let recorder = traversal.visitor();
        // q 可以从 p2 到达，因此在 p 的子树内被访问
        assert_eq!(recorder.visits(), vec!["root", "p", "p1", "p2", "q", "q1", "r"]);
        assert_eq!(recorder.posts(), vec!["q1", "q", "p2", "p1", "p", "r", "root"]);
    }

    #[test]
    fn test_post_visit_after_reachable_successors() {
        let (graph, root) = tree();
        let mut traversal = Traversal::new(&graph, Recorder::default());
        traversal.depth_first_traverse(root);

        let events = &traversal.visitor().events;
        let position = |event: &str| events.iter().position(|e| e == event).unwrap();
        for vertex in graph.vertices() {
            let label = graph.vertex_label(vertex).unwrap();
            let post = position(&format!("post {label}"));
            for successor in graph.successors(vertex) {
                let succ = graph.vertex_label(successor).unwrap();
                assert!(position(&format!("visit {succ}")) < post);
            }
        }
    }

    #[test]
    fn test_breadth_first_order() {
        let (graph, root) = tree();
        let mut traversal = Traversal::new(&graph, Recorder::default());

        traversal.breadth_first_traverse(root);

        let recorder = traversal.visitor();
        assert_eq!(recorder.visits(), vec!["root", "p", "q", "r", "p1", "q1", "p2"]);
        // 每个顶点只被 pre_visit 一次
        assert_eq!(recorder.pres().len(), 6);
        assert_eq!(recorder.posts(), vec!["root", "p", "q", "r", "p1", "q1", "p2"]);
    }

    #[test]
    fn test_ordered_traversal() {
        let mut graph: Graph<i32, NoLabel> = Graph::undirected();
        let five = graph.add_vertex(5);
        let nine = graph.add_vertex(9);
        let one = graph.add_vertex(1);
        let seven = graph.add_vertex(7);
        let three = graph.add_vertex(3);
        for (from, to) in [(five, nine), (five, seven), (nine, one), (seven, three)] {
            graph.add_unlabeled_edge(from, to).unwrap();
        }

        #[derive(Default)]
        struct Labels(Vec<i32>);
        impl Visitor<i32, NoLabel> for Labels {
            fn visit(&mut self, graph: &Graph<i32, NoLabel>, vertex: VertexId) -> Flow {
                self.0.push(*graph.vertex_label(vertex).unwrap());
                Flow::Continue
            }
            fn post_visit(&mut self, _graph: &Graph<i32, NoLabel>, _vertex: VertexId) -> Flow {
                panic!("有序遍历不调用 post_visit");
            }
        }

        let mut traversal = Traversal::new(&graph, Labels::default());
        traversal.traverse(five, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(traversal.visitor().0, vec![5, 7, 3, 9, 1]);
        assert_eq!(traversal.last_order(), Some(TraversalKind::Ordered));

        let mut reversed = Traversal::new(&graph, Labels::default());
        reversed.traverse(five, |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(reversed.visitor().0, vec![5, 9, 7, 3, 1]);
    }

    #[test]
    fn test_reject_subtree() {
        let (graph, root) = tree();
        let recorder = Recorder {
            reject_subtree: Some("p"),
            ..Recorder::default()
        };
        let mut traversal = Traversal::new(&graph, recorder);
        traversal.depth_first_traverse(root);

        let p = graph.vertices().find(|&v| graph.vertex_label(v) == Some(&"p")).unwrap();
        assert!(traversal.is_marked(p));

        let recorder = traversal.visitor();
        assert_eq!(recorder.visits(), vec!["root", "p", "q", "q1", "r"]);
        assert!(recorder.pres().iter().all(|pre| !pre.starts_with("p>")));
        assert!(!recorder.posts().contains(&"p"));

        // 再次从 p 出发也不会重新访问它
        traversal.continue_traversing(p).unwrap();
        assert_eq!(traversal.visitor().visits().len(), 5);
    }

    #[test]
    fn test_reject_edge() {
        let (graph, root) = tree();
        let recorder = Recorder {
            reject_edge_to: Some("q"),
            ..Recorder::default()
        };
        let mut traversal = Traversal::new(&graph, recorder);
        traversal.breadth_first_traverse(root);

        assert_eq!(
            traversal.visitor().visits(),
            vec!["root", "p", "r", "p1", "p2"]
        );
    }

    #[test]
    fn test_stop() {
        let (graph, root) = tree();
        let recorder = Recorder {
            stop_at: Some("p1"),
            ..Recorder::default()
        };
        let mut traversal = Traversal::new(&graph, recorder);

        assert_eq!(traversal.depth_first_traverse(root), Completion::Stopped);
        assert_eq!(traversal.visitor().visits(), vec!["root", "p", "p1"]);
        assert_eq!(
            traversal.final_vertex().and_then(|v| graph.vertex_label(v)),
            Some(&"p1")
        );
        assert_eq!(traversal.final_edge(), None);

        // 已标记的起点不会再次展开
        assert_eq!(traversal.continue_traversing(root), Ok(Completion::Exhausted));
        assert_eq!(traversal.final_vertex(), None);
        assert_eq!(traversal.visitor().visits().len(), 3);

        let vertices: Vec<VertexId> = graph.vertices().collect();
        for v in vertices {
            assert_eq!(traversal.continue_traversing(v), Ok(Completion::Exhausted));
        }
        assert_eq!(
            traversal.visitor().visits(),
            vec!["root", "p", "p1", "q", "q1", "r", "p2"]
        );
    }

    #[test]
    fn test_stop_in_pre_visit() {
        struct StopOnEdge;
        impl Visitor<&'static str, NoLabel> for StopOnEdge {
            fn pre_visit(&mut self, _: &Graph<&'static str, NoLabel>, _: EdgeId, _: VertexId) -> Flow {
                Flow::Stop
            }
        }

        let (graph, root) = tree();
        let mut traversal = Traversal::new(&graph, StopOnEdge);

        assert!(traversal.breadth_first_traverse(root).is_stopped());
        let edge = traversal.final_edge().unwrap();
        assert_eq!(graph.edge(edge).unwrap().src(), root);
        assert_eq!(traversal.final_vertex(), Some(graph.edge(edge).unwrap().dst()));
        assert_eq!(traversal.marked_count(), 1);
    }

    #[test]
    fn test_pre_visit_once_per_candidate() {
        let (graph, root) = tree();

        // q 同时可从 root 和 p2 到达
        let mut depth_first = Traversal::new(&graph, Recorder::default());
        depth_first.depth_first_traverse(root);
        let pres = depth_first.visitor().pres();
        assert_eq!(pres, vec!["root>p", "root>q", "root>r", "p>p1", "p1>p2", "q>q1"]);
        assert_eq!(pres.iter().filter(|pre| pre.ends_with(">q")).count(), 1);
        assert_eq!(
            depth_first.visitor().visits(),
            vec!["root", "p", "p1", "p2", "q", "q1", "r"]
        );

        let mut breadth_first = Traversal::new(&graph, Recorder::default());
        breadth_first.breadth_first_traverse(root);
        let pres = breadth_first.visitor().pres();
        assert_eq!(pres.iter().filter(|pre| pre.ends_with(">q")).count(), 1);
        assert_eq!(pres.len(), 6);
    }

    #[test]
    fn test_stop_in_post_visit() {
        let (graph, root) = tree();
        let recorder = Recorder {
            stop_after: Some("p2"),
            ..Recorder::default()
        };
        let mut traversal = Traversal::new(&graph, recorder);

        assert_eq!(traversal.depth_first_traverse(root), Completion::Stopped);
        assert_eq!(traversal.visitor().posts(), vec!["q1", "q", "p2"]);
        assert!(!traversal.visitor().visits().contains(&"r"));
        assert_eq!(
            traversal.final_vertex().and_then(|v| graph.vertex_label(v)),
            Some(&"p2")
        );
        assert_eq!(traversal.final_edge(), None);

        let recorder = Recorder {
            stop_after: Some("root"),
            ..Recorder::default()
        };
        let mut traversal = Traversal::new(&graph, recorder);
        assert!(traversal.breadth_first_traverse(root).is_stopped());
        assert_eq!(traversal.visitor().visits(), vec!["root", "p", "q", "r"]);
        assert_eq!(traversal.final_vertex(), Some(root));
    }

    /// 5 - 9, 5 - 7, 9 - 1, 7 - 3
    fn numbers() -> (Graph<i32, NoLabel>, HashMap<i32, VertexId>) {
        let mut graph = Graph::undirected();
        let ids: HashMap<i32, VertexId> =
            [5, 9, 1, 7, 3].into_iter().map(|n| (n, graph.add_vertex(n))).collect();
        for (from, to) in [(5, 9), (5, 7), (9, 1), (7, 3)] {
            graph.add_unlabeled_edge(ids[&from], ids[&to]).unwrap();
        }
        (graph, ids)
    }

    /// 在指定标签上停止的有序遍历访问器
    #[derive(Default)]
    struct StopOn {
        visited: Vec<i32>,
        visit: Option<i32>,
        pre_visit: Option<i32>,
    }

    impl Visitor<i32, NoLabel> for StopOn {
        fn visit(&mut self, graph: &Graph<i32, NoLabel>, vertex: VertexId) -> Flow {
            let label = *graph.vertex_label(vertex).unwrap();
            self.visited.push(label);
            if self.visit == Some(label) {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }

        fn pre_visit(&mut self, graph: &Graph<i32, NoLabel>, _: EdgeId, candidate: VertexId) -> Flow {
            if self.pre_visit == graph.vertex_label(candidate).copied() {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }
    }

    #[test]
    fn test_ordered_stop() {
        let (graph, ids) = numbers();

        let visitor = StopOn {
            visit: Some(3),
            ..StopOn::default()
        };
        let mut traversal = Traversal::new(&graph, visitor);
        assert!(traversal.traverse(ids[&5], |a: &i32, b: &i32| a.cmp(b)).is_stopped());
        assert_eq!(traversal.visitor().visited, vec![5, 7, 3]);
        assert_eq!(traversal.final_vertex(), Some(ids[&3]));
        assert_eq!(traversal.final_edge(), None);

        let visitor = StopOn {
            pre_visit: Some(1),
            ..StopOn::default()
        };
        let mut traversal = Traversal::new(&graph, visitor);
        assert!(traversal.traverse(ids[&5], |a: &i32, b: &i32| a.cmp(b)).is_stopped());
        assert_eq!(traversal.visitor().visited, vec![5, 7, 3, 9]);
        assert_eq!(traversal.final_vertex(), Some(ids[&1]));
        let edge = graph.edge(traversal.final_edge().unwrap()).unwrap();
        assert_eq!((edge.src(), edge.dst()), (ids[&9], ids[&1]));
        assert!(!traversal.is_marked(ids[&1]));
    }

    #[test]
    fn test_continue_traversing_forest() {
        let mut graph: Graph<&'static str, NoLabel> = Graph::undirected();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let c = graph.add_vertex("c");
        let d = graph.add_vertex("d");
        graph.add_vertex("lonely");
        graph.add_unlabeled_edge(a, b).unwrap();
        graph.add_unlabeled_edge(c, d).unwrap();

        let mut traversal = Traversal::new(&graph, Recorder::default());
        assert_eq!(traversal.continue_traversing(a), Err(Error::NoTraversal));

        traversal.depth_first_traverse(a);
        let vertices: Vec<VertexId> = graph.vertices().collect();
        for v in vertices {
            traversal.continue_traversing(v).unwrap();
        }

        assert_eq!(traversal.last_order(), Some(TraversalKind::DepthFirst));
        assert_eq!(traversal.visitor().visits(), vec!["a", "b", "c", "d", "lonely"]);
        assert_eq!(traversal.marked_count(), graph.vertex_count());

        traversal.reset();
        assert_eq!(traversal.marked_count(), 0);
    }

    #[test]
    fn test_missing_seed() {
        let (graph, _) = tree();
        let mut traversal = Traversal::new(&graph, ());

        assert_eq!(
            traversal.depth_first_traverse(VertexId::new(999)),
            Completion::Exhausted
        );
        assert_eq!(traversal.marked_count(), 0);
    }
}
