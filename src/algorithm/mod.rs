//! 图算法模块
//!
//! 包含通用遍历、权重能力接口和 A* 最短路径

mod shortest_path;
mod traversal;
mod weight;

pub use shortest_path::{
    dijkstra, shortest_path, shortest_path_self_weighted, AStar, Accessors, CostStrategy, PathResult,
    SelfWeighted,
};
pub use traversal::{Completion, Flow, Traversal, TraversalKind, Visitor};
pub use weight::{
    CostTable, Distancer, Weightable, Weighted, Weighter, Weighting, ZeroDistancer, ZERO_DISTANCER,
};
