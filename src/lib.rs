//! GraphKit - 内存中的带标签图与图算法
//!
//! 提供：
//! - 有向/无向、顶点与边均可带任意标签的图
//! - 可插拔顺序的遍历引擎（有序、深度优先、广度优先），通过钩子控制
//! - A* / Dijkstra 最短路径，代价读写方式可替换

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{AStar, Flow, PathResult, Traversal, Visitor};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use types::{GraphKind, NoLabel};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
