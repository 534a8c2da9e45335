//! 通用类型定义

use std::fmt;

/// 图的种类，创建后不可更改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphKind {
    /// 有向图：边从 src 指向 dst
    #[default]
    Directed,
    /// 无向图：出边与入边相同
    Undirected,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// 不带标签的边（或顶点）使用的占位标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NoLabel;

impl fmt::Display for NoLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-")
    }
}
