//! 边定义
//!
//! 边保存有序端点对 (src, dst)。有向图中方向为 src -> dst；
//! 无向图中端点对在邻接、度数和包含查询里是对称的，但保留存储顺序供查看。

use crate::error::{Error, Result};
use crate::graph::vertex::VertexId;
use std::fmt;

/// 边 ID（图内唯一，不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边
#[derive(Debug, Clone)]
pub struct Edge<EL> {
    /// 边 ID
    id: EdgeId,
    /// 边标签
    label: EL,
    /// 源顶点 ID
    src: VertexId,
    /// 目标顶点 ID
    dst: VertexId,
}

impl<EL> Edge<EL> {
    /// 创建新边，只能由图调用
    pub(crate) fn new(id: EdgeId, label: EL, src: VertexId, dst: VertexId) -> Self {
        Self {
            id,
            label,
            src,
            dst,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取边标签
    pub fn label(&self) -> &EL {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut EL {
        &mut self.label
    }

    pub(crate) fn replace_label(&mut self, label: EL) -> EL {
        std::mem::replace(&mut self.label, label)
    }

    pub(crate) fn into_label(self) -> EL {
        self.label
    }

    /// 获取源顶点 ID（无向图中只是其中一个端点）
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID（无向图中是另一个端点）
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 返回相对于 `vertex` 的另一端
    pub fn other(&self, vertex: VertexId) -> Result<VertexId> {
        if vertex == self.src {
            Ok(self.dst)
        } else if vertex == self.dst {
            Ok(self.src)
        } else {
            Err(Error::NotIncident {
                vertex,
                edge: self.id,
            })
        }
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }

    /// 是否与 `vertex` 相连
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.src == vertex || self.dst == vertex
    }

    /// 是否为 `vertex` 的出边
    pub(crate) fn leaves(&self, vertex: VertexId, directed: bool) -> bool {
        self.src == vertex || (!directed && self.dst == vertex)
    }

    /// 是否为 `vertex` 的入边
    pub(crate) fn enters(&self, vertex: VertexId, directed: bool) -> bool {
        self.dst == vertex || (!directed && self.src == vertex)
    }

    /// 是否连接 `from` 与 `to`，有向图只认 from -> to
    pub(crate) fn connects(&self, from: VertexId, to: VertexId, directed: bool) -> bool {
        (self.src == from && self.dst == to) || (!directed && self.src == to && self.dst == from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(src: u64, dst: u64) -> Edge<f64> {
        Edge::new(EdgeId::new(1), 2.5, VertexId::new(src), VertexId::new(dst))
    }

    #[test]
    fn test_edge_other_end() {
        let e = edge(100, 200);

        assert_eq!(e.other(VertexId::new(100)), Ok(VertexId::new(200)));
        assert_eq!(e.other(VertexId::new(200)), Ok(VertexId::new(100)));
        assert_eq!(
            e.other(VertexId::new(300)),
            Err(Error::NotIncident {
                vertex: VertexId::new(300),
                edge: EdgeId::new(1),
            })
        );
    }

    #[test]
    fn test_edge_orientation() {
        let e = edge(1, 2);
        let (a, b) = (VertexId::new(1), VertexId::new(2));

        assert!(e.connects(a, b, true));
        assert!(!e.connects(b, a, true));
        assert!(e.connects(b, a, false));

        assert!(e.leaves(a, true));
        assert!(!e.leaves(b, true));
        assert!(e.leaves(b, false));
        assert!(e.enters(b, true));
        assert!(e.enters(a, false));
        assert!(!e.is_self_loop());
        assert!(edge(3, 3).is_self_loop());
    }
}
