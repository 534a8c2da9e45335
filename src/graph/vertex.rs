//! 顶点定义
//!
//! 顶点只携带一个由调用方决定类型的标签，结构字段由所属的图维护

use std::fmt;

/// 顶点 ID（图内唯一，不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<VL> {
    /// 顶点 ID
    id: VertexId,
    /// 顶点标签
    label: VL,
}

impl<VL> Vertex<VL> {
    /// 创建新顶点，只能由图调用
    pub(crate) fn new(id: VertexId, label: VL) -> Self {
        Self { id, label }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点标签
    pub fn label(&self) -> &VL {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut VL {
        &mut self.label
    }

    /// 覆盖标签，返回旧标签
    pub(crate) fn replace_label(&mut self, label: VL) -> VL {
        std::mem::replace(&mut self.label, label)
    }

    pub(crate) fn into_label(self) -> VL {
        self.label
    }
}

impl<VL: fmt::Display> fmt::Display for Vertex<VL> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
