//! 权重与距离估计
//!
//! 最短路径求解器读取的能力接口：边权、顶点累计代价和启发式距离。

use std::collections::HashMap;
use std::hash::Hash;

/// 读取某类对象的权重
pub trait Weighting<T> {
    fn weight(&self, item: &T) -> f64;
}

/// 可读写某类对象的权重
pub trait Weighter<T>: Weighting<T> {
    fn set_weight(&mut self, item: &T, weight: f64);
}

/// 自带权重的对象
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// 自带且可修改权重的对象
pub trait Weightable: Weighted {
    fn set_weight(&mut self, weight: f64);
}

/// 两个对象之间的距离估计（A* 的启发函数）
pub trait Distancer<T> {
    fn dist(&self, from: &T, to: &T) -> f64;
}

impl<T, F> Weighting<T> for F
where
    F: Fn(&T) -> f64,
{
    fn weight(&self, item: &T) -> f64 {
        self(item)
    }
}

impl<T, F> Distancer<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    fn dist(&self, from: &T, to: &T) -> f64 {
        self(from, to)
    }
}

impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

impl Weightable for f64 {
    fn set_weight(&mut self, weight: f64) {
        *self = weight;
    }
}

/// 恒为 0 的距离估计，A* 退化为 Dijkstra
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroDistancer;

impl<T> Distancer<T> for ZeroDistancer {
    fn dist(&self, _from: &T, _to: &T) -> f64 {
        0.0
    }
}

pub const ZERO_DISTANCER: ZeroDistancer = ZeroDistancer;

/// 以键保存权重的表；未登记的键权重为正无穷
#[derive(Debug, Clone)]
pub struct CostTable<K> {
    weights: HashMap<K, f64>,
}

impl<K: Hash + Eq + Clone> CostTable<K> {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// 获取已登记的权重
    pub fn get(&self, key: &K) -> Option<f64> {
        self.weights.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.weights.iter().map(|(k, w)| (k, *w))
    }
}

impl<K: Hash + Eq + Clone> Default for CostTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> Weighting<K> for CostTable<K> {
    fn weight(&self, item: &K) -> f64 {
        self.get(item).unwrap_or(f64::INFINITY)
    }
}

impl<K: Hash + Eq + Clone> Weighter<K> for CostTable<K> {
    fn set_weight(&mut self, item: &K, weight: f64) {
        self.weights.insert(item.clone(), weight);
    }
}
