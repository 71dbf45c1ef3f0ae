//! 模式搜索：精确匹配（Boyer-Moore 两种位移策略）与近似匹配（Hamming / 编辑距离）。

use serde::{Deserialize, Serialize};

pub mod approx;
pub mod boyer_moore;

pub use approx::{edit_distance, find_approx, hamming_distance, DistanceMode};
pub use boyer_moore::{search_bad_char, search_good_suffix};

/// 产生匹配集的算法标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAlgorithm {
    BadChar,
    GoodSuffix,
    Hamming,
    Edit,
}

/// 升序、去重的 0-based 匹配起始位置集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    pub algorithm: MatchAlgorithm,
    pub positions: Vec<usize>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
