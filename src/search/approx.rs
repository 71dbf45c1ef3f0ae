use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqError};

use super::{MatchAlgorithm, MatchSet};

/// 近似匹配的距离模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMode {
    Hamming,
    Edit,
}

/// 等长字符串的 Hamming 距离；长度不一致为参数错误。
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(SeqError::Validation(format!(
            "hamming distance requires equal lengths, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// 两行复用的 Levenshtein 编辑距离。
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];
    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// 有界近似搜索：报告所有与 pattern 距离 ≤ max_dist 的起始位置。
///
/// Hamming 模式逐起点计数、超限即止；Edit 模式对每个起点跑一次
/// pattern × 最长可行窗口的 DP，末行一次性给出全部窗口长度的距离，
/// 行最小值超过 max_dist 时提前剪枝。
pub fn find_approx(
    text: &[u8],
    pattern: &[u8],
    max_dist: i32,
    mode: DistanceMode,
) -> Result<MatchSet> {
    if pattern.is_empty() {
        return Err(SeqError::Validation("pattern must not be empty".to_string()));
    }
    if max_dist < 0 {
        return Err(SeqError::Validation(format!(
            "max distance must be non-negative, got {max_dist}"
        )));
    }

    let k = max_dist as usize;
    let positions = match mode {
        DistanceMode::Hamming => hamming_starts(text, pattern, k),
        DistanceMode::Edit => edit_starts(text, pattern, k),
    };

    Ok(MatchSet {
        algorithm: match mode {
            DistanceMode::Hamming => MatchAlgorithm::Hamming,
            DistanceMode::Edit => MatchAlgorithm::Edit,
        },
        positions,
    })
}

fn hamming_starts(text: &[u8], pattern: &[u8], k: usize) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut positions = Vec::new();
    if m > n {
        return positions;
    }

    for p in 0..=n - m {
        let mut mismatches = 0usize;
        let mut ok = true;
        for (a, b) in pattern.iter().zip(&text[p..p + m]) {
            if a != b {
                mismatches += 1;
                if mismatches > k {
                    ok = false;
                    break;
                }
            }
        }
        if ok {
            positions.push(p);
        }
    }
    positions
}

fn edit_starts(text: &[u8], pattern: &[u8], k: usize) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut positions = Vec::new();
    if m > n {
        return positions;
    }

    let wmin = if m > k { m - k } else { 1 };
    let mut prev: Vec<usize> = Vec::new();
    let mut curr: Vec<usize> = Vec::new();

    for p in 0..=n - m {
        let wmax = (m + k).min(n - p);
        let window = &text[p..p + wmax];

        prev.clear();
        prev.extend(0..=wmax);
        curr.clear();
        curr.resize(wmax + 1, 0);

        let mut pruned = false;
        for i in 1..=m {
            curr[0] = i;
            let mut row_min = i;
            for j in 1..=wmax {
                let cost = usize::from(pattern[i - 1] != window[j - 1]);
                curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
                row_min = row_min.min(curr[j]);
            }
            if row_min > k {
                pruned = true;
                break;
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        if pruned {
            continue;
        }

        // prev 此时为末行：prev[w] = pattern 与 window[..w] 的编辑距离
        if (wmin..=wmax).any(|w| prev[w] <= k) {
            positions.push(p);
        }
    }
    positions
}
