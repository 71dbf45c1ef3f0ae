use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqError};

/// 重叠图参数。self_overlap 允许 i == j 的自重叠边，仅用于
/// 单序列诊断场景，必须显式开启。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapParams {
    pub min_overlap: usize,
    pub self_overlap: bool,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            min_overlap: 10,
            self_overlap: false,
        }
    }
}

/// 后缀-前缀重叠图：节点下标即输入顺序，每个节点都有邻接表项。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapGraph {
    pub adjacency: BTreeMap<usize, Vec<usize>>,
}

impl OverlapGraph {
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn neighbors(&self, node: usize) -> Option<&[usize]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }
}

/// 对每个有序对 (i, j) 求序列 i 的最长后缀与序列 j 前缀的重叠，
/// 达到 min_overlap 则加边 i -> j。朴素 O(k² · L)，面向交互式规模。
pub fn build_overlap_graph<S: AsRef<[u8]>>(
    seqs: &[S],
    params: OverlapParams,
) -> Result<OverlapGraph> {
    if params.min_overlap == 0 {
        return Err(SeqError::Validation(
            "min overlap must be at least 1".to_string(),
        ));
    }
    if seqs.is_empty() {
        return Err(SeqError::Validation(
            "overlap graph requires at least one sequence".to_string(),
        ));
    }

    let mut adjacency: BTreeMap<usize, Vec<usize>> =
        (0..seqs.len()).map(|i| (i, Vec::new())).collect();

    for (i, a) in seqs.iter().enumerate() {
        for (j, b) in seqs.iter().enumerate() {
            if i == j && !params.self_overlap {
                continue;
            }
            if suffix_prefix_overlap(a.as_ref(), b.as_ref(), params.min_overlap) > 0 {
                adjacency
                    .get_mut(&i)
                    .expect("node entry inserted above")
                    .push(j);
            }
        }
    }

    Ok(OverlapGraph { adjacency })
}

/// 序列 a 的后缀与序列 b 前缀的最长重叠长度，从最长可行长度
/// 向下扫描到 min_len；不足 min_len 记 0。
fn suffix_prefix_overlap(a: &[u8], b: &[u8], min_len: usize) -> usize {
    let max_overlap = a.len().min(b.len());
    for len in (min_len..=max_overlap).rev() {
        if a[a.len() - len..] == b[..len] {
            return len;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_suffix_prefix_edge() {
        let graph =
            build_overlap_graph(&[b"ATCGA", b"CGATT", b"TTGGG"], OverlapParams {
                min_overlap: 3,
                self_overlap: false,
            })
            .unwrap();

        // "ATCGA" 的后缀 "CGA" = "CGATT" 的前缀
        assert_eq!(graph.neighbors(0), Some(&[1][..]));
        assert_eq!(graph.neighbors(1), Some(&[][..]));
        assert_eq!(graph.neighbors(2), Some(&[][..]));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn no_overlaps_yields_empty_lists() {
        let graph = build_overlap_graph(&[b"AAAA", b"TTTT", b"CCCC"], OverlapParams {
            min_overlap: 2,
            self_overlap: false,
        })
        .unwrap();
        for (_, neighbors) in &graph.adjacency {
            assert!(neighbors.is_empty());
        }
    }

    #[test]
    fn single_sequence_default_mode() {
        let graph = build_overlap_graph(&[b"ATCGA"], OverlapParams {
            min_overlap: 1,
            self_overlap: false,
        })
        .unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbors(0), Some(&[][..]));
    }

    #[test]
    fn self_overlap_is_opt_in() {
        // "ATA" 的后缀 "A" 与自身前缀 "A" 重叠
        let params = OverlapParams {
            min_overlap: 1,
            self_overlap: true,
        };
        let graph = build_overlap_graph(&[b"ATA"], params).unwrap();
        assert_eq!(graph.neighbors(0), Some(&[0][..]));
    }

    #[test]
    fn longest_overlap_wins() {
        assert_eq!(suffix_prefix_overlap(b"TCGATCGA", b"TCGATTTT", 3), 4);
        assert_eq!(suffix_prefix_overlap(b"ATCGA", b"CGATT", 3), 3);
        assert_eq!(suffix_prefix_overlap(b"ATCGA", b"TTTTT", 3), 0);
    }

    #[test]
    fn validation_errors() {
        let empty: &[&[u8]] = &[];
        assert!(matches!(
            build_overlap_graph(empty, OverlapParams::default()),
            Err(SeqError::Validation(_))
        ));
        assert!(matches!(
            build_overlap_graph(&[b"ACGT"], OverlapParams {
                min_overlap: 0,
                self_overlap: false,
            }),
            Err(SeqError::Validation(_))
        ));
    }

    #[test]
    fn ordered_pairs_are_directional() {
        let params = OverlapParams {
            min_overlap: 2,
            self_overlap: false,
        };
        let graph = build_overlap_graph(&[b"GATCC", b"CCGGA", b"TTGAT"], params).unwrap();
        // 0 -> 1: 后缀 "CC" = 前缀 "CC"；1 -> 0: "GA"；2 -> 0: "GAT"
        assert_eq!(graph.neighbors(0), Some(&[1][..]));
        assert_eq!(graph.neighbors(1), Some(&[0][..]));
        assert_eq!(graph.neighbors(2), Some(&[0][..]));
    }
}
