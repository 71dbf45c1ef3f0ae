use crate::error::{Result, SeqError};

/// 构建后缀数组（基于倍增法，O(n log n) 排序）。
/// 直接作用于原始字节文本，不要求结尾哨兵；空文本返回空数组。
pub fn build_sa(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = text.iter().map(|&b| b as i64).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    while k < n {
        sa.sort_unstable_by(|&i, &j| {
            let r1 = rank[i];
            let r2 = rank[j];
            if r1 != r2 {
                return r1.cmp(&r2);
            }
            let r1n = if i + k < n { rank[i + k] } else { -1 };
            let r2n = if j + k < n { rank[j + k] } else { -1 };
            r1n.cmp(&r2n)
        });

        tmp[sa[0]] = 0;
        for i in 1..n {
            let a = sa[i - 1];
            let b = sa[i];
            let prev = (rank[a], if a + k < n { rank[a + k] } else { -1 });
            let curr = (rank[b], if b + k < n { rank[b + k] } else { -1 });
            tmp[b] = tmp[a] + i64::from(curr != prev);
        }

        // 复制回 rank
        rank.copy_from_slice(&tmp);
        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k <<= 1;
    }

    sa.into_iter().map(|x| x as u32).collect()
}

/// 逆后缀数组：isa[sa[i]] = i。
/// 输入必须是 0..n 的排列，否则视为内部不变量被破坏。
pub fn inverse_sa(sa: &[u32]) -> Result<Vec<u32>> {
    let n = sa.len();
    let mut isa = vec![u32::MAX; n];
    for (i, &p) in sa.iter().enumerate() {
        let p = p as usize;
        if p >= n {
            return Err(SeqError::Algorithm(format!(
                "suffix array entry {p} out of range for length {n}"
            )));
        }
        if isa[p] != u32::MAX {
            return Err(SeqError::Algorithm(format!(
                "suffix array entry {p} duplicated; not a permutation"
            )));
        }
        isa[p] = i as u32;
    }
    Ok(isa)
}

/// 在已建好的后缀数组上二分定位 pattern 的全部出现位置（升序）。
pub fn locate(text: &[u8], sa: &[u32], pattern: &[u8]) -> Result<Vec<usize>> {
    if pattern.is_empty() {
        return Err(SeqError::Validation("pattern must not be empty".to_string()));
    }
    let m = pattern.len();

    let lower = sa.partition_point(|&i| &text[i as usize..] < pattern);
    let upper = sa.partition_point(|&i| {
        let suffix = &text[i as usize..];
        let head = &suffix[..m.min(suffix.len())];
        head <= pattern
    });

    let mut positions: Vec<usize> = sa[lower..upper].iter().map(|&i| i as usize).collect();
    positions.sort_unstable();
    Ok(positions)
}
