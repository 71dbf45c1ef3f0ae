use crate::error::{Result, SeqError};

use super::{MatchAlgorithm, MatchSet};

/// 坏字符规则搜索。
/// 预处理 pattern[..m-1] 的最后出现位置表（未出现的字节为 -1），
/// 失配时按 max(1, j - last[text[s+j]]) 右移；完全匹配后按下一个
/// 文本字符对齐继续，重叠出现全部报告。
pub fn search_bad_char(text: &[u8], pattern: &[u8]) -> Result<MatchSet> {
    validate_pattern(pattern)?;

    let n = text.len();
    let m = pattern.len();
    let mut positions = Vec::new();

    if m <= n {
        let last = last_occurrence(pattern);
        let mut s = 0usize;
        while s + m <= n {
            let mut j = m as i64 - 1;
            while j >= 0 && pattern[j as usize] == text[s + j as usize] {
                j -= 1;
            }
            if j < 0 {
                positions.push(s);
                s += if s + m < n {
                    (m as i64 - last[text[s + m] as usize] - 1).max(1) as usize
                } else {
                    1
                };
            } else {
                s += (j - last[text[s + j as usize] as usize]).max(1) as usize;
            }
        }
    }

    Ok(MatchSet {
        algorithm: MatchAlgorithm::BadChar,
        positions,
    })
}

/// 好后缀规则搜索。
/// 预处理 border/shift 表，失配时取坏字符与好后缀位移的较大者，
/// 完全匹配后按 shift[0]（模式周期）右移。结果与坏字符版本一致。
pub fn search_good_suffix(text: &[u8], pattern: &[u8]) -> Result<MatchSet> {
    validate_pattern(pattern)?;

    let n = text.len();
    let m = pattern.len();
    let mut positions = Vec::new();

    if m <= n {
        let last = last_occurrence(pattern);
        let shift = good_suffix_shift(pattern);
        let mut s = 0usize;
        while s + m <= n {
            let mut j = m as i64 - 1;
            while j >= 0 && pattern[j as usize] == text[s + j as usize] {
                j -= 1;
            }
            if j < 0 {
                positions.push(s);
                s += shift[0];
            } else {
                let bad = j - last[text[s + j as usize] as usize];
                let good = shift[(j + 1) as usize] as i64;
                s += bad.max(good) as usize;
            }
        }
    }

    Ok(MatchSet {
        algorithm: MatchAlgorithm::GoodSuffix,
        positions,
    })
}

fn validate_pattern(pattern: &[u8]) -> Result<()> {
    if pattern.is_empty() {
        return Err(SeqError::Validation("pattern must not be empty".to_string()));
    }
    Ok(())
}

/// 最后出现位置表：只统计 pattern[..m-1]，末位字符不参与。
fn last_occurrence(pattern: &[u8]) -> [i64; 256] {
    let mut last = [-1i64; 256];
    for (i, &b) in pattern[..pattern.len() - 1].iter().enumerate() {
        last[b as usize] = i as i64;
    }
    last
}

/// 好后缀位移表（长度 m+1）。
/// border[i] 为 pattern[i..] 的最宽边界起点；两趟扫描先填充
/// 失配后缀对应的位移，再用全串边界补齐剩余项。
fn good_suffix_shift(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut border = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    j = border[0];
    for (i, entry) in shift.iter_mut().enumerate() {
        if *entry == 0 {
            *entry = j;
        }
        if i == j {
            j = border[j];
        }
    }

    shift
}
