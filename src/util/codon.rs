use crate::error::{Result, SeqError};

/// 标准密码子表，按 A/C/G/T = 0/1/2/3 编码展平：
/// 下标 = base1 * 16 + base2 * 4 + base3，终止密码子为 '*'。
pub const AMINO_ACIDS: &[u8; 64] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

#[inline]
fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// 按指定阅读框翻译为氨基酸序列。
/// frame ∈ {0,1,2}；末尾不足 3 个碱基的部分丢弃；未知密码子记为 'X'。
pub fn translate(seq: &[u8], frame: usize) -> Result<String> {
    if frame > 2 {
        return Err(SeqError::Validation(format!(
            "frame must be 0, 1 or 2, got {frame}"
        )));
    }
    if seq.len() <= frame {
        return Ok(String::new());
    }

    let coding = &seq[frame..];
    let mut protein = String::with_capacity(coding.len() / 3);
    for codon in coding.chunks_exact(3) {
        let aa = match (
            base_index(codon[0]),
            base_index(codon[1]),
            base_index(codon[2]),
        ) {
            (Some(b1), Some(b2), Some(b3)) => AMINO_ACIDS[b1 * 16 + b2 * 4 + b3],
            _ => b'X',
        };
        protein.push(aa as char);
    }
    Ok(protein)
}
