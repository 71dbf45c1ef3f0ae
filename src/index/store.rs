use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::sa;
use crate::io::fasta::FastaRecord;
use crate::util::dna;

/// 索引构建信息（来源文件、命令行、时间戳）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexMeta {
    pub source_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 单条记录的后缀数组索引
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordIndex {
    pub name: String,
    pub seq: Vec<u8>,
    pub sa: Vec<u32>,
}

/// 整个 FASTA 文件的后缀数组索引：建一次，多次查询。
/// 属于调用方的结果缓存，算法核心本身不落盘。
#[derive(Debug, Serialize, Deserialize)]
pub struct SuffixIndex {
    pub records: Vec<RecordIndex>,
    pub meta: Option<IndexMeta>,
}

impl SuffixIndex {
    /// 对每条记录规范化后分别建后缀数组。
    pub fn build(records: &[FastaRecord]) -> Self {
        let records = records
            .iter()
            .map(|rec| {
                let seq = dna::normalize_seq(&rec.seq);
                let sa = sa::build_sa(&seq);
                RecordIndex {
                    name: rec.id.clone(),
                    seq,
                    sa,
                }
            })
            .collect();
        Self {
            records,
            meta: None,
        }
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = Some(meta);
    }

    /// 每条记录中 pattern 的出现位置（升序），按记录下标返回。
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<(usize, Vec<usize>)>> {
        let pattern = dna::normalize_seq(pattern);
        let mut hits = Vec::new();
        for (i, rec) in self.records.iter().enumerate() {
            let positions = sa::locate(&rec.seq, &rec.sa, &pattern)?;
            hits.push((i, positions));
        }
        Ok(hits)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut f = std::fs::File::create(path)?;
        bincode::serialize_into(&mut f, self)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let idx: Self = bincode::deserialize_from(f)?;
        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, seq: &[u8]) -> FastaRecord {
        FastaRecord {
            id: id.to_string(),
            desc: None,
            seq: seq.to_vec(),
        }
    }

    #[test]
    fn build_and_locate() {
        let idx = SuffixIndex::build(&[
            record("r1", b"GCATCGCAGAGAGTATACAGTACG"),
            record("r2", b"AAAAA"),
        ]);
        let hits = idx.locate(b"GCAGAGAG").unwrap();
        assert_eq!(hits[0], (0, vec![5]));
        assert_eq!(hits[1], (1, vec![]));

        let hits = idx.locate(b"AA").unwrap();
        assert_eq!(hits[1], (1, vec![0, 1, 2, 3]));
    }

    #[test]
    fn serialized_roundtrip_preserves_locate() {
        let mut idx = SuffixIndex::build(&[record("r1", b"ACGTACGTACGT")]);
        idx.set_meta(IndexMeta {
            source_file: Some("reads.fa".to_string()),
            build_args: None,
            build_timestamp: None,
        });

        let bytes = bincode::serialize(&idx).unwrap();
        let loaded: SuffixIndex = bincode::deserialize(&bytes).unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(
            loaded.meta.as_ref().unwrap().source_file.as_deref(),
            Some("reads.fa")
        );
        assert_eq!(
            loaded.locate(b"ACGT").unwrap(),
            idx.locate(b"ACGT").unwrap()
        );
    }

    #[test]
    fn lowercase_queries_are_normalized() {
        let idx = SuffixIndex::build(&[record("r1", b"acgtACGT")]);
        let hits = idx.locate(b"acgt").unwrap();
        assert_eq!(hits[0].1, vec![0, 4]);
    }
}
