//! 统一错误类型：参数校验、FASTA 格式、内部不变量三类，
//! 外加文件 / 序列化边界的透传错误。

use thiserror::Error;

/// Result type for all library operations
pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Debug, Error)]
pub enum SeqError {
    /// Rejected before any work starts (empty pattern, bad distance, bad frame, ...)
    #[error("invalid parameter: {0}")]
    Validation(String),

    /// Malformed FASTA input (headerless leading content, zero records)
    #[error("FASTA format error: {0}")]
    Format(String),

    /// Internal invariant violation; never expected in correct operation
    #[error("algorithm invariant violated: {0}")]
    Algorithm(String),

    /// IO error while reading input files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Index (de)serialization failure
    #[error("index serialization error: {0}")]
    Index(#[from] bincode::Error),
}
