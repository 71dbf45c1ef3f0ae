pub mod sa;
pub mod store;

pub use store::{IndexMeta, RecordIndex, SuffixIndex};
