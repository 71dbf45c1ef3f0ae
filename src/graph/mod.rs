pub mod overlap;

pub use overlap::{build_overlap_graph, OverlapGraph, OverlapParams};
