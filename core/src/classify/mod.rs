pub mod verdict;

pub use verdict::{classify, ClusterReport, SlaveReport, Verdict};
