pub mod metrics;

pub use metrics::{build_report, max_manhattan, FusionReport};
