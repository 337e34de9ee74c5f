//! Summary statistics for GFF annotation files.
//!
//! This crate turns a stream of [gffstats_core::Feature] records into a
//! [FeatureStatistics] value:
//!
//! - Total number of features
//! - Feature count per type
//! - Mean feature length per type (one decimal place)
//! - Strand distribution
//!
//! # Example
//!
//! ```no_run
//! use gffstats_summary::{JsonWrite, SummaryOptions, summarize_file};
//!
//! let stats = summarize_file("annotation.gff", &SummaryOptions::with_filter_type("CDS")).unwrap();
//! stats.write_json("out/stats.json").unwrap();
//! ```

pub mod errors;
pub mod models;
pub mod statistics;
pub mod utils;
pub mod writer;

// re-exports
pub use errors::SummaryError;
pub use models::{FeatureStatistics, SummaryOptions};
pub use statistics::{FeatureSetStatistics, FeatureStatisticsBuilder, summarize, summarize_file};
pub use writer::JsonWrite;
