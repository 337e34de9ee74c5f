use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of the features retained from one annotation file.
///
/// Every map only holds keys that were observed, so an empty input gives
/// three empty maps. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatistics {
    /// Number of retained features
    pub total_features: usize,
    /// Feature count per feature type
    pub by_type: BTreeMap<String, usize>,
    /// Mean inclusive length per feature type, rounded to one decimal place
    pub avg_length: BTreeMap<String, f64>,
    /// Feature count per strand value, taken verbatim from the file
    pub strand_distribution: BTreeMap<String, usize>,
}

/// Options for a single summary run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Only features whose type equals this value are counted.
    pub filter_type: Option<String>,
}

impl SummaryOptions {
    pub fn with_filter_type<S: Into<String>>(filter_type: S) -> Self {
        SummaryOptions {
            filter_type: Some(filter_type.into()),
        }
    }
}
