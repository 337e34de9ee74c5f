//! Feature statistics for GFF annotation files
//!
//! Counts, mean lengths and strand distribution are computed in a single
//! fold over the feature stream. Nothing but per-type and per-strand tallies
//! is kept in memory, so files are never buffered whole.
//!

use std::path::Path;

use fxhash::FxHashMap;
use log::{debug, info};

use gffstats_core::{Feature, FeatureReader, GffError};

use crate::errors::SummaryError;
use crate::models::{FeatureStatistics, SummaryOptions};
use crate::utils::rounded_mean;

/// Trait for computing [FeatureStatistics] over an in-memory set of features.
pub trait FeatureSetStatistics {
    /// Summarize the features, keeping only those of `filter_type` when given.
    ///
    /// The filter applies before anything is counted, `total_features`
    /// included.
    fn feature_statistics(&self, filter_type: Option<&str>) -> FeatureStatistics;

    /// Summarize every feature.
    fn all_feature_statistics(&self) -> FeatureStatistics {
        self.feature_statistics(None)
    }
}

impl FeatureSetStatistics for [Feature] {
    fn feature_statistics(&self, filter_type: Option<&str>) -> FeatureStatistics {
        let mut builder =
            FeatureStatisticsBuilder::new().with_filter_type(filter_type.map(String::from));
        for feature in self {
            builder.push(feature.clone());
        }
        builder.build()
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TypeTally {
    count: usize,
    length_sum: i128,
}

///
/// Accumulator for [FeatureStatistics].
///
/// Push features one at a time, then call [FeatureStatisticsBuilder::build].
/// The order features arrive in has no effect on the result.
///
#[derive(Debug, Default)]
pub struct FeatureStatisticsBuilder {
    filter_type: Option<String>,
    total_features: usize,
    by_type: FxHashMap<String, TypeTally>,
    strands: FxHashMap<String, usize>,
}

impl FeatureStatisticsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_type(mut self, filter_type: Option<String>) -> Self {
        self.filter_type = filter_type;
        self
    }

    /// Whether `feature` passes the type filter.
    pub fn accepts(&self, feature: &Feature) -> bool {
        match &self.filter_type {
            Some(filter_type) => feature.feature_type == *filter_type,
            None => true,
        }
    }

    /// Add one feature. Features the filter rejects are dropped.
    pub fn push(&mut self, feature: Feature) {
        if !self.accepts(&feature) {
            return;
        }

        let length = feature.length();
        let tally = self.by_type.entry(feature.feature_type).or_default();
        tally.count += 1;
        tally.length_sum += length;

        *self.strands.entry(feature.strand).or_insert(0) += 1;
        self.total_features += 1;
    }

    pub fn build(self) -> FeatureStatistics {
        let mut stats = FeatureStatistics {
            total_features: self.total_features,
            ..Default::default()
        };

        for (feature_type, tally) in self.by_type {
            // a type is only present once it has been counted, so the mean exists
            if let Some(mean) = rounded_mean(tally.length_sum, tally.count) {
                stats.avg_length.insert(feature_type.clone(), mean);
            }
            stats.by_type.insert(feature_type, tally.count);
        }
        stats.strand_distribution.extend(self.strands);

        stats
    }
}

///
/// Summarize a stream of parsed features.
///
/// The first error in the stream aborts the run and is returned as is. No
/// partial statistics are produced.
///
/// # Arguments
/// - features: parse results, typically a [FeatureReader]
/// - options: run options (type filter)
pub fn summarize<I>(features: I, options: &SummaryOptions) -> Result<FeatureStatistics, GffError>
where
    I: IntoIterator<Item = Result<Feature, GffError>>,
{
    let mut builder = FeatureStatisticsBuilder::new().with_filter_type(options.filter_type.clone());
    for feature in features {
        builder.push(feature?);
    }
    Ok(builder.build())
}

///
/// Summarize a GFF file on disk.
///
/// A missing file fails with [GffError::FileNotFound] before anything is
/// read. The file is closed on return, including on error.
///
/// # Arguments
/// - path: path to the GFF file
/// - options: run options (type filter)
pub fn summarize_file<P: AsRef<Path>>(
    path: P,
    options: &SummaryOptions,
) -> Result<FeatureStatistics, SummaryError> {
    let path = path.as_ref();
    let mut reader = FeatureReader::from_path(path)?;

    let stats = summarize(reader.by_ref(), options)?;

    debug!("{}: {} lines read", path.display(), reader.lines_read());
    info!(
        "Summarized {} features across {} types from {}",
        stats.total_features,
        stats.by_type.len(),
        path.display()
    );

    Ok(stats)
}
