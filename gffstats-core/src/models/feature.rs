///
/// Feature struct, representation of one data line in a GFF file
///
/// Coordinates are 1-based and inclusive. Nothing guarantees `end >= start`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Feature {
    pub sequence_name: String,
    pub source: String,
    pub feature_type: String,
    pub start: i64,
    pub end: i64,
    pub score: String,
    pub strand: String,
    pub frame: String,
    pub attributes: String,
}

impl Feature {
    ///
    /// Get the inclusive length of the feature
    ///
    pub fn length(&self) -> i128 {
        feature_length(self.start, self.end)
    }
}

/// Length of a feature in 1-based inclusive coordinates: `end - start + 1`.
///
/// Computed in `i128`, so every pair of `i64` coordinates has an exact length.
/// Malformed coordinates (`end < start`) give zero or a negative length.
pub fn feature_length(start: i64, end: i64) -> i128 {
    end as i128 - start as i128 + 1
}
