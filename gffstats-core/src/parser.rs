//! Line parser for GFF-like annotation files.
//!
//! A raw line has three possible outcomes: a [Feature] record, a skipped line
//! (blank, comment, or fewer than [MIN_GFF_FIELDS] columns), or a fatal
//! [GffError::InvalidCoordinate] when a coordinate column is not an integer.

use crate::errors::GffError;
use crate::models::Feature;

/// Minimum number of tab-separated columns a data line must have.
pub const MIN_GFF_FIELDS: usize = 8;

/// Outcome of parsing one line that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Record(Feature),
    Skipped,
}

///
/// Parse a single GFF line into a [Feature].
///
/// The line is trimmed first. Blank lines, lines starting with `#` and lines
/// with fewer than [MIN_GFF_FIELDS] tab-separated columns are skipped.
/// Columns 4 and 5 must be integers; anything else is an error for the caller
/// to propagate. No other column is validated.
///
/// # Arguments
/// - line: one raw line of the file, with or without its line terminator
///
pub fn parse_feature_line(line: &str) -> Result<ParsedLine, GffError> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(ParsedLine::Skipped);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_GFF_FIELDS {
        return Ok(ParsedLine::Skipped);
    }

    let start = parse_coordinate(fields[3], "start")?;
    let end = parse_coordinate(fields[4], "end")?;

    Ok(ParsedLine::Record(Feature {
        sequence_name: fields[0].to_string(),
        source: fields[1].to_string(),
        feature_type: fields[2].to_string(),
        start,
        end,
        score: fields[5].to_string(),
        strand: fields[6].to_string(),
        frame: fields[7].to_string(),
        attributes: fields.get(8).map_or(String::new(), |s| s.to_string()),
    }))
}

// spaces around the digits are tolerated, a sign is allowed; values outside
// the i64 range and `_` digit separators are rejected
fn parse_coordinate(value: &str, field: &'static str) -> Result<i64, GffError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| GffError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn expect_feature(line: &str) -> Feature {
        match parse_feature_line(line).unwrap() {
            ParsedLine::Record(feature) => feature,
            ParsedLine::Skipped => panic!("line should produce a record: {line:?}"),
        }
    }

    #[rstest]
    fn test_parse_valid_line() {
        let feature = expect_feature("NC_000908.2\tRefSeq\tgene\t1\t107\t.\t+\t.\tID=gene-MG_0001");

        assert_eq!(
            feature,
            Feature {
                sequence_name: "NC_000908.2".to_string(),
                source: "RefSeq".to_string(),
                feature_type: "gene".to_string(),
                start: 1,
                end: 107,
                score: ".".to_string(),
                strand: "+".to_string(),
                frame: ".".to_string(),
                attributes: "ID=gene-MG_0001".to_string(),
            }
        );
    }

    #[rstest]
    fn test_parse_line_without_attributes() {
        let feature = expect_feature("chr1\tsrc\texon\t10\t20\t0.5\t-\t2");
        assert_eq!(feature.attributes, "");
        assert_eq!(feature.score, "0.5");
        assert_eq!(feature.frame, "2");
    }

    #[rstest]
    fn test_parse_line_ignores_columns_past_attributes() {
        let feature = expect_feature("chr1\tsrc\texon\t10\t20\t.\t-\t.\tID=a\textra");
        assert_eq!(feature.attributes, "ID=a");
    }

    #[rstest]
    fn test_parse_line_with_surrounding_whitespace() {
        let feature =
            expect_feature("  NC_000908.2\tRefSeq\tCDS\t124\t202\t.\t+\t0\tID=cds-MG_0002  \r\n");
        assert_eq!(feature.feature_type, "CDS");
        assert_eq!(feature.start, 124);
        assert_eq!(feature.end, 202);
        assert_eq!(feature.attributes, "ID=cds-MG_0002");
    }

    #[rstest]
    fn test_trailing_empty_attributes_column_is_trimmed_away() {
        let feature = expect_feature("chr1\tsrc\tgene\t1\t5\t.\t+\t.\t");
        assert_eq!(feature.attributes, "");
    }

    #[rstest]
    fn test_strand_is_kept_verbatim() {
        let feature = expect_feature("chr1\tsrc\tgene\t1\t5\t.\tforward\t.");
        assert_eq!(feature.strand, "forward");
    }

    #[rstest]
    fn test_end_before_start_is_accepted() {
        let feature = expect_feature("chr1\tsrc\tgene\t200\t100\t.\t+\t.");
        assert_eq!(feature.length(), -99);
    }

    #[rstest]
    #[case("")]
    #[case("   \t  ")]
    #[case("##gff-version 3")]
    #[case("#chr1\tsrc\tgene\t1\t5\t.\t+\t.")]
    #[case("   # indented comment")]
    #[case("NC_000908.2\tRefSeq\tgene")]
    #[case("chr1\tsrc\tgene\t1\t5\t.\t+")]
    #[case("chr1 src gene 1 5 . + .")]
    fn test_skipped_lines(#[case] line: &str) {
        let parsed = parse_feature_line(line).unwrap();
        assert_eq!(parsed, ParsedLine::Skipped);
    }

    #[rstest]
    fn test_short_line_with_bad_numbers_is_skipped_not_fatal() {
        let parsed = parse_feature_line("chr1\tsrc\tgene\tabc\txyz").unwrap();
        assert_eq!(parsed, ParsedLine::Skipped);
    }

    #[rstest]
    #[case("chr1\tsrc\tgene\tabc\t100\t.\t+\t.", "start")]
    #[case("chr1\tsrc\tgene\t1\t1.5\t.\t+\t.", "end")]
    #[case("chr1\tsrc\tgene\t\t100\t.\t+\t.", "start")]
    fn test_invalid_coordinate_is_an_error(#[case] line: &str, #[case] expected_field: &str) {
        let err = parse_feature_line(line).unwrap_err();
        match err {
            GffError::InvalidCoordinate { field, .. } => assert_eq!(field, expected_field),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_coordinates_with_padding_and_sign() {
        let feature = expect_feature("chr1\tsrc\tgene\t +10 \t 20\t.\t+\t.");
        assert_eq!(feature.start, 10);
        assert_eq!(feature.end, 20);
    }

    #[rstest]
    fn test_extreme_coordinates_parse_and_measure() {
        let feature =
            expect_feature("c\ts\tgene\t-9223372036854775808\t9223372036854775807\t.\t+\t.");
        assert_eq!(feature.start, i64::MIN);
        assert_eq!(feature.end, i64::MAX);
        assert_eq!(feature.length(), 18446744073709551616);
    }

    #[rstest]
    #[case("c\ts\tgene\t1\t99999999999999999999\t.\t+\t.", "end")]
    #[case("c\ts\tgene\t-9223372036854775809\t1\t.\t+\t.", "start")]
    #[case("c\ts\tgene\t1_000\t2000\t.\t+\t.", "start")]
    fn test_coordinates_outside_i64_or_with_separators_are_rejected(
        #[case] line: &str,
        #[case] expected_field: &str,
    ) {
        match parse_feature_line(line) {
            Err(GffError::InvalidCoordinate { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
