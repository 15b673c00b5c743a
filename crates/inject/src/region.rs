//! Locating and rewriting sentinel-delimited regions.
//!
//! Text is handled as a sequence of lines split on `\n` and re-joined with
//! `\n`. Nothing outside the region interior changes, including a trailing
//! newline or `\r` line endings.

use crate::{Error, RegionKey, Result};

/// Position of a region's sentinel lines, as zero-based line indices.
///
/// A `Region` returned by [`locate_region`] is not validated: `begin` may lie
/// after `end` when the file is malformed. Validation happens when the region
/// is read or spliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Line index of the begin sentinel.
    pub begin: usize,
    /// Line index of the end sentinel.
    pub end: usize,
}

impl Region {
    /// Number of lines strictly between the sentinels.
    #[must_use]
    pub fn interior_len(&self) -> usize {
        self.end.saturating_sub(self.begin + 1)
    }

    fn validate(self, key: &RegionKey, line_count: usize) -> Result<Self> {
        if self.begin >= self.end {
            return Err(Error::MisorderedSentinels {
                key: key.to_string(),
                begin_line: self.begin + 1,
                end_line: self.end + 1,
            });
        }
        if self.end >= line_count {
            return Err(Error::RegionOutOfBounds {
                key: key.to_string(),
                end_line: self.end + 1,
                line_count,
            });
        }
        Ok(self)
    }
}

/// Find the sentinel lines for `key`.
///
/// Every line is scanned. When more than one line contains the begin (or
/// end) marker, the last such line is used. Returns `None` if either marker
/// is missing.
#[must_use]
pub fn locate_region(text: &str, key: &RegionKey) -> Option<Region> {
    let begin_marker = key.begin_marker();
    let end_marker = key.end_marker();

    let mut begin = None;
    let mut end = None;
    for (index, line) in text.split('\n').enumerate() {
        if line.contains(&begin_marker) {
            begin = Some(index);
        }
        if line.contains(&end_marker) {
            end = Some(index);
        }
    }

    Some(Region {
        begin: begin?,
        end: end?,
    })
}

/// Replace the interior of `region` with `lines`.
///
/// The sentinel lines stay where they are. An empty `lines` leaves the two
/// sentinels adjacent.
///
/// # Errors
///
/// Returns [`Error::MisorderedSentinels`] when the begin sentinel is not
/// before the end sentinel, and [`Error::RegionOutOfBounds`] when the region
/// does not fit `text`.
pub fn splice_interior<S: AsRef<str>>(
    text: &str,
    key: &RegionKey,
    region: Region,
    lines: &[S],
) -> Result<String> {
    let all_lines: Vec<&str> = text.split('\n').collect();
    let region = region.validate(key, all_lines.len())?;

    let mut spliced: Vec<&str> =
        Vec::with_capacity(all_lines.len() - region.interior_len() + lines.len());
    spliced.extend_from_slice(&all_lines[..=region.begin]);
    spliced.extend(lines.iter().map(AsRef::as_ref));
    spliced.extend_from_slice(&all_lines[region.end..]);

    Ok(spliced.join("\n"))
}

/// Replace the interior of the region named by `key`.
///
/// If the region's sentinels are not present the text is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::MisorderedSentinels`] when the located begin sentinel is
/// not before the end sentinel.
pub fn inject<S: AsRef<str>>(text: &str, key: &RegionKey, lines: &[S]) -> Result<String> {
    let Some(region) = locate_region(text, key) else {
        tracing::debug!(key = %key, "Region sentinels not found, skipping");
        return Ok(text.to_string());
    };

    tracing::debug!(
        key = %key,
        begin = region.begin + 1,
        end = region.end + 1,
        lines = lines.len(),
        "Injecting region"
    );
    splice_interior(text, key, region, lines)
}

/// Lines currently between the sentinels of `key`, or `None` if the region
/// is absent.
///
/// # Errors
///
/// Returns [`Error::MisorderedSentinels`] when the located begin sentinel is
/// not before the end sentinel.
pub fn read_region<'a>(text: &'a str, key: &RegionKey) -> Result<Option<Vec<&'a str>>> {
    let Some(region) = locate_region(text, key) else {
        return Ok(None);
    };

    let all_lines: Vec<&str> = text.split('\n').collect();
    let region = region.validate(key, all_lines.len())?;
    Ok(Some(all_lines[region.begin + 1..region.end].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_SOURCE: &str = "BEGIN __BEG_GEN:ADD__\nplaceholder\nEND __END_GEN:ADD__";

    #[test]
    fn test_locate_region() {
        let region = locate_region(ADD_SOURCE, &RegionKey::new("add"));
        assert_eq!(region, Some(Region { begin: 0, end: 2 }));
    }

    #[test]
    fn test_locate_region_missing_end() {
        let text = "// __BEG_GEN:ADD__\nbody\n";
        assert_eq!(locate_region(text, &RegionKey::new("add")), None);
    }

    #[test]
    fn test_locate_region_last_match_wins() {
        let text = [
            "// __BEG_GEN:NEG__", // 0
            "old",                // 1
            "// __END_GEN:NEG__", // 2
            "// __BEG_GEN:NEG__", // 3
            "old",                // 4
            "// __END_GEN:NEG__", // 5
        ]
        .join("\n");

        let region = locate_region(&text, &RegionKey::new("neg"));
        assert_eq!(region, Some(Region { begin: 3, end: 5 }));
    }

    #[test]
    fn test_inject_second_begin_shares_end() {
        let text = "// __BEG_GEN:ADD__\nx\n// __BEG_GEN:ADD__\ny\n// __END_GEN:ADD__";
        let key = RegionKey::new("add");

        assert_eq!(locate_region(text, &key), Some(Region { begin: 2, end: 4 }));
        assert_eq!(
            inject(text, &key, &["z"]).unwrap(),
            "// __BEG_GEN:ADD__\nx\n// __BEG_GEN:ADD__\nz\n// __END_GEN:ADD__"
        );
    }

    #[test]
    fn test_locate_region_tolerates_decoration() {
        let text = "\t\t// ___BEG_GEN:ADD___\nx\n\t\t// ___END_GEN:ADD___";
        let region = locate_region(text, &RegionKey::new("add"));
        assert_eq!(region, Some(Region { begin: 0, end: 2 }));
    }

    #[test]
    fn test_inject_end_to_end() {
        let lines = [
            "case uint8:",
            "\treturn a + b.(uint8), nil",
            "case string:",
            "\treturn a + b.(string), nil",
        ];
        let result = inject(ADD_SOURCE, &RegionKey::new("add"), &lines).unwrap();

        assert_eq!(
            result,
            "BEGIN __BEG_GEN:ADD__\ncase uint8:\n\treturn a + b.(uint8), nil\ncase string:\n\treturn a + b.(string), nil\nEND __END_GEN:ADD__"
        );
    }

    #[test]
    fn test_inject_missing_region_is_noop() {
        let text = "package main\n\nfunc main() {}\n";
        let result = inject(text, &RegionKey::new("int64"), &["case int:"]).unwrap();
        assert_eq!(result, text);
    }

    #[test]
    fn test_inject_empty_lines_collapses_region() {
        let result = inject(ADD_SOURCE, &RegionKey::new("add"), &[] as &[&str]).unwrap();
        assert_eq!(result, "BEGIN __BEG_GEN:ADD__\nEND __END_GEN:ADD__");
    }

    #[test]
    fn test_inject_preserves_surroundings() {
        let text = "head\r\n// __BEG_GEN:ADD__\r\nold\r\n// __END_GEN:ADD__\r\ntail\n";
        let result = inject(text, &RegionKey::new("add"), &["new\r"]).unwrap();
        assert_eq!(
            result,
            "head\r\n// __BEG_GEN:ADD__\r\nnew\r\n// __END_GEN:ADD__\r\ntail\n"
        );
    }

    #[test]
    fn test_inject_adjacent_sentinels() {
        let text = "// __BEG_GEN:NEG__\n// __END_GEN:NEG__\n";
        let result =
            inject(text, &RegionKey::new("neg"), &["case int:", "\treturn -a, nil"]).unwrap();
        assert_eq!(
            result,
            "// __BEG_GEN:NEG__\ncase int:\n\treturn -a, nil\n// __END_GEN:NEG__\n"
        );
    }

    #[test]
    fn test_inject_misordered_sentinels() {
        let text = "// __END_GEN:ADD__\nbody\n// __BEG_GEN:ADD__";
        let err = inject(text, &RegionKey::new("add"), &["x"]).unwrap_err();
        assert_eq!(
            err,
            Error::MisorderedSentinels {
                key: "ADD".to_string(),
                begin_line: 3,
                end_line: 1,
            }
        );
    }

    #[test]
    fn test_inject_both_markers_on_one_line() {
        let text = "// __BEG_GEN:ADD__ __END_GEN:ADD__";
        let err = inject(text, &RegionKey::new("add"), &["x"]).unwrap_err();
        assert!(matches!(err, Error::MisorderedSentinels { .. }));
    }

    #[test]
    fn test_splice_interior_out_of_bounds() {
        let err = splice_interior(
            "a\nb",
            &RegionKey::new("add"),
            Region { begin: 0, end: 5 },
            &["x"],
        )
        .unwrap_err();
        assert!(matches!(err, Error::RegionOutOfBounds { line_count: 2, .. }));
    }

    #[test]
    fn test_read_region() {
        let key = RegionKey::new("add");
        assert_eq!(read_region(ADD_SOURCE, &key).unwrap(), Some(vec!["placeholder"]));
        assert_eq!(read_region("nothing here", &key).unwrap(), None);
    }

    #[test]
    fn test_interior_len() {
        assert_eq!(Region { begin: 2, end: 3 }.interior_len(), 0);
        assert_eq!(Region { begin: 2, end: 6 }.interior_len(), 3);
    }

    #[test]
    fn test_keys_do_not_interfere() {
        let text = "// __BEG_GEN:INT64__\na\n// __END_GEN:INT64__\n// __BEG_GEN:UINT64__\nb\n// __END_GEN:UINT64__";
        let result = inject(text, &RegionKey::new("int64"), &["x"]).unwrap();
        assert_eq!(
            result,
            "// __BEG_GEN:INT64__\nx\n// __END_GEN:INT64__\n// __BEG_GEN:UINT64__\nb\n// __END_GEN:UINT64__"
        );
    }
}
