//! Region keys and the sentinel markers derived from them.

use std::fmt;

const BEGIN_PREFIX: &str = "__BEG_GEN:";
const END_PREFIX: &str = "__END_GEN:";
const SUFFIX: &str = "__";

/// Identifier of a generated region.
///
/// Keys are normalized to upper case, so `"add"`, `"Add"` and `"ADD"` all
/// address the `__BEG_GEN:ADD__` / `__END_GEN:ADD__` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionKey(String);

impl RegionKey {
    /// Create a key, normalizing it to upper case.
    #[must_use]
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().to_uppercase())
    }

    /// The normalized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Marker that identifies the begin sentinel line.
    #[must_use]
    pub fn begin_marker(&self) -> String {
        format!("{BEGIN_PREFIX}{}{SUFFIX}", self.0)
    }

    /// Marker that identifies the end sentinel line.
    #[must_use]
    pub fn end_marker(&self) -> String {
        format!("{END_PREFIX}{}{SUFFIX}", self.0)
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_upper_cased() {
        assert_eq!(RegionKey::new("int64").as_str(), "INT64");
        assert_eq!(RegionKey::new("Add").as_str(), "ADD");
        assert_eq!(RegionKey::from("neg"), RegionKey::new("NEG"));
    }

    #[test]
    fn test_markers() {
        let key = RegionKey::new("float64");
        assert_eq!(key.begin_marker(), "__BEG_GEN:FLOAT64__");
        assert_eq!(key.end_marker(), "__END_GEN:FLOAT64__");
    }

    #[test]
    fn test_display() {
        assert_eq!(RegionKey::new("uint64").to_string(), "UINT64");
    }
}
