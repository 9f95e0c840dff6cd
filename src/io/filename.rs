//! Deriving a record's name and numeric index from its file name.
//!
//! Two naming conventions are in use. Wavelength-domain files carry an
//! underscore-delimited numeric suffix (`DA1050_DA_0001`). Time-domain files
//! carry a numeric extension (`DA1050T.001`), except for derived/averaged
//! files where the numeric segment sits one position before the final
//! extension (`mean_620-nm_027.dat`).

use std::num::ParseIntError;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexParseError {
    #[error("No index segment found in file name {0:?}")]
    NoIndexSegment(String),
    #[error("Failed to parse index segment {0:?}: {1}")]
    InvalidIndex(String, #[source] ParseIntError),
}

/// The base name of `path`, used as the record name.
pub fn base_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parse_segment(segment: &str) -> Result<u32, IndexParseError> {
    segment
        .parse()
        .map_err(|e| IndexParseError::InvalidIndex(segment.to_string(), e))
}

fn capture_segment(matcher: &Regex, name: &str) -> Result<u32, IndexParseError> {
    let captures = matcher
        .captures(name)
        .ok_or_else(|| IndexParseError::NoIndexSegment(name.to_string()))?;
    parse_segment(captures.get(1).map(|m| m.as_str()).unwrap_or_default())
}

fn underscore_index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"_([^_]+)$").unwrap())
}

fn extension_index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.([^.]+)$").unwrap())
}

fn derived_index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\.[^.]+$").unwrap())
}

/// Parse the index from the segment after the last underscore, the
/// wavelength-domain convention (`DA1050_DA_0001` has index 1).
pub fn index_from_underscore(name: &str) -> Result<u32, IndexParseError> {
    capture_segment(underscore_index_pattern(), name)
}

/// Parse the index from the last dot-delimited segment, the time-domain
/// convention (`DA1050T.001` has index 1). If that segment is not an
/// integer, fall back once to the numeric run one position before the final
/// extension, the convention for derived files (`mean_620-nm_027.dat` has
/// index 27). If the fallback fails too, its error is returned.
pub fn index_from_extension(name: &str) -> Result<u32, IndexParseError> {
    match capture_segment(extension_index_pattern(), name) {
        Ok(index) => Ok(index),
        Err(_) => capture_segment(derived_index_pattern(), name),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/data/run1/DA1050_DA_0001"), "DA1050_DA_0001");
        assert_eq!(base_name("DA1050T.001"), "DA1050T.001");
    }

    #[test]
    fn test_underscore_convention() {
        assert_eq!(index_from_underscore("DA1050_DA_0001").unwrap(), 1);
        assert_eq!(index_from_underscore("DA1050_DA_0153").unwrap(), 153);
        assert!(matches!(
            index_from_underscore("DA1050"),
            Err(IndexParseError::NoIndexSegment(_))
        ));
        assert!(matches!(
            index_from_underscore("DA1050_DA"),
            Err(IndexParseError::InvalidIndex(_, _))
        ));
    }

    #[test]
    fn test_extension_convention() {
        assert_eq!(index_from_extension("DA1050T.001").unwrap(), 1);
        assert_eq!(index_from_extension("DA1050T.042").unwrap(), 42);
    }

    #[test]
    fn test_extension_fallback_for_derived_files() {
        assert_eq!(index_from_extension("mean_620-nm_027.dat").unwrap(), 27);
        // both attempts fail: the fallback's error is surfaced
        assert!(matches!(
            index_from_extension("mean_broken.dat"),
            Err(IndexParseError::NoIndexSegment(_))
        ));
        assert!(matches!(
            index_from_extension("no_dots_at_all"),
            Err(IndexParseError::NoIndexSegment(_))
        ));
    }
}
