//! Constants and id/date validation for the converter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ConvertError, Result};

/// Type prefix for GraphML node ids.
pub const NODE_PREFIX: char = 'n';

/// Type prefix for GraphML edge ids.
pub const EDGE_PREFIX: char = 'e';

/// Producing-system name written to the GEDCOM `SOUR` header line.
pub const GEDCOM_SOURCE: &str = "GRAPHML2GEDCOM";

/// GEDCOM version declared in the header.
pub const GEDCOM_VERSION: &str = "5.5.1";

/// GEDCOM form declared in the header.
pub const GEDCOM_FORM: &str = "Lineage-Linked";

/// Character encoding declared in the header.
pub const GEDCOM_CHARSET: &str = "UTF-8";

/// Input date grammar: two-digit day, two-digit month, four-digit year.
pub const DATE_INPUT_FORMAT: &str = "%d.%m.%Y";

/// Output date format; the month abbreviation is upper-cased after formatting.
pub const DATE_OUTPUT_FORMAT: &str = "%d %b %Y";

/// Node id pattern: 'n' followed by digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NODE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^n(\d+)$").expect("valid regex"));

/// Edge id pattern: 'e' followed by digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EDGE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^e(\d+)$").expect("valid regex"));

/// Strict calendar date pattern: DD.MM.YYYY.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid regex"));

/// Strip the 'n' prefix from a node id and parse the numeric remainder.
///
/// # Examples
/// ```
/// use graphml2gedcom::config::parse_node_id;
///
/// assert_eq!(parse_node_id("n42").unwrap(), 42);
/// assert!(parse_node_id("e42").is_err());
/// ```
pub fn parse_node_id(id: &str) -> Result<u32> {
    parse_typed_id(id, &NODE_ID_PATTERN, "node", NODE_PREFIX)
}

/// Strip the 'e' prefix from an edge id and parse the numeric remainder.
pub fn parse_edge_id(id: &str) -> Result<u32> {
    parse_typed_id(id, &EDGE_ID_PATTERN, "edge", EDGE_PREFIX)
}

fn parse_typed_id(id: &str, pattern: &Regex, kind: &'static str, prefix: char) -> Result<u32> {
    let invalid = || ConvertError::InvalidId {
        kind,
        id: id.to_string(),
        prefix,
    };
    let captures = pattern.captures(id).ok_or_else(|| invalid())?;
    captures[1].parse().map_err(|_| invalid())
}

/// Check whether a trimmed label substring matches the strict DD.MM.YYYY grammar.
///
/// This gates the chrono parse so that loosely shaped inputs like `1.1.1900`
/// are rejected rather than accepted by a lenient `%d` parse.
pub fn matches_date_grammar(text: &str) -> bool {
    DATE_PATTERN.is_match(text)
}
