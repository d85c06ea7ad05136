//! Person field extraction from node label text.
//!
//! A yEd family tree labels person nodes as `<name>*<birth>†<death>`, e.g.
//! `Jane Doe*01.01.1900†02.02.1980`. Both the `*` and `†` markers and the
//! fields behind them are optional; names may carry a `(<digits>)`
//! disambiguation suffix that is not part of the actual name.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::config::{matches_date_grammar, DATE_INPUT_FORMAT};
use crate::types::{Person, Sex};

/// Splits a label into name, birth and death fields. Every group may be
/// empty, so this matches any input.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^*]*)\*?(?P<birth>[^†]*)†?(?P<death>.*)$").expect("valid regex")
});

/// Parenthesized numeric disambiguation suffix, e.g. `(2)`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NAME_SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("valid regex"));

/// Build a [`Person`] from a node label.
///
/// Field extraction is best-effort: an empty or malformed date field yields
/// `None` for that slot and a warning naming the person and the field, but
/// never fails the run. Sex is always [`Sex::Unknown`] since GraphML labels
/// carry no sex information.
///
/// # Examples
/// ```
/// use graphml2gedcom::label::extract_person;
///
/// let person = extract_person(7, "Jane Doe*01.01.1900†02.02.1980");
/// assert_eq!(person.name, "Jane Doe");
/// assert!(person.birth.is_some());
/// assert!(person.death.is_some());
/// ```
pub fn extract_person(id: u32, label: &str) -> Person {
    // Multi-line labels flatten to one line before splitting.
    let flat = label.replace('\n', "");

    #[allow(clippy::expect_used)] // All three groups are optional, so any input matches
    let captures = LABEL_PATTERN.captures(&flat).expect("pattern matches any string");

    let name = NAME_SUFFIX_PATTERN
        .replace_all(&captures["name"], "")
        .trim()
        .to_string();

    let birth = parse_date_field(&captures["birth"], &name, "birth");
    let death = parse_date_field(&captures["death"], &name, "death");

    Person {
        id,
        name,
        sex: Sex::Unknown,
        birth,
        death,
    }
}

/// Parse one DD.MM.YYYY date field, warning on anything that does not parse.
fn parse_date_field(raw: &str, person_name: &str, field: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    if !matches_date_grammar(trimmed) {
        warn!("{person_name} ({field}) -> '{trimmed}' does not match DD.MM.YYYY");
        return None;
    }

    match NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("{person_name} ({field}) -> '{trimmed}': {e}");
            None
        }
    }
}
