//! GEDCOM document assembly and file output.

use std::fs;
use std::path::Path;

use super::records::{family_record, person_record};
use crate::config::{GEDCOM_CHARSET, GEDCOM_FORM, GEDCOM_SOURCE, GEDCOM_VERSION};
use crate::error::Result;
use crate::types::FamilyTree;

/// Fixed header block: source program, format version, character encoding.
fn header() -> String {
    format!(
        "0 HEAD\n\
         1 SOUR {GEDCOM_SOURCE}\n\
         1 GEDC\n\
         2 VERS {GEDCOM_VERSION}\n\
         2 FORM {GEDCOM_FORM}\n\
         1 CHAR {GEDCOM_CHARSET}"
    )
}

/// Render the whole GEDCOM document for a family tree.
///
/// Person records come first, family records second, both in input order,
/// wrapped in the fixed header and the `0 TRLR` trailer. The blank-line
/// collapse runs last so that entities with no dates or links never leave
/// empty lines behind.
pub fn render(tree: &FamilyTree) -> String {
    let mut blocks = vec![header()];
    blocks.extend(tree.persons.iter().map(|p| person_record(p, tree)));
    blocks.extend(tree.families.iter().map(|f| family_record(f, tree)));
    blocks.push("0 TRLR".to_string());

    collapse_blank_lines(&blocks.join("\n"))
}

/// Collapse newline runs until no blank line remains.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut text = text.to_string();
    while text.contains("\n\n") {
        text = text.replace("\n\n", "\n");
    }
    text
}

/// Write a rendered GEDCOM document to a file, with a trailing newline.
pub fn save_gedcom(gedcom: &str, path: &Path) -> Result<()> {
    fs::write(path, format!("{gedcom}\n"))?;
    Ok(())
}
