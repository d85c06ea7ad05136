//! Per-entity GEDCOM record blocks.

use chrono::NaiveDate;

use crate::config::DATE_OUTPUT_FORMAT;
use crate::types::{Family, FamilyTree, Person};

/// Render a calendar date as GEDCOM expects it, e.g. `01 JAN 1900`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_OUTPUT_FORMAT).to_string().to_uppercase()
}

/// Render one `INDI` block for a person.
///
/// Layout: identity, name, optional birth and death events, then `FAMC`
/// links to the families the person is a child of and `FAMS` links to the
/// families the person is a spouse in.
pub fn person_record(person: &Person, tree: &FamilyTree) -> String {
    let mut lines = vec![
        format!("0 @I{}@ INDI", person.id),
        format!("1 NAME {}", person.name),
    ];

    if let Some(birth) = person.birth {
        lines.push("1 BIRT".to_string());
        lines.push(format!("2 DATE {}", format_date(birth)));
    }
    if let Some(death) = person.death {
        lines.push("1 DEAT".to_string());
        lines.push(format!("2 DATE {}", format_date(death)));
    }

    for relation in tree.parent_families(person.id) {
        lines.push(format!("1 FAMC @F{}@", relation.source));
    }
    for relation in tree.spouse_families(person.id) {
        lines.push(format!("1 FAMS @F{}@", relation.target));
    }

    lines.join("\n")
}

/// Render one `FAM` block for a family.
///
/// GraphML carries no sex data, so every spouse renders as `HUSB`; the
/// resulting file needs a manual pass to turn the wives into `WIFE`.
pub fn family_record(family: &Family, tree: &FamilyTree) -> String {
    let mut lines = vec![format!("0 @F{}@ FAM", family.id)];

    for relation in tree.children(family.id) {
        lines.push(format!("1 CHIL @I{}@", relation.target));
    }
    for relation in tree.spouses(family.id) {
        lines.push(format!("1 HUSB @I{}@", relation.source));
    }

    lines.join("\n")
}
