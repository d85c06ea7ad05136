//! GEDCOM output generation.

mod records;
mod writer;

pub use records::{family_record, format_date, person_record};
pub use writer::{collapse_blank_lines, render, save_gedcom};
