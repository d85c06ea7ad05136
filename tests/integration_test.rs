//! End-to-end tests for the conversion pipeline.
//!
//! Uses a synthetic yEd family tree fixture: two spouses married into one
//! family node, with one child relation out of that family.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use graphml2gedcom::gedcom::render;
use graphml2gedcom::graph::load_graphml;
use graphml2gedcom::types::FamilyTree;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_pipeline() -> (FamilyTree, String) {
    let tree = load_graphml(&fixture_path("family.graphml")).expect("fixture parses");
    let gedcom = render(&tree);
    (tree, gedcom)
}

#[test]
fn test_classification_counts() {
    let (tree, _) = run_pipeline();
    assert_eq!(tree.persons.len(), 3);
    assert_eq!(tree.families.len(), 1);
    assert_eq!(tree.relations.len(), 3);
    assert_eq!(tree.families[0].id, 2);
}

#[test]
fn test_person_fields_from_labels() {
    let (tree, _) = run_pipeline();

    let jane = &tree.persons[0];
    assert_eq!(jane.name, "Jane Doe");
    assert_eq!(jane.birth.map(|d| d.to_string()), Some("1900-01-01".into()));
    assert_eq!(jane.death.map(|d| d.to_string()), Some("1980-02-02".into()));

    let john = &tree.persons[1];
    assert_eq!(john.name, "John  Smith"); // "(2)" stripped, spacing kept
    assert_eq!(john.birth.map(|d| d.to_string()), Some("1920-03-03".into()));
    assert_eq!(john.death, None);

    // 31.02.2000 is not a calendar day; field is dropped, run continues
    let junior = &tree.persons[2];
    assert_eq!(junior.name, "Junior Smith");
    assert_eq!(junior.birth, None);
}

#[test]
fn test_rendered_dates() {
    let (_, gedcom) = run_pipeline();
    assert!(gedcom.contains("2 DATE 01 JAN 1900"));
    assert!(gedcom.contains("2 DATE 02 FEB 1980"));
    assert!(gedcom.contains("2 DATE 03 MAR 1920"));
}

#[test]
fn test_single_fam_block_with_expected_links() {
    let (tree, gedcom) = run_pipeline();

    assert_eq!(gedcom.matches(" FAM\n").count(), 1);
    let family_id = tree.families[0].id;
    assert!(gedcom.contains(&format!("0 @F{family_id}@ FAM")));

    assert!(gedcom.contains("1 HUSB @I0@"));
    assert!(gedcom.contains("1 HUSB @I1@"));
    assert!(gedcom.contains("1 CHIL @I3@"));

    assert!(gedcom.contains("1 FAMS @F2@"));
    assert!(gedcom.contains("1 FAMC @F2@"));
}

#[test]
fn test_header_and_trailer() {
    let (_, gedcom) = run_pipeline();
    assert!(gedcom.starts_with("0 HEAD\n1 SOUR GRAPHML2GEDCOM\n"));
    assert!(gedcom.contains("2 VERS 5.5.1"));
    assert!(gedcom.contains("2 FORM Lineage-Linked"));
    assert!(gedcom.contains("1 CHAR UTF-8"));
    assert!(gedcom.ends_with("0 TRLR"));
}

#[test]
fn test_no_blank_lines_in_output() {
    let (_, gedcom) = run_pipeline();
    assert!(!gedcom.contains("\n\n"));
}
