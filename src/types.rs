//! Core data types for the converter.
//!
//! A yEd family tree graph maps onto three entities: labeled nodes are
//! persons, unlabeled nodes are families, and edges are relations between
//! them. Edge endpoints stay untyped integers; direction carries the
//! semantics (family→person is a child link, person→family a spouse link).

use chrono::NaiveDate;

/// Biological sex of a person.
///
/// GraphML node labels carry no sex information, so every extracted person is
/// [`Sex::Unknown`] and the GEDCOM output needs manual editing afterwards.
/// The other variants exist for callers that enrich the tree before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// GEDCOM `SEX` tag value, if known.
    #[must_use]
    pub fn as_gedcom(&self) -> Option<&'static str> {
        match self {
            Self::Male => Some("M"),
            Self::Female => Some("F"),
            Self::Unknown => None,
        }
    }
}

/// A person extracted from a labeled graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Numeric id from the node id with the 'n' prefix stripped.
    pub id: u32,

    /// Display name, with `(<digits>)` disambiguation suffixes removed.
    pub name: String,

    /// Always [`Sex::Unknown`] when extracted from GraphML.
    pub sex: Sex,

    /// Birth date, absent if the label field was empty or unparseable.
    pub birth: Option<NaiveDate>,

    /// Death date, absent if the label field was empty or unparseable.
    pub death: Option<NaiveDate>,
}

/// A family anchor node; carries no data of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    /// Numeric id from the node id with the 'n' prefix stripped.
    pub id: u32,
}

/// A directed relation between two node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Numeric id from the edge id with the 'e' prefix stripped.
    pub id: u32,

    /// Source node id (prefix stripped).
    pub source: u32,

    /// Target node id (prefix stripped).
    pub target: u32,
}

/// The fully parsed family tree graph.
///
/// Persons, families, and relations are kept in document order; the renderer
/// relies on that order for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyTree {
    pub persons: Vec<Person>,
    pub families: Vec<Family>,
    pub relations: Vec<Relation>,
}

impl FamilyTree {
    /// Families this person is a child of (family→person relations).
    pub fn parent_families(&self, person_id: u32) -> impl Iterator<Item = &Relation> {
        self.relations
            .iter()
            .filter(move |r| r.target == person_id)
    }

    /// Families this person is a spouse in (person→family relations).
    pub fn spouse_families(&self, person_id: u32) -> impl Iterator<Item = &Relation> {
        self.relations
            .iter()
            .filter(move |r| r.source == person_id)
    }

    /// Children of this family (family→person relations).
    pub fn children(&self, family_id: u32) -> impl Iterator<Item = &Relation> {
        self.relations
            .iter()
            .filter(move |r| r.source == family_id)
    }

    /// Spouses of this family (person→family relations).
    pub fn spouses(&self, family_id: u32) -> impl Iterator<Item = &Relation> {
        self.relations
            .iter()
            .filter(move |r| r.target == family_id)
    }

    /// Relations with an endpoint that is neither a known person nor a known
    /// family id.
    ///
    /// Dangling endpoints are rendered verbatim in the output; this is an
    /// advisory check so callers can warn about them.
    pub fn dangling_relations(&self) -> Vec<&Relation> {
        let known = |id: u32| {
            self.persons.iter().any(|p| p.id == id) || self.families.iter().any(|f| f.id == id)
        };
        self.relations
            .iter()
            .filter(|r| !known(r.source) || !known(r.target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u32) -> Person {
        Person {
            id,
            name: format!("Person {id}"),
            sex: Sex::Unknown,
            birth: None,
            death: None,
        }
    }

    fn tree() -> FamilyTree {
        FamilyTree {
            persons: vec![person(0), person(1), person(3)],
            families: vec![Family { id: 2 }],
            relations: vec![
                // spouses into family 2
                Relation {
                    id: 0,
                    source: 0,
                    target: 2,
                },
                Relation {
                    id: 1,
                    source: 1,
                    target: 2,
                },
                // child out of family 2
                Relation {
                    id: 2,
                    source: 2,
                    target: 3,
                },
            ],
        }
    }

    #[test]
    fn test_spouse_and_child_queries() {
        let tree = tree();
        assert_eq!(tree.spouses(2).count(), 2);
        assert_eq!(tree.children(2).count(), 1);
        assert_eq!(tree.spouse_families(0).count(), 1);
        assert_eq!(tree.parent_families(3).count(), 1);
        assert_eq!(tree.parent_families(0).count(), 0);
    }

    #[test]
    fn test_dangling_relations() {
        let mut tree = tree();
        assert!(tree.dangling_relations().is_empty());

        tree.relations.push(Relation {
            id: 3,
            source: 2,
            target: 99,
        });
        let dangling = tree.dangling_relations();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].id, 3);
    }

    #[test]
    fn test_sex_gedcom_values() {
        assert_eq!(Sex::Male.as_gedcom(), Some("M"));
        assert_eq!(Sex::Female.as_gedcom(), Some("F"));
        assert_eq!(Sex::Unknown.as_gedcom(), None);
        assert_eq!(Sex::default(), Sex::Unknown);
    }
}
