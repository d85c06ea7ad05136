//! Convert a family tree drawn in yEd (GraphML) to GEDCOM.
//!
//! GraphML family trees are simple bipartite graphs: labeled nodes are
//! persons, unlabeled nodes are families, and edges relate the two
//! (family→person is a child link, person→family a spouse link). Person
//! labels carry `<name>*<birth>†<death>` with DD.MM.YYYY dates.
//!
//! The source format carries no sex information, so every person is emitted
//! with unknown sex and every spouse renders as `HUSB`; the output needs a
//! manual editing pass afterwards.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use graphml2gedcom::{gedcom, graph};
//!
//! let xml = r#"<graphml xmlns:y="http://www.yworks.com/xml/graphml">
//!     <graph>
//!         <node id="n0"><data><y:NodeLabel>Jane Doe*01.01.1900</y:NodeLabel></data></node>
//!     </graph>
//! </graphml>"#;
//!
//! let tree = graph::parse_str(xml, Path::new("example.graphml")).unwrap();
//! let out = gedcom::render(&tree);
//! assert!(out.contains("1 NAME Jane Doe"));
//! ```
//!
//! # Architecture
//!
//! One linear pipeline, module per stage:
//!
//! - [`config`]: id/date grammars and GEDCOM header constants
//! - [`types`]: core data types (Person, Family, Relation, FamilyTree)
//! - [`error`]: error types and Result alias
//! - [`xml`]: GraphML DOM navigation helpers
//! - [`graph`]: graph loading, node classification, edge mapping
//! - [`label`]: person field extraction from node labels
//! - [`gedcom`]: GEDCOM record rendering and output
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod gedcom;
pub mod graph;
pub mod label;
pub mod types;
pub mod xml;

// Re-export main functions
pub use gedcom::{render, save_gedcom};
pub use graph::{load_graphml, parse_str};

// Re-export commonly used items
pub use error::{ConvertError, Result};
pub use types::{Family, FamilyTree, Person, Relation, Sex};
