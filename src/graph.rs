//! GraphML loading: graph isolation, node classification, edge mapping.
//!
//! A family tree drawn in yEd is a bipartite graph: nodes with a visible
//! label are persons, nodes without are families, and every edge relates a
//! person to a family. This module turns such a document into a
//! [`FamilyTree`].

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::{info, warn};

use crate::config::{parse_edge_id, parse_node_id};
use crate::error::{ConvertError, Result};
use crate::label::extract_person;
use crate::types::{Family, FamilyTree, Person, Relation};
use crate::xml::{find_child, find_children, get_attribute, get_tag_name, label_texts};

/// Load and parse a GraphML file into a [`FamilyTree`].
///
/// Fatal on IO errors, malformed XML, a missing `<graph>` element, or ids
/// that do not follow the `n<digits>` / `e<digits>` scheme.
pub fn load_graphml(path: &Path) -> Result<FamilyTree> {
    let xml = fs::read_to_string(path)?;
    let tree = parse_str(&xml, path)?;
    Ok(tree)
}

/// Parse GraphML text into a [`FamilyTree`].
///
/// The `path` is only used for error context.
pub fn parse_str(xml: &str, path: &Path) -> Result<FamilyTree> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    // Only the first graph is used; yEd writes exactly one.
    let graph = find_child(root, "graph").ok_or_else(|| ConvertError::MissingGraph {
        path: path.to_path_buf(),
    })?;

    let nodes: Vec<Node<'_, '_>> = find_children(graph, "node").collect();
    let edges: Vec<Node<'_, '_>> = find_children(graph, "edge").collect();
    info!("Found {} nodes, {} edges", nodes.len(), edges.len());

    let (persons, families) = classify_nodes(&nodes)?;
    let relations = parse_edges(&edges)?;
    info!(
        "Detected {} persons, {} families, {} relations",
        persons.len(),
        families.len(),
        relations.len()
    );

    let tree = FamilyTree {
        persons,
        families,
        relations,
    };

    for relation in tree.dangling_relations() {
        warn!(
            "Relation e{} references a nonexistent node ({} -> {}); it is kept in the output",
            relation.id, relation.source, relation.target
        );
    }

    Ok(tree)
}

/// Split node elements into persons (labeled) and families (unlabeled).
fn classify_nodes(nodes: &[Node<'_, '_>]) -> Result<(Vec<Person>, Vec<Family>)> {
    let mut persons = Vec::new();
    let mut families = Vec::new();

    for node in nodes {
        let id = node_id(*node)?;
        let labels = label_texts(*node);
        match labels.first() {
            // Only the first label carries the person data; further labels
            // are decoration (yEd port labels and the like).
            Some(label) => persons.push(extract_person(id, label)),
            None => families.push(Family { id }),
        }
    }

    // Total partition: every node is a person or a family, never neither.
    debug_assert_eq!(persons.len() + families.len(), nodes.len());

    Ok((persons, families))
}

/// Map edge elements onto [`Relation`]s, verbatim and unvalidated.
fn parse_edges(edges: &[Node<'_, '_>]) -> Result<Vec<Relation>> {
    edges
        .iter()
        .map(|edge| {
            Ok(Relation {
                id: parse_edge_id(required_attribute(*edge, "id")?)?,
                source: parse_node_id(required_attribute(*edge, "source")?)?,
                target: parse_node_id(required_attribute(*edge, "target")?)?,
            })
        })
        .collect()
}

fn node_id(node: Node<'_, '_>) -> Result<u32> {
    parse_node_id(required_attribute(node, "id")?)
}

fn required_attribute<'a>(node: Node<'a, '_>, name: &'static str) -> Result<&'a str> {
    get_attribute(node, name).ok_or_else(|| ConvertError::MissingAttribute {
        element: get_tag_name(node).to_string(),
        attribute: name,
    })
}
