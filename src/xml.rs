//! XML utility functions for navigating GraphML DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// GraphML lives in its own namespace and yEd labels in another; matching on
/// local names keeps navigation independent of both.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use graphml2gedcom::xml::get_tag_name;
///
/// let xml = r#"<g:graphml xmlns:g="http://graphml.graphdrawing.org/xmlns"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "graphml");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given local tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given local tag name, in document order.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Collect all non-empty label texts nested under a node.
///
/// yEd stores visible node text in `<y:NodeLabel>` elements buried inside
/// `<data>` children; labels that are pure whitespace do not count.
pub fn label_texts(node: Node<'_, '_>) -> Vec<String> {
    node.descendants()
        .filter(|n| n.is_element() && get_tag_name(*n) == "NodeLabel")
        .filter_map(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_strips_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_find_child_and_children() {
        let xml = r#"<root><node/><edge/><node/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "edge").is_some());
        assert!(find_child(root, "missing").is_none());
        assert_eq!(find_children(root, "node").count(), 2);
    }

    #[test]
    fn test_label_texts_skips_blank_labels() {
        let xml = r#"<node xmlns:y="http://www.yworks.com/xml/graphml">
            <data><y:ShapeNode>
                <y:NodeLabel>  </y:NodeLabel>
                <y:NodeLabel> Jane Doe </y:NodeLabel>
            </y:ShapeNode></data>
        </node>"#;
        let doc = Document::parse(xml).unwrap();
        let labels = label_texts(doc.root_element());
        assert_eq!(labels, vec!["Jane Doe".to_string()]);
    }

    #[test]
    fn test_label_texts_empty_for_family_nodes() {
        let xml = r#"<node><data/></node>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(label_texts(doc.root_element()).is_empty());
    }

    #[test]
    fn test_get_attribute() {
        let xml = r#"<edge source="n0" target="n1"/>"#;
        let doc = Document::parse(xml).unwrap();
        let edge = doc.root_element();
        assert_eq!(get_attribute(edge, "source"), Some("n0"));
        assert_eq!(get_attribute(edge, "missing"), None);
    }
}
