//! Read-only helpers over an `xmltree` document.
//!
//! The feed nests its elements inconsistently, so lookups walk every
//! descendant in document order instead of relying on fixed paths.

use std::slice;
use xmltree::{Element, XMLNode};

use crate::error::{ParseError, ParseResult};

/// Parse a document that must hold exactly one root element.
///
/// Comments and processing instructions around the root are allowed. A
/// second root element is rejected rather than silently ignored.
pub fn parse_document(xml: &[u8]) -> ParseResult<Element> {
    let nodes = Element::parse_all(xml).map_err(|e| ParseError::MalformedFeed(e.to_string()))?;
    let mut roots = nodes.into_iter().filter_map(|node| match node {
        XMLNode::Element(element) => Some(element),
        _ => None,
    });

    let root = roots
        .next()
        .ok_or_else(|| ParseError::MalformedFeed("no root element".to_string()))?;
    if roots.next().is_some() {
        return Err(ParseError::MalformedFeed(
            "more than one root element".to_string(),
        ));
    }
    Ok(root)
}

/// Read an attribute as trimmed text, or `""` when it is missing.
pub fn attr(element: &Element, name: &str) -> String {
    element
        .attributes
        .get(name)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Iterate over the direct child elements named `name`, in document order.
pub fn child_elements<'a>(
    element: &'a Element,
    name: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    element
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(move |child| child.name == name)
}

/// Iterate over every element below `root` (excluding `root`) in document order.
pub fn descendants(root: &Element) -> Descendants<'_> {
    Descendants {
        stack: vec![root.children.iter()],
    }
}

/// Pre-order iterator returned by [`descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, XMLNode>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(XMLNode::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(_) => continue,
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_document_single_root() {
        let root = parse_document(b"<?xml version=\"1.0\"?><!-- feed --><Schedules/><!-- end -->")
            .unwrap();
        assert_eq!(root.name, "Schedules");
    }

    #[test]
    fn test_parse_document_rejects_second_root() {
        assert!(matches!(
            parse_document(b"<Schedules/><Schedules/>"),
            Err(ParseError::MalformedFeed(_))
        ));
        assert!(matches!(
            parse_document(b"<Schedules time=\"1:00\"/><Stop name=\"x\"><R/></Stop>"),
            Err(ParseError::MalformedFeed(_))
        ));
    }

    #[test]
    fn test_parse_document_rejects_empty() {
        assert!(matches!(parse_document(b""), Err(ParseError::MalformedFeed(_))));
    }

    #[test]
    fn test_attr_trims_and_defaults() {
        let root = parse(r#"<R nr=" 10A " dir=""/>"#);
        assert_eq!(attr(&root, "nr"), "10A");
        assert_eq!(attr(&root, "dir"), "");
        assert_eq!(attr(&root, "vt"), "");
    }

    #[test]
    fn test_descendants_document_order() {
        let root = parse(r#"<a><b><c/></b><d><b/></d>text<e/></a>"#);
        let names: Vec<&str> = descendants(&root).map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "d", "b", "e"]);
    }

    #[test]
    fn test_descendants_excludes_root() {
        let root = parse("<R/>");
        assert_eq!(descendants(&root).count(), 0);
    }

    #[test]
    fn test_child_elements_direct_only() {
        let root = parse(r#"<R><S id="1"/><X><S id="nested"/></X><S id="2"/></R>"#);
        let ids: Vec<String> = child_elements(&root, "S").map(|s| attr(s, "id")).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
