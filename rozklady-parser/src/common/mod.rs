//! Shared helpers for reading the untyped departure feed
//!
//! - [`numeric`]: tolerant integer parsing over optional attribute text
//! - [`xml_tree`]: document parsing, defensive attribute access and
//!   document-order traversal

pub mod numeric;
pub mod xml_tree;

pub use numeric::{digits, hhmm_to_minutes, parse_int_strict, to_int};
pub use xml_tree::{attr, child_elements, descendants, parse_document};
