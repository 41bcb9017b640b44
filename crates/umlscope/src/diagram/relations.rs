//! Relationship edges
//!
//! Edges are kept as formatted PlantUML lines in an insertion-ordered set,
//! so the same edge reached twice is only printed once.

use indexmap::IndexSet;
use std::fmt;

/// Relationship type between two types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Extends,     // <|--
    Implements,  // <|..
    Composition, // *--
}

impl RelationshipKind {
    pub fn arrow(self) -> &'static str {
        match self {
            RelationshipKind::Extends => "<|--",
            RelationshipKind::Implements => "<|..",
            RelationshipKind::Composition => "*--",
        }
    }
}

/// One edge, written as `head <arrow> tail`
///
/// `head` is the supertype, interface or field type; `tail` is the type
/// that extends, implements or holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship<'a> {
    pub head: &'a str,
    pub tail: &'a str,
    pub kind: RelationshipKind,
}

impl<'a> Relationship<'a> {
    pub fn new(head: &'a str, tail: &'a str, kind: RelationshipKind) -> Self {
        Self { head, tail, kind }
    }

    pub fn extends(parent: &'a str, child: &'a str) -> Self {
        Self::new(parent, child, RelationshipKind::Extends)
    }

    pub fn implements(interface: &'a str, implementor: &'a str) -> Self {
        Self::new(interface, implementor, RelationshipKind::Implements)
    }

    pub fn composition(part: &'a str, owner: &'a str) -> Self {
        Self::new(part, owner, RelationshipKind::Composition)
    }
}

impl fmt::Display for Relationship<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.head, self.kind.arrow(), self.tail)
    }
}

/// Insertion-ordered set of relationship lines
#[derive(Debug, Clone, Default)]
pub struct RelationSet {
    lines: IndexSet<String>,
}

impl RelationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge; returns false if the identical line is already present
    pub fn insert(&mut self, relationship: Relationship<'_>) -> bool {
        self.lines.insert(relationship.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
