//! Ordered type set
//!
//! The types that end up in a diagram, in the order they were first
//! reached. Adding a type twice keeps its original position.

use indexmap::IndexMap;

use crate::core::TypeDescriptor;

/// Insertion-ordered set of descriptors, deduplicated by qualified name
#[derive(Debug, Clone, Default)]
pub struct TypeGraph<'a> {
    types: IndexMap<&'a str, &'a TypeDescriptor>,
}

impl<'a> TypeGraph<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type; returns false if it was already present
    pub fn insert(&mut self, descriptor: &'a TypeDescriptor) -> bool {
        if self.types.contains_key(descriptor.name.as_str()) {
            return false;
        }
        self.types.insert(descriptor.name.as_str(), descriptor);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TypeDescriptor> + '_ {
        self.types.values().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.types.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
