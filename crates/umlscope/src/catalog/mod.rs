//! Type catalogs
//!
//! A [`Catalog`] is a precomputed table of type descriptors, loaded from
//! JSON. It is the stock [`TypeSource`] used by the CLI. A small subset of
//! `java.base` ships with the crate so the common `java.lang` and
//! `java.util` types resolve without any extra files.
//!
//! # Format
//!
//! ```json
//! { "types": [ { "name": "a.B", "kind": "class", "superclass": "a.A",
//!                "interfaces": ["a.I"],
//!                "fields": [ { "name": "x", "type": "int", "modifiers": ["private"] } ],
//!                "methods": [ { "name": "m", "parameters": ["int"], "modifiers": ["public"] } ] } ] }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::core::{TypeDescriptor, TypeSource, UmlError};

const JAVA_BASE: &str = include_str!("../../data/java_base.json");

/// On-disk shape of a catalog file
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

/// Table of type descriptors keyed by qualified name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: IndexMap<String, TypeDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled `java.base` subset
    pub fn builtin() -> Result<Self, UmlError> {
        Self::from_json(JAVA_BASE)
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, UmlError> {
        let mut catalog = Self::new();
        catalog.extend_from_json(json)?;
        Ok(catalog)
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UmlError> {
        let mut catalog = Self::new();
        catalog.load_path(path)?;
        Ok(catalog)
    }

    /// Add every type from JSON text, replacing entries with the same name
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, UmlError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| UmlError::catalog(e.to_string()))?;
        let count = file.types.len();
        for descriptor in file.types {
            self.insert(descriptor);
        }
        Ok(count)
    }

    /// Add every type from a catalog file, replacing entries with the same name
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize, UmlError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let count = self.extend_from_json(&json).map_err(|e| match e {
            UmlError::Catalog { message } => {
                UmlError::catalog(format!("{}: {}", path.display(), message))
            }
            other => other,
        })?;
        info!(path = %path.display(), count, "Loaded type catalog");
        Ok(count)
    }

    /// Insert a descriptor, returning the one it replaced
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        debug!(name = %descriptor.name, kind = %descriptor.kind, "Catalog entry");
        self.types.insert(descriptor.name.clone(), descriptor)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for descriptor in iter {
            catalog.insert(descriptor);
        }
        catalog
    }
}

impl TypeSource for Catalog {
    fn resolve(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    fn type_count(&self) -> usize {
        self.types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldDescriptor, TypeKind};

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.type_count() > 10);
        assert!(catalog.resolve("java.lang.Object").is_some());
        assert!(catalog.resolve("java.lang.String").is_some());
        assert!(catalog.resolve("java.util.ArrayList").is_some());
    }

    #[test]
    fn test_builtin_kinds() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.resolve("java.lang.Runnable").unwrap().kind,
            TypeKind::Interface
        );
        assert_eq!(
            catalog.resolve("java.lang.Thread$State").unwrap().kind,
            TypeKind::Enum
        );
        assert_eq!(
            catalog.resolve("java.lang.Integer").unwrap().superclass.as_deref(),
            Some("java.lang.Number")
        );
    }

    #[test]
    fn test_builtin_type_names_are_unique() {
        let parsed: CatalogFile = serde_json::from_str(JAVA_BASE).unwrap();
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(parsed.types.len(), catalog.type_count());
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(TypeDescriptor::class("a.A")).is_none());
        let previous = catalog.insert(
            TypeDescriptor::class("a.A").with_field(FieldDescriptor::new("x", "int")),
        );
        assert!(previous.unwrap().fields.is_empty());
        assert_eq!(catalog.type_count(), 1);
        assert_eq!(catalog.resolve("a.A").unwrap().fields.len(), 1);
    }

    #[test]
    fn test_extend_overrides_builtin() {
        let mut catalog = Catalog::builtin().unwrap();
        let before = catalog.type_count();
        let added = catalog
            .extend_from_json(
                r#"{ "types": [ { "name": "java.lang.String", "kind": "class" }, { "name": "a.New" } ] }"#,
            )
            .unwrap();

        assert_eq!(added, 2);
        assert_eq!(catalog.type_count(), before + 1);
        assert!(catalog.resolve("java.lang.String").unwrap().fields.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, UmlError::Catalog { .. }));
    }

    #[test]
    fn test_empty_types_list() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let catalog: Catalog = vec![TypeDescriptor::class("b.B"), TypeDescriptor::class("a.A")]
            .into_iter()
            .collect();
        let names: Vec<_> = catalog.types.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b.B", "a.A"]);
    }
}
