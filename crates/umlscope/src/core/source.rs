//! Core trait for type metadata sources
//!
//! The diagram generator never inspects types itself. It asks a
//! `TypeSource` to resolve qualified names into descriptors, so any table of
//! precomputed metadata can stand in for runtime reflection.

use super::TypeDescriptor;

/// Core trait for type metadata sources
///
/// # Example
/// ```
/// use umlscope::catalog::Catalog;
/// use umlscope::core::TypeSource;
///
/// let catalog = Catalog::builtin().unwrap();
/// let string = catalog.resolve("java.lang.String").unwrap();
/// assert_eq!(string.superclass.as_deref(), Some("java.lang.Object"));
/// ```
pub trait TypeSource: Send + Sync {
    /// Look up a type by its qualified name
    fn resolve(&self, name: &str) -> Option<&TypeDescriptor>;

    /// Get the number of known types
    fn type_count(&self) -> usize;
}
