//! umlscope - PlantUML class diagrams from type metadata
//!
//! Given a table of type descriptors and a few root type names, umlscope
//! walks superclasses and interfaces up to a depth bound and prints a
//! PlantUML class diagram script.
//!
//! # Quick Start
//!
//! ```rust
//! use umlscope::generate;
//! use umlscope::catalog::Catalog;
//! use umlscope::core::DiagramConfig;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let config = DiagramConfig::default().with_depth(0);
//! let script = generate(&catalog, &["java.lang.String"], &config).unwrap();
//! assert!(script.contains("class java.lang.String {"));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use umlscope::prelude::*;
//!
//! let catalog: Catalog = vec![
//!     TypeDescriptor::class("zoo.Animal"),
//!     TypeDescriptor::class("zoo.Dog").extends("zoo.Animal"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = DiagramConfig::new(1, Verbosity::Hidden);
//! let graph = TypeCollector::new(&catalog, &config).collect(&["zoo.Dog"]).unwrap();
//! assert_eq!(graph.len(), 2);
//!
//! let script = PlantUmlRenderer::new(&config).render(&graph).unwrap();
//! assert!(script.contains("zoo.Animal <|-- zoo.Dog"));
//! ```

pub mod catalog;
pub mod core;
pub mod diagram;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::core::{
        DiagramConfig, FieldDescriptor, MethodDescriptor, Modifier, Renderer, SwitchParser,
        TypeDescriptor, TypeKind, TypeSource, UmlError, Verbosity,
    };
    pub use crate::diagram::{
        DiagramGenerator, DiagramRequest, PlantUmlRenderer, TypeCollector, TypeGraph,
    };
}

/// Generate a PlantUML script for `roots`
///
/// # Example
/// ```rust
/// use umlscope::{generate, DiagramConfig, Verbosity};
/// use umlscope::catalog::Catalog;
///
/// let catalog = Catalog::builtin().unwrap();
/// let config = DiagramConfig::new(1, Verbosity::Summary);
/// let script = generate(&catalog, &["java.lang.Integer"], &config).unwrap();
/// assert!(script.contains("java.lang.Number <|-- java.lang.Integer"));
/// ```
pub fn generate<S, N>(source: &S, roots: &[N], config: &DiagramConfig) -> Result<String, UmlError>
where
    S: TypeSource,
    N: AsRef<str>,
{
    diagram::DiagramGenerator::new(config.clone()).generate(source, roots)
}
