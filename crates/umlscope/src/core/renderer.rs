//! Core renderer trait for diagram output
//!
//! A renderer turns a collected [`TypeGraph`] into some textual output.

use crate::core::UmlError;
use crate::diagram::TypeGraph;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use umlscope::catalog::Catalog;
/// use umlscope::core::{DiagramConfig, Renderer};
/// use umlscope::diagram::{PlantUmlRenderer, TypeCollector};
///
/// let catalog = Catalog::builtin().unwrap();
/// let config = DiagramConfig::default().with_depth(0);
/// let graph = TypeCollector::new(&catalog, &config)
///     .collect(&["java.lang.String"])
///     .unwrap();
/// let output = PlantUmlRenderer::new(&config).render(&graph).unwrap();
/// assert!(output.starts_with("@startuml"));
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the collected types into the output format
    fn render(&self, graph: &TypeGraph<'_>) -> Result<Self::Output, UmlError>;
}
