//! Diagram generation
//!
//! Two phases: [`TypeCollector`] gathers the roots and their ancestors into
//! a [`TypeGraph`], then [`PlantUmlRenderer`] turns that graph into a
//! PlantUML script. [`DiagramGenerator`] runs both.

mod collector;
mod graph;
mod plantuml;
mod relations;
mod request;

pub use collector::TypeCollector;
pub use graph::TypeGraph;
pub use plantuml::{display_type_name, visibility_glyph, PlantUmlRenderer, END_MARKER, START_MARKER};
pub use relations::{RelationSet, Relationship, RelationshipKind};
pub use request::*;

use crate::core::{DiagramConfig, Renderer, TypeSource, UmlError};

/// Collects and renders diagrams with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct DiagramGenerator {
    config: DiagramConfig,
}

impl DiagramGenerator {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Generate the PlantUML script for `roots`
    ///
    /// Nothing is returned unless every root resolves.
    pub fn generate<S, N>(&self, source: &S, roots: &[N]) -> Result<String, UmlError>
    where
        S: TypeSource,
        N: AsRef<str>,
    {
        let graph = TypeCollector::new(source, &self.config).collect(roots)?;
        PlantUmlRenderer::new(&self.config).render(&graph)
    }
}
