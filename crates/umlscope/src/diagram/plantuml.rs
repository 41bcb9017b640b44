//! PlantUML renderer
//!
//! Second phase of diagram generation: one declaration block per collected
//! type, then every relationship line, wrapped in `@startuml`/`@enduml`.

use tracing::{info, span, trace, Level};

use super::relations::{RelationSet, Relationship};
use super::TypeGraph;
use crate::core::{DiagramConfig, Modifier, Renderer, TypeDescriptor, UmlError};

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";

/// Modifier to glyph rules, checked in order; the first present modifier wins
const VISIBILITY_RULES: [(Modifier, &str); 5] = [
    (Modifier::Private, "-"),
    (Modifier::Protected, "#"),
    (Modifier::Public, "+"),
    (Modifier::Abstract, "{abstract}"),
    (Modifier::Static, "{static}"),
];

/// Glyph prefixed to a member line, empty when no rule matches
pub fn visibility_glyph(modifiers: &[Modifier]) -> &'static str {
    VISIBILITY_RULES
        .iter()
        .find(|(modifier, _)| modifiers.contains(modifier))
        .map_or("", |&(_, glyph)| glyph)
}

/// Type name as printed in member lines, without the JVM array prefix
pub fn display_type_name(type_name: &str) -> String {
    type_name.replace("[L", "")
}

/// PlantUML class diagram renderer
#[derive(Debug, Clone)]
pub struct PlantUmlRenderer {
    config: DiagramConfig,
}

impl PlantUmlRenderer {
    pub fn new(config: &DiagramConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn render_type(
        &self,
        ty: &TypeDescriptor,
        graph: &TypeGraph<'_>,
        output: &mut String,
        relations: &mut RelationSet,
    ) {
        output.push_str(&format!("{} {} {{\n", ty.kind.keyword(), ty.name));

        if self.config.depth > 0 {
            self.collect_relationships(ty, graph, relations);
        }

        let limit = self.config.verbosity.member_limit();

        for field in ty.fields.iter().take(limit.take(ty.fields.len())) {
            trace!(owner = %ty.name, field = %field.name, "Field line");
            output.push_str(&format!(
                "\t{}{} {}\n",
                visibility_glyph(&field.modifiers),
                field.name,
                display_type_name(&field.type_name)
            ));
        }

        for method in ty.methods.iter().take(limit.take(ty.methods.len())) {
            trace!(owner = %ty.name, method = %method.name, "Method line");
            let parameters: Vec<String> = method
                .parameter_types
                .iter()
                .map(|p| display_type_name(p))
                .collect();
            output.push_str(&format!(
                "\t{}{}({})\n",
                visibility_glyph(&method.modifiers),
                method.name,
                parameters.join(", ")
            ));
        }

        output.push_str("}\n");
    }

    fn collect_relationships(
        &self,
        ty: &TypeDescriptor,
        graph: &TypeGraph<'_>,
        relations: &mut RelationSet,
    ) {
        if let Some(parent) = ty.superclass.as_deref() {
            if graph.contains(parent) && !self.config.is_universal_root(parent) {
                relations.insert(Relationship::extends(parent, &ty.name));
            }
        }

        for interface in &ty.interfaces {
            relations.insert(Relationship::implements(interface, &ty.name));
        }

        // Composition looks at every declared field, not only the printed ones
        for field in &ty.fields {
            if field.type_name != ty.name && graph.contains(&field.type_name) {
                relations.insert(Relationship::composition(&field.type_name, &ty.name));
            }
        }
    }
}

impl Renderer for PlantUmlRenderer {
    type Output = String;

    /// Render the graph as one PlantUML script
    ///
    /// Relationship lines follow the last type block directly. When there
    /// are none, `@enduml` comes right after the last `}` with no blank
    /// line in between, unlike the Java tool this output mirrors.
    fn render(&self, graph: &TypeGraph<'_>) -> Result<String, UmlError> {
        let render_span = span!(
            Level::INFO,
            "render_plantuml",
            types = graph.len(),
            verbosity = %self.config.verbosity
        );
        let _enter = render_span.enter();

        let mut output = String::new();
        output.push_str(START_MARKER);
        output.push('\n');

        let mut relations = RelationSet::new();
        for ty in graph.iter() {
            self.render_type(ty, graph, &mut output, &mut relations);
        }

        for line in relations.iter() {
            output.push_str(line);
            output.push('\n');
        }

        output.push_str(END_MARKER);
        output.push('\n');

        info!(
            types = graph.len(),
            relationships = relations.len(),
            "Rendered PlantUML diagram"
        );
        Ok(output)
    }
}
