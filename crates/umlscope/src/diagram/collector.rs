//! Type collection
//!
//! First phase of diagram generation: resolve the requested roots and pull
//! in superclasses and interfaces, spending one unit of depth per level.
//!
//! Each walk remembers the largest budget it has expanded a type with. A
//! type reached again with no more budget left is not expanded twice, so
//! diamonds stay linear and cyclic catalogs terminate at any depth.

use std::collections::HashMap;

use tracing::{debug, info, span, trace, warn, Level};

use super::TypeGraph;
use crate::core::{DiagramConfig, TypeDescriptor, TypeSource, UmlError};

/// Largest remaining depth each type has been expanded with
#[derive(Debug, Default)]
struct Budgets<'a> {
    spent: HashMap<&'a str, u32>,
}

impl<'a> Budgets<'a> {
    /// Record `remaining` for `name`; false if it was already expanded
    /// with at least as much
    fn claim(&mut self, name: &'a str, remaining: u32) -> bool {
        match self.spent.get(name) {
            Some(&best) if best >= remaining => false,
            _ => {
                self.spent.insert(name, remaining);
                true
            }
        }
    }
}

/// State shared by the walks of one `collect` call
#[derive(Debug, Default)]
struct Walk<'a> {
    graph: TypeGraph<'a>,
    superclasses: Budgets<'a>,
    interfaces: Budgets<'a>,
}

/// Walks a [`TypeSource`] outward from a set of root types
pub struct TypeCollector<'a, S: TypeSource> {
    source: &'a S,
    config: &'a DiagramConfig,
}

impl<'a, S: TypeSource> TypeCollector<'a, S> {
    pub fn new(source: &'a S, config: &'a DiagramConfig) -> Self {
        Self { source, config }
    }

    /// Collect the roots and their ancestors up to the configured depth
    ///
    /// Fails on the first root the source cannot resolve. Unresolvable
    /// ancestors are skipped.
    pub fn collect<N: AsRef<str>>(&self, roots: &[N]) -> Result<TypeGraph<'a>, UmlError> {
        let collect_span = span!(
            Level::INFO,
            "collect_types",
            roots = roots.len(),
            depth = self.config.depth
        );
        let _enter = collect_span.enter();

        let depth = self.config.depth;
        let mut walk = Walk::default();
        for root in roots {
            let name = root.as_ref();
            let descriptor = self
                .source
                .resolve(name)
                .ok_or_else(|| UmlError::unresolved_type(name))?;

            debug!(name, "Adding root type");
            walk.graph.insert(descriptor);
            if walk.superclasses.claim(&descriptor.name, depth) {
                self.walk_superclasses(descriptor, depth, &mut walk);
            }
            if walk.interfaces.claim(&descriptor.name, depth) {
                self.walk_interfaces(descriptor, depth, &mut walk);
            }
        }

        info!(types = walk.graph.len(), "Collected types");
        Ok(walk.graph)
    }

    fn walk_superclasses(&self, ty: &'a TypeDescriptor, depth: u32, walk: &mut Walk<'a>) {
        if depth == 0 {
            return;
        }
        let Some(parent_name) = ty.superclass.as_deref() else {
            return;
        };
        if self.config.is_universal_root(parent_name) {
            return;
        }
        let Some(parent) = self.resolve_ancestor(parent_name, ty) else {
            return;
        };

        if walk.graph.insert(parent) {
            debug!(name = %parent.name, child = %ty.name, depth, "Adding superclass");
        }
        if walk.superclasses.claim(&parent.name, depth - 1) {
            self.walk_superclasses(parent, depth - 1, walk);
        } else {
            trace!(name = %parent.name, depth, "Superclass already expanded");
        }
    }

    fn walk_interfaces(&self, ty: &'a TypeDescriptor, depth: u32, walk: &mut Walk<'a>) {
        if depth == 0 {
            return;
        }
        for interface_name in &ty.interfaces {
            let Some(interface) = self.resolve_ancestor(interface_name, ty) else {
                continue;
            };

            if walk.graph.insert(interface) {
                debug!(name = %interface.name, implementor = %ty.name, depth, "Adding interface");
            }
            if walk.interfaces.claim(&interface.name, depth - 1) {
                self.walk_interfaces(interface, depth - 1, walk);
            } else {
                trace!(name = %interface.name, depth, "Interface already expanded");
            }
        }
    }

    fn resolve_ancestor(&self, name: &str, child: &TypeDescriptor) -> Option<&'a TypeDescriptor> {
        let resolved = self.source.resolve(name);
        if resolved.is_none() {
            warn!(name, child = %child.name, "Skipping unresolvable ancestor");
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::Verbosity;

    fn chain() -> Catalog {
        vec![
            TypeDescriptor::class("a.Base"),
            TypeDescriptor::class("a.Middle").extends("a.Base"),
            TypeDescriptor::class("a.Leaf")
                .extends("a.Middle")
                .implements("a.Named"),
            TypeDescriptor::interface("a.Named").implements("a.Tagged"),
            TypeDescriptor::interface("a.Tagged").implements("a.Marker"),
            TypeDescriptor::interface("a.Marker"),
        ]
        .into_iter()
        .collect()
    }

    fn names(graph: &TypeGraph<'_>) -> Vec<String> {
        graph.names().map(str::to_string).collect()
    }

    #[test]
    fn test_depth_zero_keeps_roots_only() {
        let catalog = chain();
        let config = DiagramConfig::new(0, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Leaf"])
            .unwrap();
        assert_eq!(names(&graph), vec!["a.Leaf"]);
    }

    #[test]
    fn test_depth_one() {
        let catalog = chain();
        let config = DiagramConfig::new(1, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Leaf"])
            .unwrap();
        assert_eq!(names(&graph), vec!["a.Leaf", "a.Middle", "a.Named"]);
    }

    #[test]
    fn test_depth_two() {
        let catalog = chain();
        let config = DiagramConfig::new(2, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Leaf"])
            .unwrap();
        assert_eq!(
            names(&graph),
            vec!["a.Leaf", "a.Middle", "a.Base", "a.Named", "a.Tagged"]
        );
    }

    #[test]
    fn test_sibling_interfaces_share_depth() {
        let catalog: Catalog = vec![
            TypeDescriptor::class("a.Impl")
                .implements("a.First")
                .implements("a.Second"),
            TypeDescriptor::interface("a.First").implements("a.FirstParent"),
            TypeDescriptor::interface("a.Second").implements("a.SecondParent"),
            TypeDescriptor::interface("a.FirstParent"),
            TypeDescriptor::interface("a.SecondParent"),
        ]
        .into_iter()
        .collect();
        let config = DiagramConfig::new(2, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Impl"])
            .unwrap();

        assert_eq!(
            names(&graph),
            vec!["a.Impl", "a.First", "a.FirstParent", "a.Second", "a.SecondParent"]
        );
    }

    #[test]
    fn test_stops_at_universal_roots() {
        let catalog = Catalog::builtin().unwrap();
        let config = DiagramConfig::new(5, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["java.lang.Thread$State"])
            .unwrap();
        assert!(!graph.contains("java.lang.Enum"));
        assert!(!graph.contains("java.lang.Object"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_unresolved_root_fails() {
        let catalog = chain();
        let config = DiagramConfig::default();
        let err = TypeCollector::new(&catalog, &config)
            .collect(&["a.Leaf", "a.Missing"])
            .unwrap_err();
        assert_eq!(err.to_string(), "Can not find type a.Missing");
    }

    #[test]
    fn test_unresolved_ancestor_is_skipped() {
        let catalog: Catalog = vec![TypeDescriptor::class("a.Orphan")
            .extends("a.Gone")
            .implements("a.AlsoGone")]
        .into_iter()
        .collect();
        let config = DiagramConfig::new(3, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Orphan"])
            .unwrap();
        assert_eq!(names(&graph), vec!["a.Orphan"]);
    }

    #[test]
    fn test_duplicate_roots_collapse() {
        let catalog = chain();
        let config = DiagramConfig::new(0, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Base", "a.Leaf", "a.Base"])
            .unwrap();
        assert_eq!(names(&graph), vec!["a.Base", "a.Leaf"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let catalog: Catalog = vec![
            TypeDescriptor::interface("a.Ping").implements("a.Pong"),
            TypeDescriptor::interface("a.Pong").implements("a.Ping"),
        ]
        .into_iter()
        .collect();
        let config = DiagramConfig::new(50, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Ping"])
            .unwrap();
        assert_eq!(names(&graph), vec!["a.Ping", "a.Pong"]);
    }

    #[test]
    fn test_cycle_at_maximum_depth() {
        let catalog: Catalog = vec![
            TypeDescriptor::class("a.Chicken").extends("a.Egg"),
            TypeDescriptor::class("a.Egg").extends("a.Chicken"),
            TypeDescriptor::interface("a.Ping").implements("a.Pong").implements("a.Pong"),
            TypeDescriptor::interface("a.Pong").implements("a.Ping").implements("a.Ping"),
        ]
        .into_iter()
        .collect();
        let config = DiagramConfig::new(u32::MAX, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Chicken", "a.Ping"])
            .unwrap();
        assert_eq!(names(&graph), vec!["a.Chicken", "a.Egg", "a.Ping", "a.Pong"]);
    }

    #[test]
    fn test_interface_diamonds_stay_linear() {
        // Forty stacked diamonds: each level has two interfaces that both
        // extend the next level's pair
        let levels = 40;
        let mut types = Vec::new();
        for level in 0..levels {
            for side in ["L", "R"] {
                let mut ty = TypeDescriptor::interface(format!("d.{side}{level}"));
                if level + 1 < levels {
                    ty = ty
                        .implements(format!("d.L{}", level + 1))
                        .implements(format!("d.R{}", level + 1));
                }
                types.push(ty);
            }
        }
        types.push(TypeDescriptor::class("d.Impl").implements("d.L0").implements("d.R0"));
        let catalog: Catalog = types.into_iter().collect();

        let config = DiagramConfig::new(30, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["d.Impl"])
            .unwrap();

        // Root plus both interfaces of each of the 30 reachable levels
        assert_eq!(graph.len(), 1 + 2 * 30);
        assert!(graph.contains("d.R29"));
        assert!(!graph.contains("d.L30"));
    }

    #[test]
    fn test_shorter_path_does_not_hide_deeper_ancestors() {
        // a.Shared is first reached through a.Short with one level left, then
        // directly from the root with two
        let catalog: Catalog = vec![
            TypeDescriptor::class("a.Impl").implements("a.Short").implements("a.Shared"),
            TypeDescriptor::interface("a.Short").implements("a.Shared"),
            TypeDescriptor::interface("a.Shared").implements("a.Top"),
            TypeDescriptor::interface("a.Top").implements("a.Beyond"),
            TypeDescriptor::interface("a.Beyond"),
        ]
        .into_iter()
        .collect();
        let config = DiagramConfig::new(3, Verbosity::Hidden);
        let graph = TypeCollector::new(&catalog, &config)
            .collect(&["a.Impl"])
            .unwrap();
        assert_eq!(
            names(&graph),
            vec!["a.Impl", "a.Short", "a.Shared", "a.Top", "a.Beyond"]
        );
    }
}
