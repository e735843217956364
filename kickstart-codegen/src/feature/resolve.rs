//! Prerequisite closure and render ordering.

use std::collections::BTreeSet;

use petgraph::{
    Direction,
    algo::tarjan_scc,
    graph::{DiGraph, NodeIndex},
};
use tracing::debug;

use super::{Feature, FeatureRegistry};
use crate::{Error, Result};

impl<C> FeatureRegistry<C> {
    /// Expand `selected` with its transitive prerequisites and order the result
    /// so every feature comes after all of its prerequisites.
    ///
    /// Among features that are ready at the same step, the one declared first
    /// wins, so the order only depends on the selected set.
    pub fn resolve<S: AsRef<str>>(&self, selected: &[S]) -> Result<Vec<&Feature<C>>> {
        let included = self.closure(selected)?;

        // Nodes are added in declaration order, so node indices sort the same way.
        let mut graph = DiGraph::<usize, ()>::new();
        let mut nodes: Vec<Option<NodeIndex>> = vec![None; self.features.len()];
        for (index, node) in nodes.iter_mut().enumerate() {
            if included[index] {
                *node = Some(graph.add_node(index));
            }
        }
        for (index, feature) in self.features.values().enumerate() {
            let Some(node) = nodes[index] else { continue };
            for prerequisite in feature.prerequisites {
                if let Some(from) = nodes[self.index_of(prerequisite)?] {
                    graph.add_edge(from, node, ());
                }
            }
        }

        let mut in_degree: Vec<usize> = graph
            .node_indices()
            .map(|node| graph.neighbors_directed(node, Direction::Incoming).count())
            .collect();
        let mut ready: BTreeSet<NodeIndex> = graph
            .node_indices()
            .filter(|node| in_degree[node.index()] == 0)
            .collect();

        let mut order = Vec::with_capacity(graph.node_count());
        while let Some(node) = ready.pop_first() {
            let feature = &self.features[graph[node]];
            debug!(feature = feature.id, position = order.len(), "resolved feature");
            order.push(feature);
            for next in graph.neighbors_directed(node, Direction::Outgoing) {
                in_degree[next.index()] -= 1;
                if in_degree[next.index()] == 0 {
                    ready.insert(next);
                }
            }
        }

        if order.len() < graph.node_count() {
            let mut cyclic: Vec<usize> = tarjan_scc(&graph)
                .into_iter()
                .filter(|component| {
                    component.len() > 1 || graph.contains_edge(component[0], component[0])
                })
                .flatten()
                .map(|node| graph[node])
                .collect();
            cyclic.sort_unstable();
            return Err(Error::DependencyCycle {
                features: cyclic
                    .into_iter()
                    .map(|index| self.features[index].id.to_string())
                    .collect(),
            });
        }

        Ok(order)
    }

    /// Mark every selected feature and its transitive prerequisites.
    fn closure<S: AsRef<str>>(&self, selected: &[S]) -> Result<Vec<bool>> {
        let mut included = vec![false; self.features.len()];
        let mut stack = selected
            .iter()
            .map(|id| self.index_of(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        while let Some(index) = stack.pop() {
            if std::mem::replace(&mut included[index], true) {
                continue;
            }
            for prerequisite in self.features[index].prerequisites {
                stack.push(self.index_of(prerequisite)?);
            }
        }
        Ok(included)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ProjectBuilder;

    fn noop(_: &(), _: &mut ProjectBuilder) -> Result<()> {
        Ok(())
    }

    fn registry() -> FeatureRegistry<()> {
        FeatureRegistry::new([
            Feature::new("core-client-engine", "Client core", noop),
            Feature::new("cio-client-engine", "CIO engine", noop).requires(&["core-client-engine"]),
            Feature::new("websockets", "WebSockets", noop),
            Feature::new("client-json", "JSON", noop).requires(&["core-client-engine"]),
            Feature::new("client-websocket", "Client WebSocket", noop).requires(&[
                "core-client-engine",
                "cio-client-engine",
                "websockets",
            ]),
            Feature::new("default-headers", "Default headers", noop),
        ])
    }

    fn ids(features: &[&Feature<()>]) -> Vec<&'static str> {
        features.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_single_feature_without_prerequisites() {
        let registry = registry();
        let order = registry.resolve(&["default-headers"]).unwrap();
        assert_eq!(ids(&order), ["default-headers"]);
    }

    #[test]
    fn test_shared_prerequisite_resolved_once_first() {
        let registry = registry();
        let a = registry.resolve(&["client-websocket", "client-json"]).unwrap();
        let b = registry.resolve(&["client-json", "client-websocket"]).unwrap();

        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), [
            "core-client-engine",
            "cio-client-engine",
            "websockets",
            "client-json",
            "client-websocket",
        ]);
    }

    #[test]
    fn test_duplicate_selection() {
        let registry = registry();
        let order = registry.resolve(&["client-json", "client-json", "core-client-engine"]).unwrap();
        assert_eq!(ids(&order), ["core-client-engine", "client-json"]);
    }

    #[test]
    fn test_empty_selection() {
        let registry = registry();
        assert!(registry.resolve::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_feature() {
        let registry = registry();
        let err = registry.resolve(&["graphql"]).unwrap_err();
        match err {
            Error::UnknownFeature { id, available } => {
                assert_eq!(id, "graphql");
                assert!(available.contains(&"default-headers".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cycle_names_members_only() {
        let registry = FeatureRegistry::<()>::new([
            Feature::new("a", "A", noop).requires(&["b"]),
            Feature::new("b", "B", noop).requires(&["a"]),
            Feature::new("c", "C", noop).requires(&["a"]),
            Feature::new("d", "D", noop),
        ]);
        let err = registry.resolve(&["c", "d"]).unwrap_err();
        match err {
            Error::DependencyCycle { features } => assert_eq!(features, ["a", "b"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_self_loop() {
        let registry = FeatureRegistry::<()>::new([Feature::new("a", "A", noop).requires(&["a"])]);
        assert!(matches!(
            registry.resolve(&["a"]),
            Err(Error::DependencyCycle { ref features }) if features == &["a"]
        ));
    }
}
