use std::sync::Arc;

use renketsu_core::{EdgeCursor, GraphError, GraphView};

/// Small in-memory adjacency graph used across the integration tests.
#[derive(Clone)]
pub struct AdjacencyGraph {
    adjacency: Arc<Vec<Vec<(usize, f64)>>>,
}

impl AdjacencyGraph {
    /// Builds a graph from undirected weighted edges.
    #[must_use]
    pub fn undirected(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(source, target, weight) in edges {
            adjacency[source].push((target, weight));
            adjacency[target].push((source, weight));
        }
        Self {
            adjacency: Arc::new(adjacency),
        }
    }
}

pub struct AdjacencyCursor {
    adjacency: Arc<Vec<Vec<(usize, f64)>>>,
}

impl EdgeCursor for AdjacencyCursor {
    fn for_each_outgoing<F>(&mut self, node: usize, mut visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let neighbours = self.adjacency.get(node).ok_or(GraphError::NodeOutOfBounds {
            node,
            node_count: self.adjacency.len(),
        })?;
        for &(target, _) in neighbours {
            if !visitor(node, target) {
                break;
            }
        }
        Ok(())
    }
}

impl GraphView for AdjacencyGraph {
    type Edges = AdjacencyCursor;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn name(&self) -> &str {
        "adjacency"
    }

    fn concurrent_copy(&self) -> AdjacencyCursor {
        AdjacencyCursor {
            adjacency: Arc::clone(&self.adjacency),
        }
    }

    fn weight_of(&self, source: usize, target: usize) -> f64 {
        self.adjacency
            .get(source)
            .and_then(|neighbours| {
                neighbours
                    .iter()
                    .find(|(candidate, _)| *candidate == target)
            })
            .map_or(1.0, |&(_, weight)| weight)
    }
}
