//! Minimum spanning tree (forest) via Kruskal's algorithm
//!
//! Edges are taken in ascending weight order and kept whenever they join two
//! components that the union-find forest has not merged yet. On a
//! disconnected graph this yields a minimum spanning forest, one tree per
//! component, which is reported without error.

use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::union_find::DisjointSet;
use log::{debug, trace};
use rayon::prelude::*;

/// Edges chosen by Kruskal's algorithm and their total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    vertices: usize,
    total_weight: i64,
    edges: Vec<Edge>,
}

impl SpanningForest {
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Sum of the included edge weights, wrapping on `i64` overflow
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Included edges in the order they were accepted
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of trees in the forest, isolated vertices included
    pub fn component_count(&self) -> usize {
        self.vertices - self.edges.len()
    }

    /// True when the forest is a single tree covering every vertex
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() <= 1
    }
}

/// Compute the minimum spanning forest of `graph`
///
/// The caller's edge list is left untouched; a copy is sorted. The sort is
/// stable, so equal weights are visited in insertion order and repeated runs
/// pick the same edges. The total wraps around on `i64` overflow instead of
/// panicking, since every weight is valid input.
pub fn minimum_spanning_forest(graph: &Graph) -> Result<SpanningForest> {
    graph.validate()?;

    let vertices = graph.vertices();
    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut ds = DisjointSet::new(vertices);
    let mut total_weight = 0i64;
    let mut edges = Vec::with_capacity(vertices.saturating_sub(1));

    for edge in sorted {
        if edges.len() + 1 >= vertices {
            break;
        }

        if ds.union(edge.from, edge.to)? {
            trace!("accept {edge}");
            total_weight = total_weight.wrapping_add(edge.weight);
            edges.push(edge);
        } else {
            trace!("reject {edge}");
        }
    }

    let forest = SpanningForest {
        vertices,
        total_weight,
        edges,
    };

    debug!(
        "Kruskal: {} vertices, {} edges, accepted {}, {} component(s), weight {}",
        vertices,
        graph.edges().len(),
        forest.edges().len(),
        forest.component_count(),
        forest.total_weight()
    );

    Ok(forest)
}

/// Total weight of the minimum spanning tree (forest) of `graph`
pub fn kruskal_mst(graph: &Graph) -> Result<i64> {
    Ok(minimum_spanning_forest(graph)?.total_weight())
}

/// Solve independent graphs in parallel, one union-find forest per graph
///
/// Results are returned in input order.
pub fn solve_all(graphs: &[Graph]) -> Vec<Result<i64>> {
    graphs.par_iter().map(kruskal_mst).collect()
}

impl Graph {
    pub fn minimum_spanning_forest(&self) -> Result<SpanningForest> {
        minimum_spanning_forest(self)
    }

    pub fn kruskal_mst(&self) -> Result<i64> {
        kruskal_mst(self)
    }
}
