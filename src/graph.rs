/// Weighted undirected graph stored as an edge list
use crate::error::{non_negative, Error, Result};
use std::fmt;

/// Vertex index in `[0, vertices)`
pub type VertexId = usize;

/// Undirected weighted edge; weights may be zero or negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: i64) -> Self {
        Edge { from, to, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(VertexId, VertexId, i64)> for Edge {
    fn from((from, to, weight): (VertexId, VertexId, i64)) -> Self {
        Edge::new(from, to, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} : {}", self.from, self.to, self.weight)
    }
}

/// Fixed vertex count plus an owned, ordered list of edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Graph {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Create a graph from a signed vertex count
    pub fn try_new(vertices: i64) -> Result<Self> {
        Ok(Self::new(non_negative("vertex count", vertices)?))
    }

    /// Create a graph from `(from, to, weight)` triples, in order
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, i64)>,
    {
        Graph {
            vertices,
            edges: edges.into_iter().map(Edge::from).collect(),
        }
    }

    /// Append an undirected edge. Endpoints are checked when the graph is
    /// solved, not here.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: i64) {
        self.edges.push(Edge::new(from, to, weight));
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Fail with `OutOfRange` on the first edge whose endpoint is not a vertex
    pub fn validate(&self) -> Result<()> {
        for edge in &self.edges {
            for index in [edge.from, edge.to] {
                if index >= self.vertices {
                    return Err(Error::OutOfRange {
                        index,
                        len: self.vertices,
                    });
                }
            }
        }
        Ok(())
    }
}
