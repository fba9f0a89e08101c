// Library exports for mstkit
pub mod error;
pub mod graph;
pub mod kruskal;
pub mod union_find;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId};
pub use kruskal::{kruskal_mst, minimum_spanning_forest, solve_all, SpanningForest};
pub use union_find::DisjointSet;
