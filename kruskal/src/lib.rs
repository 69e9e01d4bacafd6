pub mod error;
pub mod graph;
pub mod input;
pub mod mst;
pub mod report;
pub mod union_find;

pub use error::{GraphError, ParseError};
pub use graph::{Edge, Graph, TotalWeight, VertexId, Weight};
pub use mst::{MstResult, compute_mst};
pub use union_find::DisjointSet;
