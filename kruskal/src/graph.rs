use crate::error::GraphError;

/// 0-based の頂点番号
pub type VertexId = usize;
pub type Weight = i64;
/// 辺の重みの総和. `i64` の重みを頂点数分足してもあふれない幅.
pub type TotalWeight = i128;

/// 無向・重み付きの辺
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// source <= destination の向きにそろえた辺を返す
    #[must_use]
    pub fn canonical(self) -> Self {
        if self.source > self.destination {
            Self {
                source: self.destination,
                destination: self.source,
                weight: self.weight,
            }
        } else {
            self
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// 頂点数と辺リスト。全ての端点が `[0, vertex_count)` にあることを保証する.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        for (i, edge) in edges.iter().enumerate() {
            for vertex in [edge.source, edge.destination] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        edge: i,
                        vertex,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_swaps_reversed_endpoints() {
        let e = Edge::new(3, 1, 7).canonical();
        assert_eq!(e, Edge::new(1, 3, 7));
        assert_eq!(Edge::new(1, 3, 7).canonical(), Edge::new(1, 3, 7));
    }

    #[test]
    fn canonical_is_idempotent() {
        for e in [Edge::new(0, 0, 1), Edge::new(5, 2, -3), Edge::new(2, 5, 9)] {
            assert_eq!(e.canonical().canonical(), e.canonical());
        }
    }

    #[test]
    fn self_loop_is_allowed() {
        let g = Graph::new(2, vec![Edge::new(1, 1, 4)]).unwrap();
        assert!(g.edges()[0].is_self_loop());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let err = Graph::new(3, vec![Edge::new(0, 1, 1), Edge::new(2, 3, 1)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                edge: 1,
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn empty_graph_is_valid() {
        let g = Graph::new(0, vec![]).unwrap();
        assert_eq!(g.vertex_count(), 0);
        assert!(g.edges().is_empty());
    }
}
