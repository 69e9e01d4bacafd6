use tracing::{debug, trace};

use crate::graph::{Edge, Graph, TotalWeight};
use crate::union_find::DisjointSet;

/// 最小全域木 (グラフが非連結なら最小全域森) の計算結果
///
/// `edges` は canonical 化済みで `(source, destination)` の昇順.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_weight: TotalWeight,
}

impl MstResult {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> TotalWeight {
        self.total_weight
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `vertex_count` 頂点を全て結ぶ木になっているか. false なら全域森.
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

/// Kruskal 法で最小全域木を求める.
///
/// 重みの等しい辺は入力順に処理されるが, 出力は常に `(source, destination)` 順に
/// 並べ直すので処理順には依存しない. 受理した辺が `V - 1` 本に達するか辺を使い切ったら終了する.
pub fn compute_mst(graph: &Graph) -> MstResult {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    debug!(
        vertices = vertex_count,
        edges = graph.edge_count(),
        "computing minimum spanning tree"
    );

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by_key(|e| e.weight);

    let mut ds = DisjointSet::new(vertex_count);
    let mut accepted: Vec<Edge> = Vec::with_capacity(target);

    for edge in sorted {
        if accepted.len() >= target {
            break;
        }
        let rs = ds.find(edge.source);
        let rd = ds.find(edge.destination);
        if rs == rd {
            trace!(
                ?edge,
                self_loop = edge.is_self_loop(),
                "rejected: would close a cycle"
            );
            continue;
        }
        ds.union(rs, rd);
        trace!(?edge, "accepted");
        accepted.push(edge);
    }

    let total_weight: TotalWeight = accepted
        .iter()
        .map(|e| TotalWeight::from(e.weight))
        .sum();

    let mut edges: Vec<Edge> = accepted.into_iter().map(Edge::canonical).collect();
    edges.sort_by_key(|e| (e.source, e.destination));

    let result = MstResult {
        edges,
        total_weight,
    };
    debug!(
        accepted = result.edge_count(),
        total_weight = %total_weight,
        spanning_tree = result.is_spanning_tree(vertex_count),
        components = ds.component_count(),
        "minimum spanning tree done"
    );
    result
}
