use serde::Serialize;

use crate::graph::{TotalWeight, VertexId, Weight};
use crate::mst::MstResult;

pub const SUMMARY_HEADER: &str = "A summary of the constructed MST";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(
    result: &MstResult,
    vertex_count: usize,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result, vertex_count),
    }
}

/// ヘッダ, 総重み, 各辺 (1-based の `s d`) を 1 行ずつ出力する
pub fn render_text(result: &MstResult) -> String {
    let mut lines = vec![SUMMARY_HEADER.to_string(), result.total_weight().to_string()];
    lines.extend(
        result
            .edges()
            .iter()
            .map(|e| format!("{} {}", e.source + 1, e.destination + 1)),
    );
    lines.join("\n") + "\n"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    total_weight: TotalWeight,
    edge_count: usize,
    spanning_tree: bool,
    edges: Vec<JsonEdge>,
}

#[derive(Debug, Serialize)]
struct JsonEdge {
    source: VertexId,
    destination: VertexId,
    weight: Weight,
}

pub fn render_json(result: &MstResult, vertex_count: usize) -> serde_json::Result<String> {
    let report = JsonReport {
        total_weight: result.total_weight(),
        edge_count: result.edge_count(),
        spanning_tree: result.is_spanning_tree(vertex_count),
        edges: result
            .edges()
            .iter()
            .map(|e| JsonEdge {
                source: e.source + 1,
                destination: e.destination + 1,
                weight: e.weight,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
