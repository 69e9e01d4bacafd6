//! グラフ入力の読み込み
//!
//! テキスト形式: 1 行目が頂点数 V, 以降 1 行 1 辺で `source destination weight`
//! (1-based, 空白またはカンマ区切り). 空行は無視する.
//!
//! JSON 形式: `{"vertexCount": V, "edges": [{"source": s, "destination": d, "weight": w}]}`
//! (こちらも 1-based).

use serde::Deserialize;

use crate::error::ParseError;
use crate::graph::{Edge, Graph, VertexId, Weight};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    Text,
    Json,
}

pub fn parse(input: &str, format: InputFormat) -> Result<Graph, ParseError> {
    match format {
        InputFormat::Text => parse_text(input),
        InputFormat::Json => parse_json(input),
    }
}

pub fn parse_text(input: &str) -> Result<Graph, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, text) = lines.next().ok_or(ParseError::MissingVertexCount)?;
    let vertex_count: usize = text.parse().map_err(|_| ParseError::InvalidVertexCount {
        line,
        text: text.to_string(),
    })?;

    let mut edges = Vec::new();
    for (line, text) in lines {
        edges.push(parse_edge_line(line, text)?);
    }
    tracing::debug!(vertex_count, edges = edges.len(), "parsed text graph");

    Ok(Graph::new(vertex_count, edges)?)
}

fn parse_edge_line(line: usize, text: &str) -> Result<Edge, ParseError> {
    let malformed = || ParseError::MalformedEdge {
        line,
        text: text.to_string(),
    };

    let fields: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
        .collect();
    let [source, destination, weight] = fields.as_slice() else {
        return Err(malformed());
    };

    let source: VertexId = source.parse().map_err(|_| malformed())?;
    let destination: VertexId = destination.parse().map_err(|_| malformed())?;
    let weight: Weight = weight.parse().map_err(|_| malformed())?;
    if source == 0 || destination == 0 {
        return Err(ParseError::ZeroVertex { line });
    }
    Ok(Edge::new(source - 1, destination - 1, weight))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonGraph {
    vertex_count: usize,
    #[serde(default)]
    edges: Vec<JsonEdge>,
}

#[derive(Debug, Deserialize)]
struct JsonEdge {
    source: VertexId,
    destination: VertexId,
    weight: Weight,
}

pub fn parse_json(input: &str) -> Result<Graph, ParseError> {
    let raw: JsonGraph = serde_json::from_str(input)?;
    let mut edges = Vec::with_capacity(raw.edges.len());
    for (i, e) in raw.edges.iter().enumerate() {
        if e.source == 0 || e.destination == 0 {
            return Err(ParseError::ZeroVertexInEdge { edge: i + 1 });
        }
        edges.push(Edge::new(e.source - 1, e.destination - 1, e.weight));
    }
    tracing::debug!(
        vertex_count = raw.vertex_count,
        edges = edges.len(),
        "parsed JSON graph"
    );
    Ok(Graph::new(raw.vertex_count, edges)?)
}
