use crate::graph::VertexId;

/// Graph 構築時のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("edge {edge}: vertex {vertex} is out of range (vertex count {vertex_count})")]
    VertexOutOfRange {
        edge: usize,
        vertex: VertexId,
        vertex_count: usize,
    },
}

/// 入力テキスト / JSON の読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty: missing vertex count")]
    MissingVertexCount,
    #[error("line {line}: invalid vertex count {text:?}")]
    InvalidVertexCount { line: usize, text: String },
    #[error("line {line}: expected `source destination weight`, got {text:?}")]
    MalformedEdge { line: usize, text: String },
    #[error("line {line}: vertex ids are 1-based, found 0")]
    ZeroVertex { line: usize },
    #[error("edge #{edge}: vertex ids are 1-based, found 0")]
    ZeroVertexInEdge { edge: usize },
    #[error("invalid JSON graph")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
