//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("边已存在: {0} - {1}")]
    DuplicateEdge(String, String),

    #[error("边不存在: {0} - {1}")]
    EdgeNotFound(String, String),

    #[error("不允许自环: {0}")]
    SelfLoop(String),

    #[error("路径不存在: {from} -> {to}")]
    NoPathExists { from: String, to: String },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV 错误: {0}")]
    CsvError(#[from] csv::Error),
}
