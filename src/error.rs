//! Ошибки пайплайна предобработки

use thiserror::Error;

/// Любая ошибка фатальна: пайплайн не восстанавливает частичные строки
/// и не имеет политики для вырожденного набора признаков.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("schema error: {0}")]
    Schema(String),

    #[error("row {row}: cannot parse {field} value '{value}'")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("degenerate feature set: {0}")]
    Degenerate(String),
}
