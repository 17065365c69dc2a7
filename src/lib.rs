//! NBA2k ML - подготовка данных для предсказания зарплат (Rust)

pub mod dataset;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod preprocessing;
pub mod types;

pub use error::PipelineError;
pub use frame::{Column, Frame};
pub use preprocessing::*;
pub use types::*;

// Re-export для удобства
pub use dataset::{DatasetSource, LocalFileSource};
pub use pipeline::{run_pipeline, PipelineOutput, PipelineReport};
