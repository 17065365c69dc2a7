//! Оркестрация стадий пайплайна

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::info;

use crate::dataset::{self, DatasetSource};
use crate::error::PipelineError;
use crate::preprocessing::{Cleaner, CollinearityPruner, FeatureEngineer, Transformer};
use crate::types::PipelineConfig;

/// Итог пайплайна: матрица признаков и выровненный с ней по строкам
/// целевой вектор.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub features: Array2<f64>,
    pub feature_names: Vec<String>,
    pub target: Array1<f64>,
}

/// Сводка для вызывающей стороны: формы и итоговый список признаков.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub shape: ((usize, usize), (usize,)),
    pub features: Vec<String>,
}

impl PipelineOutput {
    pub fn report(&self) -> PipelineReport {
        PipelineReport {
            shape: (
                (self.features.nrows(), self.features.ncols()),
                (self.target.len(),),
            ),
            features: self.feature_names.clone(),
        }
    }
}

/// Прогоняет все четыре стадии над датасетом источника.
///
/// Стадии выполняются строго последовательно, весь датасет целиком
/// в памяти; ошибка любой стадии прерывает прогон.
pub fn run_pipeline(
    source: &dyn DatasetSource,
    config: &PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    let path = source.local_path()?;
    let rows = dataset::load_raw_rows(&path)?;

    let frame = Cleaner::clean(&rows)?;
    info!("clean: {} rows, {} columns", frame.nrows(), frame.ncols());

    let frame = FeatureEngineer::engineer(frame, config)?;
    info!("engineer: {} rows, {} columns", frame.nrows(), frame.ncols());

    let frame = CollinearityPruner::prune(frame, config)?;
    info!("prune: {} rows, {} columns", frame.nrows(), frame.ncols());

    let output = Transformer::transform(frame)?;
    info!(
        "transform: {}x{} features, {} targets",
        output.features.nrows(),
        output.features.ncols(),
        output.target.len()
    );
    Ok(output)
}
