//! Сборка итоговой матрицы признаков и целевого вектора

#![allow(non_snake_case)]

use ndarray::{s, Array1, Array2};
use tracing::debug;

use crate::error::PipelineError;
use crate::frame::Frame;
use crate::pipeline::PipelineOutput;
use crate::preprocessing::encoding::OneHotEncoder;
use crate::preprocessing::normalization::StandardScaler;
use crate::types::TARGET_COLUMN;

pub struct Transformer;

impl Transformer {
    /// Стандартизует числовой блок, кодирует категориальный и
    /// склеивает их: сначала числовые признаки, затем индикаторы.
    ///
    /// Оба трансформера живут только в рамках одного прогона.
    pub fn transform(frame: Frame) -> Result<PipelineOutput, PipelineError> {
        let n = frame.nrows();

        let numeric_names: Vec<String> = frame
            .numeric_names()
            .into_iter()
            .filter(|c| c != TARGET_COLUMN)
            .collect();
        if numeric_names.is_empty() {
            return Err(PipelineError::Degenerate(
                "no numeric feature columns left after pruning".to_string(),
            ));
        }

        let mut X_num = Array2::zeros((n, numeric_names.len()));
        for (j, name) in numeric_names.iter().enumerate() {
            for (i, value) in frame.numeric(name)?.iter().enumerate() {
                X_num[[i, j]] = *value;
            }
        }
        let mut scaler = StandardScaler::new();
        let X_num = scaler.fit_transform(&X_num)?;

        let text_names = frame.text_names();
        let text_columns: Vec<&[String]> = text_names
            .iter()
            .map(|name| frame.text(name))
            .collect::<Result<_, _>>()?;
        let mut encoder = OneHotEncoder::new();
        let X_cat = encoder.fit_transform(&text_columns)?;

        let total = numeric_names.len() + X_cat.ncols();
        let mut features = Array2::zeros((n, total));
        features
            .slice_mut(s![.., ..numeric_names.len()])
            .assign(&X_num);
        if X_cat.ncols() > 0 {
            features
                .slice_mut(s![.., numeric_names.len()..])
                .assign(&X_cat);
        }

        let mut feature_names = numeric_names;
        feature_names.extend(encoder.feature_names());

        let target = Array1::from(frame.numeric(TARGET_COLUMN)?.to_vec());

        debug!(
            "assembled feature matrix {}x{}, target length {}",
            features.nrows(),
            features.ncols(),
            target.len()
        );
        Ok(PipelineOutput {
            features,
            feature_names,
            target,
        })
    }
}
