//! Нормализация числовых признаков

#![allow(non_snake_case)]

use ndarray::{Array1, Array2, Axis};

use crate::error::PipelineError;

/// Приведение к нулевому среднему и единичной дисперсии (ddof = 0).
pub struct StandardScaler {
    mean: Option<Array1<f64>>,
    std: Option<Array1<f64>>,
    is_fitted: bool,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
            is_fitted: false,
        }
    }

    pub fn fit(&mut self, X: &Array2<f64>) -> Result<(), PipelineError> {
        if X.nrows() == 0 {
            return Err(PipelineError::Degenerate(
                "cannot standardize an empty dataset".to_string(),
            ));
        }

        let mean = X
            .mean_axis(Axis(0))
            .ok_or_else(|| PipelineError::Degenerate("failed to compute mean".to_string()))?;
        let std = X.std_axis(Axis(0), 0.0);

        // Колонка без дисперсии не масштабируется осмысленно;
        // политики для такого признака у пайплайна нет.
        if let Some(col) = std.iter().position(|s| *s < 1e-10) {
            return Err(PipelineError::Degenerate(format!(
                "numeric column at index {col} has zero variance"
            )));
        }

        self.mean = Some(mean);
        self.std = Some(std);
        self.is_fitted = true;
        Ok(())
    }

    pub fn transform(&self, X: &Array2<f64>) -> Result<Array2<f64>, PipelineError> {
        if !self.is_fitted {
            return Err(PipelineError::Schema("scaler not fitted".to_string()));
        }

        let mean = self
            .mean
            .as_ref()
            .ok_or_else(|| PipelineError::Schema("mean not computed".to_string()))?;
        let std = self
            .std
            .as_ref()
            .ok_or_else(|| PipelineError::Schema("std not computed".to_string()))?;

        // (X - mean) / std
        let mut normalized = X.clone();
        for mut row in normalized.rows_mut() {
            for (i, val) in row.iter_mut().enumerate() {
                *val = (*val - mean[i]) / std[i];
            }
        }

        Ok(normalized)
    }

    pub fn fit_transform(&mut self, X: &Array2<f64>) -> Result<Array2<f64>, PipelineError> {
        self.fit(X)?;
        self.transform(X)
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}
