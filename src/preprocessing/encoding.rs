//! One-hot кодирование категориальных признаков

#![allow(non_snake_case)]

use std::collections::BTreeSet;

use ndarray::Array2;

use crate::error::PipelineError;

/// Разворачивает каждую текстовую колонку в индикаторные колонки,
/// по одной на обнаруженную категорию. Категории внутри колонки
/// упорядочены лексикографически, имя индикатора - само значение.
pub struct OneHotEncoder {
    categories: Vec<Vec<String>>,
    is_fitted: bool,
}

impl OneHotEncoder {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            is_fitted: false,
        }
    }

    pub fn fit(&mut self, columns: &[&[String]]) {
        self.categories = columns
            .iter()
            .map(|col| {
                col.iter()
                    .cloned()
                    .collect::<BTreeSet<String>>()
                    .into_iter()
                    .collect()
            })
            .collect();
        self.is_fitted = true;
    }

    pub fn transform(&self, columns: &[&[String]]) -> Result<Array2<f64>, PipelineError> {
        if !self.is_fitted {
            return Err(PipelineError::Schema("encoder not fitted".to_string()));
        }
        if columns.len() != self.categories.len() {
            return Err(PipelineError::Schema(format!(
                "encoder fitted on {} columns, got {}",
                self.categories.len(),
                columns.len()
            )));
        }

        let n = columns.first().map(|c| c.len()).unwrap_or(0);
        let total: usize = self.categories.iter().map(|c| c.len()).sum();
        let mut X = Array2::zeros((n, total));

        let mut offset = 0;
        for (col, cats) in columns.iter().zip(&self.categories) {
            for (row, value) in col.iter().enumerate() {
                let idx = cats.binary_search(value).map_err(|_| {
                    PipelineError::Schema(format!("unknown category '{value}'"))
                })?;
                X[[row, offset + idx]] = 1.0;
            }
            offset += cats.len();
        }

        Ok(X)
    }

    pub fn fit_transform(&mut self, columns: &[&[String]]) -> Result<Array2<f64>, PipelineError> {
        self.fit(columns);
        self.transform(columns)
    }

    /// Имена индикаторных колонок: категории всех колонок подряд,
    /// сгруппированные по исходной колонке.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories.iter().flatten().cloned().collect()
    }
}

impl Default for OneHotEncoder {
    fn default() -> Self {
        Self::new()
    }
}
