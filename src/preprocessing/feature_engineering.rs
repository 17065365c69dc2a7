//! Feature engineering: производные признаки и отсев колонок

use std::collections::HashSet;

use chrono::Datelike;
use tracing::debug;

use crate::error::PipelineError;
use crate::frame::{Column, Frame};
use crate::types::PipelineConfig;

/// Поля, полностью поглощённые производными признаками.
const CONSUMED_COLUMNS: [&str; 5] = ["version", "b_day", "draft_year", "weight", "height"];

pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Добавляет age, experience и bmi, затем убирает поглощённые и
    /// высококардинальные колонки.
    pub fn engineer(mut frame: Frame, config: &PipelineConfig) -> Result<Frame, PipelineError> {
        let n = frame.nrows();
        let mut age = Vec::with_capacity(n);
        let mut experience = Vec::with_capacity(n);
        let mut bmi = Vec::with_capacity(n);

        {
            let versions = frame.text("version")?;
            let b_days = frame.dates("b_day")?;
            let draft_years = frame.dates("draft_year")?;
            let weights = frame.numeric("weight")?;
            let heights = frame.numeric("height")?;

            for row in 0..n {
                let year = snapshot_year(&versions[row], row)?;
                // целые годы, без поправки на месяц и день
                age.push(f64::from(year - b_days[row].year()));
                experience.push(f64::from(year - draft_years[row].year()));
                bmi.push(weights[row] / heights[row] / heights[row]);
            }
        }

        // Высококардинальные категории (имена, колледжи) не несут
        // обобщаемого сигнала и взорвали бы one-hot кодирование.
        let mut to_drop: Vec<String> = Vec::new();
        for name in frame.text_names() {
            if let Ok(values) = frame.text(&name) {
                let distinct: HashSet<&str> = values.iter().map(String::as_str).collect();
                if distinct.len() > config.cardinality_threshold {
                    to_drop.push(name);
                }
            }
        }
        if !to_drop.is_empty() {
            debug!("dropping high-cardinality columns: {:?}", to_drop);
        }
        to_drop.extend(CONSUMED_COLUMNS.iter().map(|c| c.to_string()));

        frame.drop_columns(&to_drop);
        frame.push("age", Column::Numeric(age))?;
        frame.push("experience", Column::Numeric(experience))?;
        frame.push("bmi", Column::Numeric(bmi))?;
        Ok(frame)
    }
}

/// Год снапшота из строки вида "NBA2k20".
///
/// Двузначный год разворачивается как в pandas: 00-68 -> 2000-е,
/// 69-99 -> 1900-е.
fn snapshot_year(version: &str, row: usize) -> Result<i32, PipelineError> {
    version
        .strip_prefix("NBA2k")
        .and_then(|yy| yy.parse::<i32>().ok())
        .filter(|yy| (0..=99).contains(yy))
        .map(|yy| if yy <= 68 { 2000 + yy } else { 1900 + yy })
        .ok_or_else(|| PipelineError::Parse {
            row,
            field: "version",
            value: version.to_string(),
        })
}
