//! Отсев коллинеарных числовых признаков

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::PipelineError;
use crate::frame::Frame;
use crate::types::{PipelineConfig, TARGET_COLUMN};

pub struct CollinearityPruner;

impl CollinearityPruner {
    /// Для каждой пары признаков с |r| выше порога помечает к удалению
    /// тот, что слабее коррелирует с целевой переменной.
    ///
    /// Корреляционная матрица считается один раз; пометки не
    /// пересчитываются после удаления, колонка удаляется однократно,
    /// сколькими бы парами ни была номинирована.
    pub fn prune(mut frame: Frame, config: &PipelineConfig) -> Result<Frame, PipelineError> {
        let numeric = frame.numeric_names();
        if !numeric.iter().any(|c| c == TARGET_COLUMN) {
            return Err(PipelineError::Schema(format!(
                "target column '{TARGET_COLUMN}' missing before pruning"
            )));
        }
        let target = frame.numeric(TARGET_COLUMN)?.to_vec();
        let features: Vec<String> = numeric.into_iter().filter(|c| c != TARGET_COLUMN).collect();

        let mut to_drop: BTreeSet<String> = BTreeSet::new();
        for i in 0..features.len() {
            for j in (i + 1)..features.len() {
                let xi = frame.numeric(&features[i])?;
                let xj = frame.numeric(&features[j])?;
                if pearson(xi, xj).abs() > config.correlation_threshold {
                    // при равенстве уходит первый член пары
                    if pearson(&target, xi) <= pearson(&target, xj) {
                        to_drop.insert(features[i].clone());
                    } else {
                        to_drop.insert(features[j].clone());
                    }
                }
            }
        }

        if !to_drop.is_empty() {
            debug!("dropping collinear columns: {:?}", to_drop);
            let names: Vec<String> = to_drop.into_iter().collect();
            frame.drop_columns(&names);
        }
        Ok(frame)
    }
}

/// Коэффициент корреляции Пирсона; NaN для вырожденных колонок.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    if n == 0.0 {
        return f64::NAN;
    }
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        cov += dx * dy;
        sx += dx * dx;
        sy += dy * dy;
    }
    cov / (sx.sqrt() * sy.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    fn frame_with(columns: Vec<(&str, Vec<f64>)>) -> Frame {
        let mut frame = Frame::new();
        for (name, values) in columns {
            frame.push(name, Column::Numeric(values)).unwrap();
        }
        frame
    }

    #[test]
    fn pearson_of_identical_series_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_of_constant_series_is_nan() {
        let x = [1.0, 2.0, 3.0];
        let c = [5.0, 5.0, 5.0];
        assert!(pearson(&x, &c).is_nan());
    }

    #[test]
    fn weaker_target_correlation_is_dropped() {
        // corr(a, b) ~ 0.82 > 0.5; corr(salary, a) ~ 0.82 < corr(salary, b) = 1
        let frame = frame_with(vec![
            ("a", vec![2.0, 1.0, 4.0, 3.0, 6.0]),
            ("b", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("salary", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ]);
        let frame = CollinearityPruner::prune(frame, &PipelineConfig::default()).unwrap();
        assert!(!frame.contains("a"));
        assert!(frame.contains("b"));
        assert!(frame.contains("salary"));
    }

    #[test]
    fn uncorrelated_columns_pass_through() {
        let frame = frame_with(vec![
            ("a", vec![1.0, -1.0, 1.0, -1.0, 1.0]),
            ("b", vec![1.0, 2.0, 3.0, 2.0, 1.0]),
            ("salary", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ]);
        let before = frame.ncols();
        let frame = CollinearityPruner::prune(frame, &PipelineConfig::default()).unwrap();
        assert_eq!(frame.ncols(), before);
    }

    #[test]
    fn mutually_correlated_trio_leaves_one_survivor() {
        // все три попарно коррелированы выше порога
        let frame = frame_with(vec![
            ("c1", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("c2", vec![2.0, 4.0, 6.0, 8.0, 10.0]),
            ("c3", vec![1.0, 2.0, 3.0, 4.0, 6.0]),
            ("salary", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ]);
        let frame = CollinearityPruner::prune(frame, &PipelineConfig::default()).unwrap();
        let survivors = ["c1", "c2", "c3"]
            .iter()
            .filter(|c| frame.contains(c))
            .count();
        assert_eq!(survivors, 1);
        assert!(frame.contains("salary"));
    }

    #[test]
    fn target_is_never_dropped() {
        let frame = frame_with(vec![
            ("a", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("salary", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ]);
        // a коррелирует с salary на 1.0, но пары сравниваются только
        // между нецелевыми признаками
        let frame = CollinearityPruner::prune(frame, &PipelineConfig::default()).unwrap();
        assert!(frame.contains("a"));
        assert!(frame.contains("salary"));
    }

    #[test]
    fn missing_target_is_schema_error() {
        let frame = frame_with(vec![("a", vec![1.0, 2.0])]);
        assert!(matches!(
            CollinearityPruner::prune(frame, &PipelineConfig::default()),
            Err(PipelineError::Schema(_))
        ));
    }

    #[test]
    fn categorical_columns_pass_through() {
        let mut frame = frame_with(vec![
            ("a", vec![1.0, 2.0, 3.0]),
            ("salary", vec![3.0, 2.0, 1.0]),
        ]);
        frame
            .push(
                "team",
                Column::Text(vec!["LAL".into(), "BKN".into(), "LAL".into()]),
            )
            .unwrap();
        let frame = CollinearityPruner::prune(frame, &PipelineConfig::default()).unwrap();
        assert!(frame.contains("team"));
    }
}
