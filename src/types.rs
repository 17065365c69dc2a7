/// Типы данных для пайплайна предобработки

use serde::Deserialize;

/// Целевая переменная; никогда не удаляется при прунинге.
pub const TARGET_COLUMN: &str = "salary";

/// Порог уникальных значений для категориальных признаков.
pub const CARDINALITY_THRESHOLD: usize = 50;

/// Порог |r| для пары коллинеарных числовых признаков.
pub const CORRELATION_THRESHOLD: f64 = 0.5;

/// Сырая строка датасета nba2k-full.csv, как она лежит в файле.
///
/// height/weight/salary остаются строками со смешанными единицами,
/// парсинг выполняет Cleaner. team и college могут быть пустыми.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerRow {
    pub full_name: String,
    pub rating: f64,
    pub jersey: String,
    pub team: Option<String>,
    pub position: String,
    pub b_day: String,
    pub height: String,
    pub weight: String,
    pub salary: String,
    pub country: String,
    pub draft_year: String,
    pub draft_round: String,
    pub draft_peak: String,
    pub college: Option<String>,
    pub version: String,
}

/// Конфигурация стадий пайплайна.
///
/// Пороги передаются явно, а не через глобальное состояние,
/// чтобы каждая стадия оставалась чистой и тестируемой.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub cardinality_threshold: usize,
    pub correlation_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cardinality_threshold: CARDINALITY_THRESHOLD,
            correlation_threshold: CORRELATION_THRESHOLD,
        }
    }
}
