//! Получение и загрузка сырого датасета
//!
//! Скачивание и кэширование файла - забота внешнего коллаборатора;
//! ядру нужен только локальный путь, поэтому граница оформлена
//! одной способностью `DatasetSource::local_path`.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineError;
use crate::types::RawPlayerRow;

/// Поставщик датасета: возвращает читаемый путь к файлу.
pub trait DatasetSource {
    fn local_path(&self) -> Result<PathBuf, PipelineError>;
}

/// Датасет, уже лежащий на диске (фикстуры в тестах, кэш в проде).
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for LocalFileSource {
    fn local_path(&self) -> Result<PathBuf, PipelineError> {
        if self.path.is_file() {
            Ok(self.path.clone())
        } else {
            Err(PipelineError::Io {
                path: self.path.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "dataset file not found",
                ),
            })
        }
    }
}

/// Читает сырые строки из произвольного reader-а.
///
/// Любая некорректная строка фатальна: частичная загрузка не
/// предусмотрена. Отсутствующая колонка всплывает здесь же как
/// ошибка десериализации.
pub fn read_raw_rows<R: Read>(rdr: R) -> Result<Vec<RawPlayerRow>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.deserialize().collect()
}

/// Загружает сырые строки из CSV-файла.
pub fn load_raw_rows(path: &Path) -> Result<Vec<RawPlayerRow>, PipelineError> {
    let file = std::fs::File::open(path).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let rows = read_raw_rows(file).map_err(|e| PipelineError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("loaded {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "full_name,rating,jersey,team,position,b_day,height,weight,salary,country,draft_year,draft_round,draft_peak,college,version";

    #[test]
    fn raw_csv_deserializes() {
        let csv_data = format!(
            "{HEADER}\n\
             LeBron James,97,#23,Los Angeles Lakers,F,12/30/84,6-9 / 2.06,250 lbs. / 113.4 kg.,$37436858,USA,2003,1,1,,NBA2k20"
        );

        let rows = read_raw_rows(csv_data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name, "LeBron James");
        assert!((rows[0].rating - 97.0).abs() < f64::EPSILON);
        assert_eq!(rows[0].team.as_deref(), Some("Los Angeles Lakers"));
        assert_eq!(rows[0].college, None);
        assert_eq!(rows[0].version, "NBA2k20");
    }

    #[test]
    fn missing_column_is_fatal() {
        // нет колонки version
        let csv_data = "\
full_name,rating,jersey,team,position,b_day,height,weight,salary,country,draft_year,draft_round,draft_peak,college
LeBron James,97,#23,Los Angeles Lakers,F,12/30/84,6-9 / 2.06,250 lbs. / 113.4 kg.,$37436858,USA,2003,1,1,";

        assert!(read_raw_rows(csv_data.as_bytes()).is_err());
    }

    #[test]
    fn malformed_row_is_fatal() {
        let csv_data = format!(
            "{HEADER}\n\
             Bad Row,not_a_number,#1,Team,F,01/01/90,6-9 / 2.06,250 lbs. / 113.4 kg.,$100,USA,2010,1,1,,NBA2k20"
        );

        assert!(read_raw_rows(csv_data.as_bytes()).is_err());
    }

    #[test]
    fn empty_csv_returns_empty_vec() {
        let rows = read_raw_rows(HEADER.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn local_source_requires_existing_file() {
        let source = LocalFileSource::new("/definitely/not/there.csv");
        assert!(matches!(
            source.local_path(),
            Err(PipelineError::Io { .. })
        ));
    }
}
