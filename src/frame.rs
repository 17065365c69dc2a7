//! Колоночная таблица, передаваемая между стадиями пайплайна

use chrono::NaiveDate;

use crate::error::PipelineError;

/// Колонка таблицы. Date не считается ни числовой, ни категориальной
/// при отборе признаков (как datetime в pandas).
#[derive(Debug, Clone)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
    Date(Vec<NaiveDate>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Date(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Упорядоченный набор именованных колонок одинаковой длины.
///
/// Порядок колонок детерминирован: он определяет порядок признаков
/// в итоговой матрице.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Количество строк (0 для пустой таблицы).
    pub fn nrows(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Добавляет колонку в конец таблицы.
    pub fn push(&mut self, name: &str, column: Column) -> Result<(), PipelineError> {
        if self.columns.iter().any(|(n, _)| n == name) {
            return Err(PipelineError::Schema(format!("duplicate column '{name}'")));
        }
        if !self.columns.is_empty() && column.len() != self.nrows() {
            return Err(PipelineError::Schema(format!(
                "column '{}' has {} rows, expected {}",
                name,
                column.len(),
                self.nrows()
            )));
        }
        self.columns.push((name.to_string(), column));
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn numeric(&self, name: &str) -> Result<&[f64], PipelineError> {
        match self.column(name) {
            Some(Column::Numeric(v)) => Ok(v),
            Some(_) => Err(PipelineError::Schema(format!(
                "column '{name}' is not numeric"
            ))),
            None => Err(PipelineError::Schema(format!("missing column '{name}'"))),
        }
    }

    pub fn text(&self, name: &str) -> Result<&[String], PipelineError> {
        match self.column(name) {
            Some(Column::Text(v)) => Ok(v),
            Some(_) => Err(PipelineError::Schema(format!("column '{name}' is not text"))),
            None => Err(PipelineError::Schema(format!("missing column '{name}'"))),
        }
    }

    pub fn dates(&self, name: &str) -> Result<&[NaiveDate], PipelineError> {
        match self.column(name) {
            Some(Column::Date(v)) => Ok(v),
            Some(_) => Err(PipelineError::Schema(format!("column '{name}' is not date"))),
            None => Err(PipelineError::Schema(format!("missing column '{name}'"))),
        }
    }

    /// Имена числовых колонок в порядке таблицы.
    pub fn numeric_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|(_, c)| matches!(c, Column::Numeric(_)))
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Имена текстовых (категориальных) колонок в порядке таблицы.
    pub fn text_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|(_, c)| matches!(c, Column::Text(_)))
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Удаляет перечисленные колонки; отсутствующие имена игнорируются.
    pub fn drop_columns(&mut self, names: &[String]) {
        self.columns
            .retain(|(name, _)| !names.iter().any(|d| d == name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut frame = Frame::new();
        frame
            .push("rating", Column::Numeric(vec![97.0, 96.0]))
            .unwrap();
        frame
            .push("team", Column::Text(vec!["LAL".into(), "BKN".into()]))
            .unwrap();

        assert_eq!(frame.nrows(), 2);
        assert_eq!(frame.ncols(), 2);
        assert_eq!(frame.numeric("rating").unwrap(), &[97.0, 96.0]);
        assert_eq!(frame.text("team").unwrap()[0], "LAL");
        assert_eq!(frame.numeric_names(), vec!["rating".to_string()]);
        assert_eq!(frame.text_names(), vec!["team".to_string()]);
    }

    #[test]
    fn push_rejects_length_mismatch() {
        let mut frame = Frame::new();
        frame.push("a", Column::Numeric(vec![1.0, 2.0])).unwrap();
        let err = frame.push("b", Column::Numeric(vec![1.0])).unwrap_err();
        assert!(matches!(err, PipelineError::Schema(_)));
    }

    #[test]
    fn push_rejects_duplicate_name() {
        let mut frame = Frame::new();
        frame.push("a", Column::Numeric(vec![1.0])).unwrap();
        let err = frame.push("a", Column::Numeric(vec![2.0])).unwrap_err();
        assert!(matches!(err, PipelineError::Schema(_)));
    }

    #[test]
    fn wrong_type_is_schema_error() {
        let mut frame = Frame::new();
        frame.push("a", Column::Numeric(vec![1.0])).unwrap();
        assert!(frame.text("a").is_err());
        assert!(frame.numeric("missing").is_err());
    }

    #[test]
    fn drop_columns_preserves_order() {
        let mut frame = Frame::new();
        frame.push("a", Column::Numeric(vec![1.0])).unwrap();
        frame.push("b", Column::Numeric(vec![2.0])).unwrap();
        frame.push("c", Column::Numeric(vec![3.0])).unwrap();

        frame.drop_columns(&["b".to_string(), "nope".to_string()]);
        assert_eq!(frame.names(), vec!["a".to_string(), "c".to_string()]);
    }
}
