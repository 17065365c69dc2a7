//! Очистка сырых полей датасета

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::PipelineError;
use crate::frame::{Column, Frame};
use crate::types::RawPlayerRow;

/// Метрическая часть ростовой строки вида "6-9 / 2.06".
fn metric_height_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d[.,]\d{1,2}").expect("static pattern"))
}

pub struct Cleaner;

impl Cleaner {
    /// Приводит сырые строки к очищенной таблице.
    ///
    /// Порядок колонок повторяет порядок полей в CSV. Количество строк
    /// сохраняется: стадия только преобразует значения.
    pub fn clean(rows: &[RawPlayerRow]) -> Result<Frame, PipelineError> {
        let n = rows.len();
        let mut full_name = Vec::with_capacity(n);
        let mut rating = Vec::with_capacity(n);
        let mut jersey = Vec::with_capacity(n);
        let mut team = Vec::with_capacity(n);
        let mut position = Vec::with_capacity(n);
        let mut b_day = Vec::with_capacity(n);
        let mut height = Vec::with_capacity(n);
        let mut weight = Vec::with_capacity(n);
        let mut salary = Vec::with_capacity(n);
        let mut country = Vec::with_capacity(n);
        let mut draft_year = Vec::with_capacity(n);
        let mut draft_round = Vec::with_capacity(n);
        let mut draft_peak = Vec::with_capacity(n);
        let mut college = Vec::with_capacity(n);
        let mut version = Vec::with_capacity(n);

        for (row, raw) in rows.iter().enumerate() {
            full_name.push(raw.full_name.clone());
            rating.push(raw.rating);
            jersey.push(raw.jersey.clone());
            // пропуск команды - явная категория, а не NaN
            team.push(
                raw.team
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "No Team".to_string()),
            );
            position.push(raw.position.clone());
            b_day.push(parse_birth_date(&raw.b_day, row)?);
            height.push(parse_height(&raw.height, row)?);
            weight.push(parse_weight(&raw.weight, row)?);
            salary.push(parse_salary(&raw.salary, row)?);
            // бинарная категория: USA / Not-USA
            country.push(if raw.country == "USA" {
                "USA".to_string()
            } else {
                "Not-USA".to_string()
            });
            draft_year.push(parse_draft_year(&raw.draft_year, row)?);
            draft_round.push(if raw.draft_round == "Undrafted" {
                "0".to_string()
            } else {
                raw.draft_round.clone()
            });
            draft_peak.push(raw.draft_peak.clone());
            college.push(raw.college.clone().unwrap_or_default());
            version.push(raw.version.clone());
        }

        let mut frame = Frame::new();
        frame.push("full_name", Column::Text(full_name))?;
        frame.push("rating", Column::Numeric(rating))?;
        frame.push("jersey", Column::Text(jersey))?;
        frame.push("team", Column::Text(team))?;
        frame.push("position", Column::Text(position))?;
        frame.push("b_day", Column::Date(b_day))?;
        frame.push("height", Column::Numeric(height))?;
        frame.push("weight", Column::Numeric(weight))?;
        frame.push("salary", Column::Numeric(salary))?;
        frame.push("country", Column::Text(country))?;
        frame.push("draft_year", Column::Date(draft_year))?;
        frame.push("draft_round", Column::Text(draft_round))?;
        frame.push("draft_peak", Column::Text(draft_peak))?;
        frame.push("college", Column::Text(college))?;
        frame.push("version", Column::Text(version))?;

        debug!("cleaned {} rows, {} columns", frame.nrows(), frame.ncols());
        Ok(frame)
    }
}

fn parse_birth_date(raw: &str, row: usize) -> Result<NaiveDate, PipelineError> {
    NaiveDate::parse_from_str(raw.trim(), "%m/%d/%y").map_err(|_| PipelineError::Parse {
        row,
        field: "b_day",
        value: raw.to_string(),
    })
}

/// Год драфта нормализуется к 1 января.
fn parse_draft_year(raw: &str, row: usize) -> Result<NaiveDate, PipelineError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .ok_or_else(|| PipelineError::Parse {
            row,
            field: "draft_year",
            value: raw.to_string(),
        })
}

/// Рост хранится как "6-9 / 2.06": берём метрическое значение в метрах.
fn parse_height(raw: &str, row: usize) -> Result<f64, PipelineError> {
    metric_height_re()
        .find(raw)
        .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
        .ok_or_else(|| PipelineError::Parse {
            row,
            field: "height",
            value: raw.to_string(),
        })
}

/// Вес хранится как "225 lbs. / 102.1 kg.": берём килограммы.
fn parse_weight(raw: &str, row: usize) -> Result<f64, PipelineError> {
    raw.split('/')
        .nth(1)
        .map(|metric| metric.replace("kg.", ""))
        .and_then(|metric| metric.trim().parse::<f64>().ok())
        .ok_or_else(|| PipelineError::Parse {
            row,
            field: "weight",
            value: raw.to_string(),
        })
}

/// Зарплата хранится как "$37436858": валютный префикс обязателен.
fn parse_salary(raw: &str, row: usize) -> Result<f64, PipelineError> {
    raw.trim()
        .strip_prefix('$')
        .and_then(|rest| rest.trim().parse::<f64>().ok())
        .ok_or_else(|| PipelineError::Parse {
            row,
            field: "salary",
            value: raw.to_string(),
        })
}
