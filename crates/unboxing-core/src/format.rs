// Cell formatting for list and detail rendering

use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::Value;

/// How a column renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    /// Two decimal places.
    Money,
    /// `M/D/YYYY`
    Date,
}

/// One column of a list or one line of a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    /// Key in the record object.
    pub key: &'static str,
    pub format: CellFormat,
}

impl Column {
    pub const fn text(header: &'static str, key: &'static str) -> Self {
        Self {
            header,
            key,
            format: CellFormat::Text,
        }
    }

    pub const fn money(header: &'static str, key: &'static str) -> Self {
        Self {
            format: CellFormat::Money,
            ..Self::text(header, key)
        }
    }

    pub const fn date(header: &'static str, key: &'static str) -> Self {
        Self {
            format: CellFormat::Date,
            ..Self::text(header, key)
        }
    }

    /// Render this column's cell for `record`.
    pub fn render(&self, record: &Value) -> String {
        let value = record.get(self.key).unwrap_or(&Value::Null);
        match self.format {
            CellFormat::Text => text(value),
            CellFormat::Money => money(value),
            CellFormat::Date => date(value),
        }
    }
}

pub fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn money(value: &Value) -> String {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount.map_or_else(|| text(value), |amount| format!("{amount:.2}"))
}

/// Calendar date of an RFC 3339 timestamp or `YYYY-MM-DD` string, as
/// `M/D/YYYY`. The date is taken in the timestamp's own offset.
pub fn date(value: &Value) -> String {
    let Value::String(raw) = value else {
        return text(value);
    };
    let day = DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match day {
        Ok(day) => format!("{}/{}/{}", day.month(), day.day(), day.year()),
        Err(_) => "Invalid Date".into(),
    }
}
