//! Wire parameter encoding.
//!
//! [`QueryParams`] holds the logical, optional inputs of a request and
//! [`QueryParams::encode`] turns them into the ISS query vocabulary. Inputs
//! that are absent *or* falsy (empty text, empty column list, interval `0`)
//! are left out of the query altogether; the two cases are distinct in the
//! types but encode identically.

use std::fmt::{Display, Formatter};

use crate::domain::CURSOR_TABLE;
use crate::CandleInterval;

/// Scalar value of one query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    Text(String),
    Int(i64),
}

impl Display for WireValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Ordered ISS query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireQuery {
    params: Vec<(String, WireValue)>,
}

impl WireQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, replacing an earlier one with the same name.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<WireValue>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    fn set(&mut self, name: String, value: WireValue) {
        if let Some(slot) = self.params.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.params.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&WireValue> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WireValue)> {
        self.params.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Percent-encoded `name=value&...` form, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&value.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Logical inputs of the wire encoder.
///
/// `table` and `columns` are independent: a table alone yields only the
/// `iss.only` directive; columns without a table are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub q: Option<String>,
    pub interval: Option<u32>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub date: Option<String>,
    pub table: Option<String>,
    pub columns: Option<Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn interval(mut self, interval: impl Into<u32>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn candle_interval(self, interval: CandleInterval) -> Self {
        self.interval(interval)
    }

    pub fn encode(&self) -> WireQuery {
        let mut query = WireQuery::new();

        if let Some(q) = non_empty(&self.q) {
            query.set(String::from("q"), WireValue::from(q));
        }
        if let Some(interval) = self.interval.filter(|interval| *interval != 0) {
            query.set(String::from("interval"), WireValue::Int(i64::from(interval)));
        }
        if let Some(start) = non_empty(&self.start) {
            query.set(String::from("from"), WireValue::from(start));
        }
        if let Some(end) = non_empty(&self.end) {
            query.set(String::from("till"), WireValue::from(end));
        }
        if let Some(date) = non_empty(&self.date) {
            query.set(String::from("date"), WireValue::from(date));
        }
        if let Some(table) = non_empty(&self.table) {
            query.set(
                String::from("iss.only"),
                WireValue::Text(format!("{table},{CURSOR_TABLE}")),
            );

            if let Some(columns) = self.columns.as_ref().filter(|columns| !columns.is_empty()) {
                query.set(format!("{table}.columns"), WireValue::Text(columns.join(",")));
            }
        }

        query
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
