use calamine::{Data, ExcelDateTime};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A cell as read from the workbook, before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    /// Time of day with no date part.
    Time(NaiveTime),
    /// Elapsed time (`[h]:mm:ss` formatted cells).
    Duration(Duration),
    /// Formula error text such as `#DIV/0!`.
    Error(String),
}

/// Excel serials below one carry no date, only a time of day.
fn excel_datetime(dt: &ExcelDateTime) -> RawCell {
    if dt.is_duration() {
        return dt
            .as_duration()
            .map_or(RawCell::Float(dt.as_f64()), RawCell::Duration);
    }
    match dt.as_datetime() {
        Some(value) if (0.0..1.0).contains(&dt.as_f64()) => RawCell::Time(value.time()),
        Some(value) => RawCell::DateTime(value),
        None => RawCell::Float(dt.as_f64()),
    }
}

/// ISO 8601 text produced by some writers for date cells.
fn iso_datetime(text: &str) -> RawCell {
    if let Ok(value) = text.parse::<NaiveDateTime>() {
        RawCell::DateTime(value)
    } else if let Ok(value) = text.parse::<NaiveDate>() {
        RawCell::Date(value)
    } else if let Ok(value) = text.parse::<NaiveTime>() {
        RawCell::Time(value)
    } else {
        RawCell::String(text.to_string())
    }
}

impl From<&Data> for RawCell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => RawCell::Empty,
            Data::Bool(b) => RawCell::Bool(*b),
            Data::Int(i) => RawCell::Int(*i),
            Data::Float(f) => RawCell::Float(*f),
            Data::String(s) => RawCell::String(s.clone()),
            Data::DateTime(dt) => excel_datetime(dt),
            Data::DateTimeIso(s) => iso_datetime(s),
            Data::DurationIso(s) => RawCell::String(s.clone()),
            Data::Error(e) => RawCell::Error(e.to_string()),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::String(s.to_string())
    }
}

impl From<String> for RawCell {
    fn from(s: String) -> Self {
        RawCell::String(s)
    }
}

impl From<i64> for RawCell {
    fn from(i: i64) -> Self {
        RawCell::Int(i)
    }
}

impl From<f64> for RawCell {
    fn from(f: f64) -> Self {
        RawCell::Float(f)
    }
}

impl From<NaiveDateTime> for RawCell {
    fn from(value: NaiveDateTime) -> Self {
        RawCell::DateTime(value)
    }
}

impl From<NaiveDate> for RawCell {
    fn from(value: NaiveDate) -> Self {
        RawCell::Date(value)
    }
}

impl From<NaiveTime> for RawCell {
    fn from(value: NaiveTime) -> Self {
        RawCell::Time(value)
    }
}
