use chrono::NaiveDateTime;

/// Timestamp cell as it came out of the loader.
///
/// Only `DateTime` is a genuine chronological value; the other variants are
/// what a log column degrades to when it could not be parsed as a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTimestamp {
    DateTime(NaiveDateTime),
    Numeric(i64),
    Text(String),
}

impl RawTimestamp {
    /// Interpret a raw cell using the given chrono formats, in order.
    pub fn parse(s: &str, formats: &[String]) -> Self {
        let s = s.trim();

        for fmt in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return RawTimestamp::DateTime(dt);
            }
        }

        match s.parse::<i64>() {
            Ok(n) => RawTimestamp::Numeric(n),
            Err(_) => RawTimestamp::Text(s.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RawTimestamp::DateTime(_) => "datetime",
            RawTimestamp::Numeric(_) => "numeric",
            RawTimestamp::Text(_) => "text",
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            RawTimestamp::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl std::fmt::Display for RawTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawTimestamp::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            RawTimestamp::Numeric(n) => write!(f, "{n}"),
            RawTimestamp::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// One row of a daily location log, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub customer_no: String,
    pub timestamp: RawTimestamp,
    pub location: Option<String>,
}

impl RawEvent {
    pub fn new(customer_no: impl Into<String>, timestamp: RawTimestamp, location: Option<&str>) -> Self {
        Self {
            customer_no: customer_no.into(),
            timestamp,
            location: location.map(str::to_string),
        }
    }
}

/// A log row whose timestamp has been proven chronological.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub customer_no: String,
    pub timestamp: NaiveDateTime,
    pub location: Option<String>,
}

impl From<Observation> for RawEvent {
    fn from(o: Observation) -> Self {
        Self {
            customer_no: o.customer_no,
            timestamp: RawTimestamp::DateTime(o.timestamp),
            location: o.location,
        }
    }
}
