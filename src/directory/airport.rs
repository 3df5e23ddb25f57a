//! # Airport Record
//!
//! The single entity served by the directory, plus the normalization that
//! turns a loosely-typed request body into a stored record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default elevation for records that omit it
pub const DEFAULT_ELEVATION: i64 = 0;

/// Default latitude/longitude for records that omit them
pub const DEFAULT_COORDINATE: f64 = 0.0;

/// A normalized airport record
///
/// Every optional field carries its declared default, so a stored record is
/// always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO code, the primary key
    pub icao: String,

    #[serde(default)]
    pub iata: String,

    pub name: String,

    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub elevation: i64,

    #[serde(default)]
    pub lat: f64,

    #[serde(default)]
    pub lon: f64,

    #[serde(default)]
    pub tz: String,
}

impl Airport {
    /// Build a record with only the required fields; everything else defaulted.
    pub fn new(icao: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            icao: icao.into(),
            iata: String::new(),
            name: name.into(),
            city: city.into(),
            state: String::new(),
            country: String::new(),
            elevation: DEFAULT_ELEVATION,
            lat: DEFAULT_COORDINATE,
            lon: DEFAULT_COORDINATE,
            tz: String::new(),
        }
    }

    /// Normalize a request body into a record.
    ///
    /// Returns `None` when any of `icao`, `name` or `city` is absent or empty.
    /// Optional fields that are absent, null, empty, zero or of an unusable
    /// type fall back to their defaults individually.
    pub fn normalize(body: &Value) -> Option<Self> {
        let icao = string_field(body, "icao")?;
        let name = string_field(body, "name")?;
        let city = string_field(body, "city")?;

        Some(Self {
            icao,
            iata: string_field(body, "iata").unwrap_or_default(),
            name,
            city,
            state: string_field(body, "state").unwrap_or_default(),
            country: string_field(body, "country").unwrap_or_default(),
            elevation: integer_field(body, "elevation").unwrap_or(DEFAULT_ELEVATION),
            lat: float_field(body, "lat").unwrap_or(DEFAULT_COORDINATE),
            lon: float_field(body, "lon").unwrap_or(DEFAULT_COORDINATE),
            tz: string_field(body, "tz").unwrap_or_default(),
        })
    }

    /// Check the required-field invariant for records coming from elsewhere
    /// (the seed dataset).
    pub fn has_required_fields(&self) -> bool {
        !self.icao.is_empty() && !self.name.is_empty() && !self.city.is_empty()
    }
}

/// The `icao` a body would be stored under, if it has a usable one.
///
/// Used for the conflict check, which runs before the rest of the body is
/// validated. Coerces exactly like `normalize`, so `1234` and `"1234"` are
/// the same code.
pub fn body_icao(body: &Value) -> Option<String> {
    string_field(body, "icao")
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn integer_field(body: &Value, key: &str) -> Option<i64> {
    let value = match body.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }?;
    (value != 0).then_some(value)
}

fn float_field(body: &Value, key: &str) -> Option<f64> {
    let value = match body.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (value.is_finite() && value != 0.0).then_some(value)
}
