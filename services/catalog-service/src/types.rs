use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use common::{Platform, PricePair, Requirements};

/// Create payload. `id` and the timestamps are never client-settable.
/// Numeric fields follow the catalog's silent-default policy: absent or
/// non-numeric input coerces to 0, and range checks run afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub publisher: String,
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platform_prices: BTreeMap<Platform, PricePair>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub discount: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    pub requirements: Option<Requirements>,
}

/// Partial update payload; `None` keeps the stored value. The merged
/// document is re-validated before the write.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub platforms: Option<Vec<Platform>>,
    pub genres: Option<Vec<String>>,
    pub platform_prices: Option<BTreeMap<Platform, PricePair>>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub discount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub stock: Option<i64>,
    pub is_available: Option<bool>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub trailer: Option<String>,
    pub requirements: Option<Requirements>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn default_true() -> bool {
    true
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).unwrap_or(0.0))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_i64(&value).unwrap_or(0))
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_f64(&value).unwrap_or(0.0)))
}

fn lenient_opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_i64(&value).unwrap_or(0)))
}
