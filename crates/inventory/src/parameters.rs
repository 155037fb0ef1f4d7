use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult, LocationName, ValueObject};

/// Consumption model shared by every location in an evaluation run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockParameters {
    /// Units consumed per day.
    pub daily_usage: i64,
    /// Buffer kept on top of lead-time consumption.
    pub safety_stock: i64,
    /// Days between placing and receiving an order.
    pub lead_time_days: i64,
}

impl ValueObject for StockParameters {}

impl StockParameters {
    /// Build validated parameters (all values must be non-negative).
    pub fn new(daily_usage: i64, safety_stock: i64, lead_time_days: i64) -> DomainResult<Self> {
        let params = Self {
            daily_usage,
            safety_stock,
            lead_time_days,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("daily_usage", self.daily_usage)?;
        ensure_non_negative("safety_stock", self.safety_stock)?;
        ensure_non_negative("lead_time_days", self.lead_time_days)?;
        Ok(())
    }

    /// Parse parameters from raw text fields, e.g. form inputs or a header row.
    pub fn from_raw(daily_usage: &str, safety_stock: &str, lead_time_days: &str) -> DomainResult<Self> {
        Self::new(
            parse_quantity("daily_usage", Some(daily_usage))?,
            parse_quantity("safety_stock", Some(safety_stock))?,
            parse_quantity("lead_time_days", Some(lead_time_days))?,
        )
    }
}

/// One inventory location at the moment of evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: LocationName,
    pub current_stock: i64,
    /// Free-form postal address; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LocationRecord {
    pub fn new(name: LocationName, current_stock: i64) -> Self {
        Self {
            name,
            current_stock,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// An ingested row before any numeric interpretation.
///
/// Every column is optional text. Columns not listed here are ignored when
/// deserializing. The per-row parameter columns override the run's defaults
/// when present and non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLocationRow {
    pub name: Option<String>,
    pub address: Option<String>,
    pub current_stock: Option<String>,
    pub daily_usage: Option<String>,
    pub safety_stock: Option<String>,
    pub lead_time_days: Option<String>,
}

impl RawLocationRow {
    /// Interpret the row against the run's default parameters.
    pub fn resolve(&self, defaults: &StockParameters) -> DomainResult<(LocationRecord, StockParameters)> {
        let name = match self.name.as_deref() {
            Some(raw) => LocationName::new(raw)?,
            None => return Err(DomainError::missing("name")),
        };
        let current_stock = parse_quantity("current_stock", self.current_stock.as_deref())?;
        ensure_non_negative("current_stock", current_stock)?;

        let parameters = StockParameters::new(
            override_or("daily_usage", self.daily_usage.as_deref(), defaults.daily_usage)?,
            override_or("safety_stock", self.safety_stock.as_deref(), defaults.safety_stock)?,
            override_or("lead_time_days", self.lead_time_days.as_deref(), defaults.lead_time_days)?,
        )?;

        let record = LocationRecord::new(name, current_stock);
        let record = match self.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => record.with_address(address),
            _ => record,
        };

        Ok((record, parameters))
    }
}

fn override_or(field: &'static str, raw: Option<&str>, default: i64) -> DomainResult<i64> {
    match raw {
        Some(v) if !v.trim().is_empty() => parse_quantity(field, Some(v)),
        _ => Ok(default),
    }
}

/// Parse a whole-number quantity.
///
/// Spreadsheet exports often write integers as `500.0`; those are accepted as
/// long as the fractional part is zero.
pub(crate) fn parse_quantity(field: &'static str, raw: Option<&str>) -> DomainResult<i64> {
    let text = match raw.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(DomainError::missing(field)),
    };

    if let Ok(v) = text.parse::<i64>() {
        return Ok(v);
    }

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(v as i64),
        _ => Err(DomainError::invalid_number(field, text)),
    }
}

fn ensure_non_negative(field: &'static str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(())
}
