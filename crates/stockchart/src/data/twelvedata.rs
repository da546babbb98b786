//! Twelve Data `time_series` batch responses.
//!
//! A batch response is an object keyed by the requested symbol:
//!
//! ```json
//! {"GME": {"meta": {"symbol": "GME", ...},
//!          "values": [{"datetime": "2022-08-24", "high": "40.03", ...}],
//!          "status": "ok"}}
//! ```
//!
//! Values arrive newest first and every number is text. Records are parsed
//! into [`PriceRecord`]s here so nothing downstream sees text.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::{Dataset, Date, PriceRecord, SymbolSeries};
use crate::errors::ErrorRepr;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMeta {
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSeries {
    pub meta: Option<RawMeta>,
    pub values: Vec<RawRecord>,
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub datetime: String,
    #[serde(default)]
    pub high: Option<RawDecimal>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDecimal {
    Text(String),
    Number(f64),
}

fn parse_decimal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl RawRecord {
    pub fn parse(self, sym: &str) -> Result<PriceRecord, ErrorRepr> {
        let malformed = |field, value: String| ErrorRepr::MalformedInput {
            symbol: sym.to_owned(),
            field,
            value,
        };

        let date = Date::parse_from_str(&self.datetime, "%Y-%m-%d")
            .map_err(|_| malformed("datetime", self.datetime.clone()))?;

        let high = match self.high {
            Some(RawDecimal::Text(s)) => parse_decimal(&s).ok_or_else(|| malformed("high", s))?,
            Some(RawDecimal::Number(v)) if v.is_finite() => v,
            Some(RawDecimal::Number(v)) => return Err(malformed("high", v.to_string())),
            None => return Err(malformed("high", "null".to_owned())),
        };

        Ok(PriceRecord { date, high })
    }
}

impl RawSeries {
    /// `key` is the symbol the series was filed under in the response.
    /// `meta.symbol` wins when present.
    pub fn into_series(self, key: &str) -> Result<SymbolSeries, ErrorRepr> {
        if self.status.as_deref() == Some("error") {
            return Err(ErrorRepr::Upstream {
                symbol: key.to_owned(),
                message: self.message.unwrap_or_default(),
            });
        }

        let sym = self
            .meta
            .and_then(|m| m.symbol)
            .unwrap_or_else(|| key.to_owned());

        let records = self
            .values
            .into_iter()
            .map(|r| r.parse(&sym))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("ingested {} records for {}", records.len(), sym);
        Ok(SymbolSeries { sym, records })
    }
}

/// Picks `symbols` out of a batch response, in that order. Series that were
/// not asked for are never decoded.
pub fn parse_dataset<S: AsRef<str>>(json: &[u8], symbols: &[S]) -> Result<Dataset, ErrorRepr> {
    let response: HashMap<String, Value> = serde_json::from_slice(json)?;

    symbols
        .iter()
        .map(|sym| {
            let sym = sym.as_ref();
            let raw = response
                .get(sym)
                .ok_or_else(|| ErrorRepr::NotExists(sym.to_owned()))?;
            RawSeries::deserialize(raw)?.into_series(sym)
        })
        .collect()
}
