use serde::Serialize;

use crate::{
    data::{PriceRecord, Symbol, SymbolSeries},
    errors::ErrorRepr,
};

/// Highest `high` across the records.
///
/// The running maximum starts at 0, so an empty slice gives 0 and a slice of
/// only negative highs also gives 0. Daily highs of listed stocks are never
/// negative, which keeps the result correct for real data.
pub fn maximum(records: &[PriceRecord]) -> f64 {
    records.iter().fold(0.0, |acc, r| if r.high > acc { r.high } else { acc })
}

/// Arithmetic mean of `high`. `sym` only labels the error.
pub fn average(sym: &str, records: &[PriceRecord]) -> Result<f64, ErrorRepr> {
    if records.is_empty() {
        return Err(ErrorRepr::EmptySeries(sym.to_owned()));
    }
    let total: f64 = records.iter().map(|r| r.high).sum();
    Ok(total / records.len() as f64)
}

pub trait Statistics {
    type Stats;
    fn stats(&self) -> Self::Stats;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub sym: Symbol,
    pub maximum: f64,
    pub average: f64,
}

impl SymbolSeries {
    pub fn maximum(&self) -> f64 {
        maximum(&self.records)
    }

    pub fn average(&self) -> Result<f64, ErrorRepr> {
        average(&self.sym, &self.records)
    }
}

impl Statistics for SymbolSeries {
    type Stats = Result<AggregateStats, ErrorRepr>;

    fn stats(&self) -> Self::Stats {
        Ok(AggregateStats {
            sym: self.sym.clone(),
            maximum: self.maximum(),
            average: self.average()?,
        })
    }
}
