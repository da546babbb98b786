pub mod twelvedata;

use serde::{Deserialize, Serialize};

pub type Date = chrono::NaiveDate;
pub type Symbol = String;

/// One daily observation. Only the fields the charts read are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: Date,
    pub high: f64,
}

impl PriceRecord {
    pub fn new(date: Date, high: f64) -> Self {
        Self { date, high }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolSeries {
    pub sym: Symbol,
    pub records: Vec<PriceRecord>,
}

impl SymbolSeries {
    pub fn new(sym: impl Into<Symbol>, records: Vec<PriceRecord>) -> Self {
        Self {
            sym: sym.into(),
            records,
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.records.iter().map(|r| r.date)
    }

    pub fn highs(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.high)
    }

    pub fn first_date(&self) -> Option<Date> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<Date> {
        self.records.last().map(|r| r.date)
    }
}

/// Symbol keyed series, enumerated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    series: Vec<SymbolSeries>,
}

impl Dataset {
    pub fn new(series: Vec<SymbolSeries>) -> Self {
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolSeries> {
        self.series.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.series.iter().map(|s| &s.sym)
    }

    pub fn get(&self, sym: &str) -> Option<&SymbolSeries> {
        self.series.iter().find(|s| s.sym == sym)
    }

    /// The series whose dates label the shared time axis.
    pub fn representative(&self) -> Option<&SymbolSeries> {
        self.series.first()
    }

    pub fn into_series(self) -> Vec<SymbolSeries> {
        self.series
    }
}

impl FromIterator<SymbolSeries> for Dataset {
    fn from_iter<I: IntoIterator<Item = SymbolSeries>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SymbolSeries;
    type IntoIter = std::slice::Iter<'a, SymbolSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
