use log::debug;

use crate::data::{Dataset, PriceRecord, SymbolSeries};

/// Stable sort by date, oldest first.
pub fn normalize_records(records: &mut [PriceRecord]) {
    records.sort_by_key(|r| r.date);
}

pub fn is_ascending(records: &[PriceRecord]) -> bool {
    records.windows(2).all(|w| w[0].date <= w[1].date)
}

impl SymbolSeries {
    pub fn normalized(mut self) -> Self {
        normalize_records(&mut self.records);
        self
    }
}

impl Dataset {
    /// Consumes the loaded dataset and returns it with every series in
    /// chronological order. Run once, before anything reads the data.
    pub fn normalized(self) -> Self {
        let ds: Dataset = self
            .into_series()
            .into_iter()
            .map(SymbolSeries::normalized)
            .collect();
        debug!("normalized {} series", ds.len());
        ds
    }
}
