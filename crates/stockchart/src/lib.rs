pub mod chart;
pub mod color;
pub mod data;
pub mod errors;
pub mod normalize;
pub mod render;
pub mod stats;

pub use color::{Color, ColorLookup, Palette};
pub use data::{twelvedata::parse_dataset, Dataset, PriceRecord, Symbol, SymbolSeries};
pub use errors::ErrorRepr;
pub use render::{ChartSettings, ChartSettingsBuilder, Dashboard};

/// The dashboard's symbols, in display order.
pub const DEFAULT_SYMBOLS: [&str; 4] = ["GME", "MSFT", "DIS", "BNTX"];

#[cfg(test)]
mod tests {
    use more_asserts::*;

    use super::*;
    use crate::{
        data::tests::{build_series, get_test_data},
        normalize::is_ascending,
        stats::Statistics,
    };

    #[test]
    fn test_pipeline() {
        let ds = parse_dataset(&get_test_data(), &DEFAULT_SYMBOLS)
            .unwrap()
            .normalized();
        assert!(ds.iter().all(|s| is_ascending(&s.records)));

        let d = Dashboard::build(&ds, &Palette::default(), &ChartSettings::default()).unwrap();

        let highest = &d.highest_price_chart.data;
        let average = &d.average_price_chart.data;
        assert_eq!(highest.labels, DEFAULT_SYMBOLS);
        assert_eq!(average.labels, DEFAULT_SYMBOLS);

        for (i, s) in ds.iter().enumerate() {
            let stats = s.stats().unwrap();
            assert_eq!(highest.datasets[0].data[i], stats.maximum);
            assert_eq!(average.datasets[0].data[i], stats.average);
            assert_le!(stats.average, stats.maximum);
        }

        // MSFT 255.14 .. 264.78 over six sessions
        let msft = ds.get("MSFT").unwrap().stats().unwrap();
        assert_eq!(msft.maximum, 264.78);
        assert_lt!((msft.average - 260.315).abs(), 1e-9);
    }

    #[test]
    fn test_two_symbol_scenario() {
        let ds = Dataset::new(vec![
            build_series("A", &[1.0, 5.0, 3.0]),
            build_series("B", &[2.0, 2.0, 2.0]),
        ]);
        let lookup = |_: &str| None::<Color>;

        let highest = chart::maximum_by_symbol(&ds, &lookup).unwrap();
        assert_eq!(highest.labels, vec!["A", "B"]);
        assert_eq!(highest.values, vec![5.0, 2.0]);

        let average = chart::average_by_symbol(&ds, &lookup).unwrap();
        assert_eq!(average.labels, vec!["A", "B"]);
        assert_eq!(average.values, vec![3.0, 2.0]);
    }
}
