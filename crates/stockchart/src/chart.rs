use itertools::{EitherOrBoth, Itertools};
use log::warn;
use serde::Serialize;

use crate::{
    color::{Color, ColorLookup},
    data::{Dataset, Date, Symbol, SymbolSeries},
    errors::ErrorRepr,
};

/// One line of the time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesLine {
    pub name: Symbol,
    pub values: Vec<f64>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesProjection {
    pub labels: Vec<Date>,
    pub lines: Vec<SeriesLine>,
}

/// One value per symbol; `labels[i]`, `values[i]` and `colors[i]` describe the
/// same symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolProjection {
    pub labels: Vec<Symbol>,
    pub values: Vec<f64>,
    pub colors: Vec<Option<Color>>,
}

fn lookup_color(lookup: &impl ColorLookup, sym: &str) -> Option<Color> {
    let color = lookup.color(sym);
    if color.is_none() {
        warn!("no color assigned to {}", sym);
    }
    color
}

fn representative(ds: &Dataset) -> Result<&SymbolSeries, ErrorRepr> {
    ds.representative().ok_or(ErrorRepr::EmptyDataset)
}

/// Every series must carry exactly the representative's dates.
pub fn check_alignment(ds: &Dataset) -> Result<(), ErrorRepr> {
    let reference = representative(ds)?;

    for s in ds.iter().skip(1) {
        let diverged = reference
            .dates()
            .zip_longest(s.dates())
            .find(|pair| !matches!(pair, EitherOrBoth::Both(a, b) if a == b));

        let (expected, found) = match diverged {
            None => continue,
            Some(EitherOrBoth::Both(a, b)) => (a.to_string(), b.to_string()),
            Some(EitherOrBoth::Left(a)) => (a.to_string(), "end of series".to_owned()),
            Some(EitherOrBoth::Right(b)) => ("end of series".to_owned(), b.to_string()),
        };
        return Err(ErrorRepr::Misaligned {
            symbol: s.sym.clone(),
            expected,
            found,
        });
    }
    Ok(())
}

pub fn time_series(
    ds: &Dataset,
    lookup: &impl ColorLookup,
) -> Result<TimeSeriesProjection, ErrorRepr> {
    check_alignment(ds)?;

    let labels = representative(ds)?.dates().collect();
    let lines = ds
        .iter()
        .map(|s| SeriesLine {
            name: s.sym.clone(),
            values: s.highs().collect(),
            color: lookup_color(lookup, &s.sym),
        })
        .collect();

    Ok(TimeSeriesProjection { labels, lines })
}

fn by_symbol<F>(
    ds: &Dataset,
    lookup: &impl ColorLookup,
    value: F,
) -> Result<SymbolProjection, ErrorRepr>
where
    F: Fn(&SymbolSeries) -> Result<f64, ErrorRepr>,
{
    if ds.is_empty() {
        return Err(ErrorRepr::EmptyDataset);
    }

    Ok(SymbolProjection {
        labels: ds.symbols().cloned().collect(),
        values: ds.iter().map(value).collect::<Result<_, _>>()?,
        colors: ds.symbols().map(|sym| lookup_color(lookup, sym)).collect(),
    })
}

pub fn maximum_by_symbol(
    ds: &Dataset,
    lookup: &impl ColorLookup,
) -> Result<SymbolProjection, ErrorRepr> {
    by_symbol(ds, lookup, |s| Ok(s.maximum()))
}

pub fn average_by_symbol(
    ds: &Dataset,
    lookup: &impl ColorLookup,
) -> Result<SymbolProjection, ErrorRepr> {
    by_symbol(ds, lookup, SymbolSeries::average)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        color::{MockColorLookup, Palette},
        data::{
            tests::{build_series, date, get_test_data},
            twelvedata::parse_dataset,
            PriceRecord,
        },
    };

    fn two_symbols() -> Dataset {
        Dataset::new(vec![
            build_series("A", &[1.0, 5.0, 3.0]),
            build_series("B", &[2.0, 2.0, 2.0]),
        ])
    }

    fn ab_palette() -> Palette {
        Palette::empty()
            .with("A", Color::new("red"))
            .with("B", Color::new("blue"))
    }

    #[test]
    fn test_maximum_by_symbol() {
        let p = maximum_by_symbol(&two_symbols(), &ab_palette()).unwrap();
        assert_eq!(p.labels, vec!["A", "B"]);
        assert_eq!(p.values, vec![5.0, 2.0]);
        assert_eq!(
            p.colors,
            vec![Some(Color::new("red")), Some(Color::new("blue"))]
        );
    }

    #[test]
    fn test_average_by_symbol() {
        let p = average_by_symbol(&two_symbols(), &ab_palette()).unwrap();
        assert_eq!(p.labels, vec!["A", "B"]);
        assert_eq!(p.values, vec![3.0, 2.0]);
    }

    #[test]
    fn test_order_preserved() {
        let ds = Dataset::new(vec![
            build_series("B", &[2.0, 2.0, 2.0]),
            build_series("A", &[1.0, 5.0, 3.0]),
        ]);
        let p = maximum_by_symbol(&ds, &ab_palette()).unwrap();
        assert_eq!(p.labels, vec!["B", "A"]);
        assert_eq!(p.values, vec![2.0, 5.0]);
        assert_eq!(
            p.colors,
            vec![Some(Color::new("blue")), Some(Color::new("red"))]
        );
    }

    #[test]
    fn test_time_series() {
        let ds = parse_dataset(&get_test_data(), &["GME", "MSFT", "DIS", "BNTX"])
            .unwrap()
            .normalized();
        let p = time_series(&ds, &Palette::default()).unwrap();

        assert_eq!(p.labels.len(), 6);
        assert_eq!(p.labels[0], date("2022-07-14"));
        assert_eq!(p.lines.len(), 4);
        for line in &p.lines {
            assert_eq!(line.values.len(), p.labels.len());
            assert!(line.color.is_some());
        }
        assert_eq!(p.lines[0].name, "GME");
        assert_eq!(p.lines[0].values[0], 33.12);
        assert_eq!(p.lines[0].values[5], 39.38);
    }

    #[test]
    fn test_lookup_called_per_symbol() {
        let mut lookup = MockColorLookup::new();
        lookup
            .expect_color()
            .with(eq("A"))
            .times(1)
            .return_const(Some(Color::new("red")));
        lookup
            .expect_color()
            .with(eq("B"))
            .times(1)
            .return_const(None::<Color>);

        let p = time_series(&two_symbols(), &lookup).unwrap();
        assert_eq!(p.lines[0].color, Some(Color::new("red")));
        assert_eq!(p.lines[1].color, None);
    }

    #[test]
    fn test_unknown_symbol_has_no_color() {
        let p = average_by_symbol(&two_symbols(), &Palette::default()).unwrap();
        assert_eq!(p.colors, vec![None::<Color>, None]);
    }

    #[test]
    fn test_misaligned_length() {
        let ds = Dataset::new(vec![
            build_series("A", &[1.0, 5.0, 3.0]),
            build_series("B", &[2.0, 2.0]),
        ]);
        assert_eq!(
            time_series(&ds, &ab_palette()),
            Err(ErrorRepr::Misaligned {
                symbol: "B".into(),
                expected: "2022-07-16".into(),
                found: "end of series".into(),
            })
        );
    }

    #[test]
    fn test_misaligned_date() {
        let mut b = build_series("B", &[2.0, 2.0, 2.0]);
        b.records[1] = PriceRecord::new(date("2022-07-18"), 2.0);
        let ds = Dataset::new(vec![build_series("A", &[1.0, 5.0, 3.0]), b]);

        assert_eq!(
            check_alignment(&ds),
            Err(ErrorRepr::Misaligned {
                symbol: "B".into(),
                expected: "2022-07-15".into(),
                found: "2022-07-18".into(),
            })
        );
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::default();
        assert_eq!(
            time_series(&ds, &ab_palette()),
            Err(ErrorRepr::EmptyDataset)
        );
        assert_eq!(
            maximum_by_symbol(&ds, &ab_palette()),
            Err(ErrorRepr::EmptyDataset)
        );
    }

    #[test]
    fn test_average_empty_series() {
        let ds = Dataset::new(vec![
            build_series("A", &[1.0]),
            SymbolSeries::new("B", vec![]),
        ]);
        assert_eq!(
            average_by_symbol(&ds, &ab_palette()),
            Err(ErrorRepr::EmptySeries("B".into()))
        );
        // the maximum of an empty series is 0
        assert_eq!(
            maximum_by_symbol(&ds, &ab_palette()).unwrap().values,
            vec![1.0, 0.0]
        );
    }
}
