//! Chart.js configuration documents built from the projections.
//!
//! Each [`ChartSpec`] serializes to the `{type, data, options}` object that
//! `new Chart(ctx, config)` accepts.

use std::fmt::Write;

use derive_builder::Builder;
use log::info;
use serde::Serialize;

use crate::{
    chart::{self, SymbolProjection, TimeSeriesProjection},
    color::{Color, ColorLookup},
    data::{Dataset, Date},
    errors::ErrorRepr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Single(Option<Color>),
    PerPoint(Vec<Option<Color>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl Title {
    fn shown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: true,
        }
    }
}

impl Scales {
    fn titled(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: Axis {
                title: Title::shown(x),
            },
            y: Axis {
                title: Title::shown(y),
            },
        }
    }
}

/// Presentation text. Defaults reproduce the stock dashboard.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default)]
pub struct ChartSettings {
    /// strftime format of the time chart's x labels
    #[builder(setter(into))]
    pub label_format: String,
    /// time chart x axis; "<year> Date" when unset
    #[builder(setter(into, strip_option))]
    pub date_axis: Option<String>,
    #[builder(setter(into))]
    pub price_axis: String,
    #[builder(setter(into))]
    pub symbol_axis: String,
    #[builder(setter(into))]
    pub highest_axis: String,
    #[builder(setter(into))]
    pub highest_label: String,
    #[builder(setter(into))]
    pub average_label: String,
    /// bar and pie plot title; the covered date range when unset
    #[builder(setter(into, strip_option))]
    pub title: Option<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            label_format: "%m-%d".into(),
            date_axis: None,
            price_axis: "Stock Price (USD)".into(),
            symbol_axis: "Company".into(),
            highest_axis: "Highest Stock Price (USD)".into(),
            highest_label: "Highest".into(),
            average_label: "Average".into(),
            title: None,
        }
    }
}

impl ChartSettings {
    /// Rejects a label format chrono cannot render for a plain date, which
    /// covers unknown specifiers as well as time fields like `%H`.
    pub fn validate(&self) -> Result<(), ErrorRepr> {
        let mut sample = String::new();
        write!(sample, "{}", Date::MIN.format(&self.label_format))
            .map_err(|_| ErrorRepr::BadFormat(self.label_format.clone()))
    }

    fn date_axis_for(&self, first: Option<Date>) -> String {
        match (&self.date_axis, first) {
            (Some(text), _) => text.clone(),
            (None, Some(d)) => format!("{} Date", d.format("%Y")),
            (None, None) => "Date".into(),
        }
    }

    fn title_for(&self, range: Option<(Date, Date)>) -> Option<String> {
        self.title.clone().or_else(|| {
            range.map(|(from, to)| {
                format!(
                    "Stock Price from {} - {}",
                    from.format("%-m/%-d/%Y"),
                    to.format("%-m/%-d/%Y")
                )
            })
        })
    }
}

/// `settings` must pass [`ChartSettings::validate`].
pub fn line_chart(p: &TimeSeriesProjection, settings: &ChartSettings) -> ChartSpec {
    let labels = p
        .labels
        .iter()
        .map(|d| d.format(&settings.label_format).to_string())
        .collect();

    let datasets = p
        .lines
        .iter()
        .map(|line| ChartDataset {
            label: line.name.clone(),
            data: line.values.clone(),
            background_color: Paint::Single(line.color.clone()),
            border_color: Some(Paint::Single(line.color.clone())),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData { labels, datasets },
        options: ChartOptions {
            scales: Some(Scales::titled(
                settings.date_axis_for(p.labels.first().copied()),
                settings.price_axis.clone(),
            )),
            plugins: None,
        },
    }
}

fn symbol_data(p: &SymbolProjection, label: &str) -> ChartData {
    ChartData {
        labels: p.labels.clone(),
        datasets: vec![ChartDataset {
            label: label.to_owned(),
            data: p.values.clone(),
            background_color: Paint::PerPoint(p.colors.clone()),
            border_color: None,
        }],
    }
}

pub fn bar_chart(p: &SymbolProjection, settings: &ChartSettings, title: Option<String>) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: symbol_data(p, &settings.highest_label),
        options: ChartOptions {
            scales: Some(Scales::titled(
                settings.symbol_axis.clone(),
                settings.highest_axis.clone(),
            )),
            plugins: Some(Plugins {
                title: title.map(Title::shown),
                legend: Some(Legend { display: false }),
            }),
        },
    }
}

pub fn pie_chart(p: &SymbolProjection, settings: &ChartSettings, title: Option<String>) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        data: symbol_data(p, &settings.average_label),
        options: ChartOptions {
            scales: None,
            plugins: Some(Plugins {
                title: title.map(Title::shown),
                legend: None,
            }),
        },
    }
}

/// The three charts of the dashboard, keyed by their canvas ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dashboard {
    pub time_chart: ChartSpec,
    pub highest_price_chart: ChartSpec,
    pub average_price_chart: ChartSpec,
}

impl Dashboard {
    /// `ds` must already be normalized.
    pub fn build(
        ds: &Dataset,
        lookup: &impl ColorLookup,
        settings: &ChartSettings,
    ) -> Result<Self, ErrorRepr> {
        settings.validate()?;

        let time = chart::time_series(ds, lookup)?;
        let highest = chart::maximum_by_symbol(ds, lookup)?;
        let average = chart::average_by_symbol(ds, lookup)?;

        let range = time.labels.first().copied().zip(time.labels.last().copied());
        let title = settings.title_for(range);
        info!(
            "built charts for {} symbols over {} dates",
            highest.labels.len(),
            time.labels.len()
        );

        Ok(Self {
            time_chart: line_chart(&time, settings),
            highest_price_chart: bar_chart(&highest, settings, title.clone()),
            average_price_chart: pie_chart(&average, settings, title),
        })
    }

    pub fn charts(&self) -> [(&'static str, &ChartSpec); 3] {
        [
            ("time-chart", &self.time_chart),
            ("highest-price-chart", &self.highest_price_chart),
            ("average-price-chart", &self.average_price_chart),
        ]
    }
}
