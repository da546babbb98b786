pub mod data;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use stockchart::{ChartSettings, Dashboard, Palette};

use data::load_dataset;

#[derive(Parser, Debug)]
#[command(version, about = "Builds the stock price chart configs from a Twelve Data snapshot")]
struct Cli {
    /// Twelve Data `time_series` batch response
    #[arg(long, value_name = "FILE", default_value = "stock_data.json")]
    data: PathBuf,
    /// Symbols to chart, in display order
    #[arg(long, value_delimiter = ',', default_value = "GME,MSFT,DIS,BNTX")]
    symbols: Vec<String>,
    /// Write one `<canvas-id>.json` per chart here instead of printing
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

async fn write_charts(dashboard: &Dashboard, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("create {}", dir.display()))?;

    let mut written = Vec::with_capacity(3);
    for (name, spec) in dashboard.charts() {
        let path = dir.join(format!("{}.json", name));
        let body = serde_json::to_vec_pretty(spec)?;
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let symbols = cli.symbols.iter().map(|s| s.trim()).unique().collect_vec();
    if symbols.len() != cli.symbols.len() {
        warn!("duplicate symbols dropped: {:?}", cli.symbols);
    }

    let ds = load_dataset(&cli.data, &symbols).await?;
    let dashboard = Dashboard::build(&ds, &Palette::default(), &ChartSettings::default())
        .context("build charts")?;

    match cli.out {
        Some(dir) => {
            write_charts(&dashboard, &dir).await?;
        }
        None => println!("{}", serde_json::to_string_pretty(&dashboard)?),
    }
    Ok(())
}
