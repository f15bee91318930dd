use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::Context;
use chrono::Local;

use stockwatch_inventory::AlertSettings;
use stockwatch_report::{ENV_CATALOG, ENV_TODAY, resolve_today, run};

fn main() -> anyhow::Result<()> {
    stockwatch_observability::init();

    let settings = AlertSettings::from_env().context("invalid alert settings")?;
    let today = resolve_today(
        std::env::var(ENV_TODAY).ok().as_deref(),
        Local::now().date_naive(),
    )?;

    let path = std::env::args().nth(1).or_else(|| std::env::var(ENV_CATALOG).ok());
    let reader: Box<dyn Read> = match &path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open catalog {path}"))?,
        )),
        None => {
            tracing::info!("reading catalog from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let report = run(reader, today, &settings)?;
    tracing::info!(
        %today,
        low_stock = report.alerts.low_stock.len(),
        expiry = report.alerts.expiry.len(),
        "alert report built"
    );

    serde_json::to_writer_pretty(io::stdout().lock(), &report).context("failed to write report")?;
    println!();
    Ok(())
}
