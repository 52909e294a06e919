//! Index command: SPI or SPEI from a dated CSV file.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use caeli_index::{IndexKind, Severity, standardize, standardize_monthly};
use caeli_io::{read_csv, write_series_csv, write_table_csv};

use crate::cli::IndexArgs;
use crate::config::CaeliConfig;
use crate::convert;

/// Run the index pipeline for `kind`.
pub fn run(kind: IndexKind, args: IndexArgs) -> Result<()> {
    let _cmd = info_span!("index", %kind).entered();

    // 1. Load optional TOML config
    let config = match args.config {
        Some(ref path) => CaeliConfig::load(path)?,
        None => CaeliConfig::default(),
    };

    // 2. Merge CLI overrides and build crate configs
    let reader_cfg = convert::build_reader_config(&config.io, &args)?;
    if kind == IndexKind::Spei && reader_cfg.pet_column().is_none() {
        warn!("no PET column configured; values are used as the water balance directly");
    }
    if kind == IndexKind::Spi && reader_cfg.pet_column().is_some() {
        bail!("a PET column only applies to spei");
    }

    // 3. Read input
    info!(path = %args.input.display(), "reading input");
    let series = read_csv(&args.input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", args.input.display()))?;

    // 4. Compute and write
    if args.flat {
        let fit_cfg = convert::build_fit_config(&config.index)?;
        let index = standardize(series.values(), kind.family(), &fit_cfg)?;
        log_severity_counts(&index);
        match args.output {
            Some(ref path) => {
                write_series_csv(path, series.dates(), series.values(), &index, kind)
                    .with_context(|| format!("failed to write CSV: {}", path.display()))?;
            }
            None => {
                println!("{:>10} {:>10} {:>8}", "date", "value", kind.to_string());
                for ((d, v), z) in series.dates().iter().zip(series.values()).zip(&index) {
                    println!("{:>10} {v:>10.2} {z:>8.2}", d.format("%Y-%m-%d"));
                }
            }
        }
    } else {
        let monthly_cfg = convert::build_monthly_config(&config.index, &args)?;
        let table = standardize_monthly(series.dates(), series.values(), kind, &monthly_cfg)?;
        for col in table.columns() {
            log_severity_counts(col.index());
        }
        match args.output {
            Some(ref path) => {
                write_table_csv(path, &table)
                    .with_context(|| format!("failed to write CSV: {}", path.display()))?;
            }
            None => print!("{table}"),
        }
    }

    info!("done");
    Ok(())
}

/// Log how many index values fall in each drought band.
fn log_severity_counts(index: &[f64]) {
    let mut dry = 0usize;
    let mut missing = 0usize;
    for &z in index {
        match Severity::classify(z) {
            Some(s) if s.is_drought() => dry += 1,
            Some(_) => {}
            None => missing += 1,
        }
    }
    info!(n = index.len(), dry, missing, "index summary");
}
