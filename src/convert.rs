//! Pure conversion functions: TOML config structs + CLI overrides -> crate
//! API config types.

use anyhow::{Context, Result};

use caeli_distribution::{FitConfig, GammaMethod};
use caeli_index::MonthlyConfig;
use caeli_io::ReaderConfig;

use crate::cli::IndexArgs;
use crate::config::{IndexToml, IoToml};

/// Builds a [`ReaderConfig`] from the TOML I/O configuration, with the PET
/// column overridden by the command line when given.
pub fn build_reader_config(io: &IoToml, args: &IndexArgs) -> Result<ReaderConfig> {
    let pet = args.pet_column.as_ref().or(io.pet_column.as_ref());
    let cfg = ReaderConfig::default()
        .with_date_column(&io.date_column)
        .with_value_column(&io.value_column)
        .with_pet_column(pet)
        .with_date_format(&io.date_format);
    cfg.validate().context("invalid [io] configuration")?;
    Ok(cfg)
}

/// Builds a [`FitConfig`] from the TOML index configuration.
pub fn build_fit_config(index: &IndexToml) -> Result<FitConfig> {
    let method: GammaMethod = index
        .gamma_method
        .parse()
        .context("invalid [index] gamma_method")?;
    let cfg = FitConfig::new()
        .with_min_samples(index.min_samples)
        .with_gamma_method(method)
        .with_probability_epsilon(index.probability_epsilon);
    cfg.validate().context("invalid [index] configuration")?;
    Ok(cfg)
}

/// Builds a [`MonthlyConfig`] from the TOML index configuration, with the
/// aggregation and start months overridden by the command line when given.
pub fn build_monthly_config(index: &IndexToml, args: &IndexArgs) -> Result<MonthlyConfig> {
    let mut cfg = MonthlyConfig::new()
        .with_aggregation(args.aggregation.unwrap_or(index.aggregation))
        .with_fit(build_fit_config(index)?);
    if let Some(months) = args.months.clone().or_else(|| index.months.clone()) {
        cfg = cfg.with_months(months);
    }
    cfg.validate().context("invalid [index] configuration")?;
    Ok(cfg)
}
