use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Caeli standardized drought indices.
#[derive(Parser)]
#[command(
    name = "caeli",
    version,
    about = "Standardized precipitation (SPI) and precipitation-evapotranspiration (SPEI) indices"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Standardized Precipitation Index from a dated precipitation CSV.
    Spi(IndexArgs),
    /// Standardized Precipitation-Evapotranspiration Index from a dated
    /// precipitation (and PET) CSV.
    Spei(IndexArgs),
}

/// Arguments shared by the `spi` and `spei` subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct IndexArgs {
    /// Path to input CSV file with a header row.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for CSV output. Prints a rounded table to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the aggregation window length in months.
    #[arg(short, long)]
    pub aggregation: Option<usize>,

    /// Override the window start months, e.g. `1,4,7,10`.
    #[arg(short, long, value_delimiter = ',')]
    pub months: Option<Vec<u8>>,

    /// Override the PET column subtracted from the value column.
    #[arg(long)]
    pub pet_column: Option<String>,

    /// Standardize the raw series as one group instead of building a
    /// monthly table.
    #[arg(long)]
    pub flat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spi_with_months() {
        let cli = Cli::try_parse_from([
            "caeli", "-vv", "spi", "--input", "a.csv", "--aggregation", "3", "--months",
            "1,4,7,10",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Spi(args) = cli.command else {
            panic!("expected spi");
        };
        assert_eq!(args.aggregation, Some(3));
        assert_eq!(args.months, Some(vec![1, 4, 7, 10]));
        assert!(!args.flat);
    }

    #[test]
    fn parses_spei_flat() {
        let cli = Cli::try_parse_from([
            "caeli", "spei", "-i", "a.csv", "--pet-column", "pet", "--flat",
        ])
        .unwrap();
        let Command::Spei(args) = cli.command else {
            panic!("expected spei");
        };
        assert_eq!(args.pet_column.as_deref(), Some("pet"));
        assert!(args.flat);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["caeli", "spi"]).is_err());
    }
}
