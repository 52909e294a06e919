//! Integration test: CSV in, monthly table and flat series out.

use std::fmt::Write as _;
use std::fs;

use approx::assert_relative_eq;
use caeli_index::{FitConfig, IndexKind, MonthlyConfig, spi, spi_monthly};
use caeli_io::{ReaderConfig, read_csv, write_series_csv, write_table_csv};
use chrono::NaiveDate;

/// Ten years of daily data: a deterministic wet/dry pattern whose monthly
/// totals vary from year to year.
fn daily_csv() -> String {
    let mut text = String::from("date,value\n");
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2009, 12, 31).unwrap();
    for (i, d) in start.iter_days().take_while(|d| *d <= end).enumerate() {
        let v = if i % 3 == 0 { ((i * 7919) % 23) as f64 * 0.5 } else { 0.0 };
        writeln!(text, "{},{v}", d.format("%Y-%m-%d")).unwrap();
    }
    text
}

#[test]
fn monthly_table_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("daily.csv");
    fs::write(&input, daily_csv()).unwrap();

    let series = read_csv(&input, &ReaderConfig::default()).unwrap();
    let config = MonthlyConfig::new()
        .with_aggregation(3)
        .with_months(vec![1, 11]);
    let table = spi_monthly(series.dates(), series.values(), &config).unwrap();

    let output = dir.path().join("table.csv");
    write_table_csv(&output, &table).unwrap();

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["year", "01-03", "spi_01-03", "11-01", "spi_11-01"]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[0][0], "2000");
    assert_eq!(&rows[9][0], "2009");

    // Values are written unrounded.
    let amount: f64 = rows[4][1].parse().unwrap();
    assert_relative_eq!(amount, table.column("01-03").unwrap().amounts()[4]);
    let z: f64 = rows[4][2].parse().unwrap();
    assert_relative_eq!(z, table.column("01-03").unwrap().index()[4]);

    // The November window of the last year runs past the data.
    assert_eq!(&rows[9][3], "");
    assert_eq!(&rows[9][4], "");
}

#[test]
fn flat_series_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("annual.csv");
    fs::write(
        &input,
        "date,value\n2001-01-01,286.08\n2002-01-01,321.11\n2003-01-01,NA\n\
         2004-01-01,383.07\n2005-01-01,277.56\n2006-01-01,150.5\n2007-01-01,272.63\n",
    )
    .unwrap();

    let series = read_csv(&input, &ReaderConfig::default()).unwrap();
    let z = spi(series.values(), &FitConfig::new()).unwrap();
    assert!(z[2].is_nan());

    let output = dir.path().join("spi.csv");
    write_series_csv(&output, series.dates(), series.values(), &z, IndexKind::Spi).unwrap();

    let back = read_csv(
        &output,
        &ReaderConfig::default().with_value_column("spi"),
    )
    .unwrap();
    assert_eq!(back.dates(), series.dates());
    for (a, b) in back.values().iter().zip(&z) {
        assert!(a.is_nan() && b.is_nan() || (a - b).abs() < 1e-12);
    }
}
