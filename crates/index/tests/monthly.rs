use caeli_index::{IndexError, IndexKind, MonthlyConfig, spei_monthly, spi_monthly};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma as GammaDist, Normal};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn daily_dates(first_year: i32, last_year: i32) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(first_year, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(last_year, 12, 31).expect("valid date");
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Daily precipitation with a 60% chance of a dry day and gamma-distributed
/// wet-day amounts.
fn daily_precip(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let wet = GammaDist::new(0.8, 6.0).expect("valid gamma params");
    (0..n)
        .map(|_| {
            if rng.random_bool(0.6) {
                0.0
            } else {
                wet.sample(&mut rng)
            }
        })
        .collect()
}

fn labels(table: &caeli_index::MonthlyTable) -> Vec<String> {
    table.columns().iter().map(|c| c.label()).collect()
}

// ---------------------------------------------------------------------------
// SPI
// ---------------------------------------------------------------------------

#[test]
fn quarterly_windows_over_thirty_years() {
    let dates = daily_dates(1981, 2010);
    let precip = daily_precip(dates.len(), 1);
    let config = MonthlyConfig::new()
        .with_aggregation(3)
        .with_months(vec![1, 4, 7, 10]);

    let table = spi_monthly(&dates, &precip, &config).unwrap();

    assert_eq!(table.kind(), IndexKind::Spi);
    assert_eq!(table.n_rows(), 30);
    assert_eq!(table.n_columns(), 8);
    assert_eq!(labels(&table), vec!["01-03", "04-06", "07-09", "10-12"]);
    assert_eq!(table.years().first(), Some(&1981));
    assert_eq!(table.years().last(), Some(&2010));
    for col in table.columns() {
        assert!(col.amounts().iter().all(|a| a.is_finite() && *a > 0.0));
        assert!(col.index().iter().all(|z| z.is_finite()));
    }
}

#[test]
fn year_wrapping_window_is_missing_in_last_row() {
    let dates = daily_dates(1981, 2010);
    let precip = daily_precip(dates.len(), 2);
    let config = MonthlyConfig::new()
        .with_aggregation(3)
        .with_months(vec![11, 12]);

    let table = spi_monthly(&dates, &precip, &config).unwrap();
    assert_eq!(labels(&table), vec!["11-01", "12-02"]);

    for col in table.columns() {
        let last = table.n_rows() - 1;
        assert!(col.amounts()[last].is_nan());
        assert!(col.index()[last].is_nan());
        assert!(col.index()[..last].iter().all(|z| z.is_finite()));
    }
}

#[test]
fn rows_are_distinct_years_of_partial_record() {
    // Starts mid-year and ends mid-year: the grid still spans whole years.
    let start = NaiveDate::from_ymd_opt(1995, 6, 15).unwrap();
    let end = NaiveDate::from_ymd_opt(2004, 3, 2).unwrap();
    let dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    let precip = daily_precip(dates.len(), 3);

    let table = spi_monthly(&dates, &precip, &MonthlyConfig::new()).unwrap();
    assert_eq!(table.n_rows(), 10);
    assert_eq!(table.n_columns(), 24);

    let jan = table.column("01").unwrap();
    assert!(jan.amounts()[0].is_nan());
    assert!(jan.amounts()[1].is_finite());
    let dec = table.column("12").unwrap();
    assert!(dec.amounts()[9].is_nan());
}

#[test]
fn monthly_index_is_monotone_in_amount() {
    let dates = daily_dates(1971, 2010);
    let precip = daily_precip(dates.len(), 4);
    let table = spi_monthly(&dates, &precip, &MonthlyConfig::new().with_months(vec![5])).unwrap();

    let col = &table.columns()[0];
    let mut pairs: Vec<(f64, f64)> = col
        .amounts()
        .iter()
        .copied()
        .zip(col.index().iter().copied())
        .filter(|(a, _)| *a > 0.0)
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for w in pairs.windows(2) {
        if w[0].0 < w[1].0 {
            assert!(w[0].1 < w[1].1);
        }
    }
}

#[test]
fn missing_days_do_not_blank_a_month() {
    let dates = daily_dates(1981, 2010);
    let mut precip = daily_precip(dates.len(), 5);
    // Knock out every 10th day.
    for v in precip.iter_mut().step_by(10) {
        *v = f64::NAN;
    }
    let table = spi_monthly(&dates, &precip, &MonthlyConfig::new()).unwrap();
    for col in table.columns() {
        assert!(col.amounts().iter().all(|a| a.is_finite()));
    }
}

#[test]
fn fully_missing_month_propagates() {
    let dates = daily_dates(1981, 2010);
    let mut precip = daily_precip(dates.len(), 6);
    for (d, v) in dates.iter().zip(precip.iter_mut()) {
        if *d >= NaiveDate::from_ymd_opt(1990, 2, 1).unwrap()
            && *d <= NaiveDate::from_ymd_opt(1990, 2, 28).unwrap()
        {
            *v = f64::NAN;
        }
    }
    let config = MonthlyConfig::new()
        .with_aggregation(3)
        .with_months(vec![12, 1, 2, 3]);
    let table = spi_monthly(&dates, &precip, &config).unwrap();
    let row = 1990 - 1981;

    // Windows Dec 1989, Jan 1990 and Feb 1990 contain February 1990.
    for label in ["12-02", "01-03", "02-04"] {
        let col = table.column(label).unwrap();
        let row = if label == "12-02" { row - 1 } else { row };
        assert!(col.amounts()[row].is_nan(), "{label}");
        assert!(col.index()[row].is_nan(), "{label}");
    }
    assert!(table.column("03-05").unwrap().index()[row].is_finite());
}

#[test]
fn invalid_months_are_rejected() {
    let dates = daily_dates(2000, 2001);
    let precip = daily_precip(dates.len(), 7);
    for months in [vec![], vec![0], vec![13], vec![3, 3]] {
        let config = MonthlyConfig::new().with_months(months);
        assert!(matches!(
            spi_monthly(&dates, &precip, &config),
            Err(IndexError::InvalidConfig { .. })
        ));
    }
}

#[test]
fn aggregation_longer_than_a_year_is_rejected() {
    let dates = daily_dates(2000, 2001);
    let precip = daily_precip(dates.len(), 7);
    let config = MonthlyConfig::new().with_aggregation(13).with_months(vec![1]);
    assert!(matches!(
        spi_monthly(&dates, &precip, &config),
        Err(IndexError::InvalidConfig { .. })
    ));
}

// ---------------------------------------------------------------------------
// SPEI
// ---------------------------------------------------------------------------

#[test]
fn spei_monthly_from_daily_balance() {
    let dates = daily_dates(1981, 2010);
    let mut rng = StdRng::seed_from_u64(8);
    let precip = daily_precip(dates.len(), 8);
    let pet_noise = Normal::new(0.0, 0.4).unwrap();
    // Exponential year-to-year wetness keeps window totals right-skewed.
    let wetness = GammaDist::new(1.0, 1.0).unwrap();
    let year_factor: Vec<f64> = (0..30).map(|_| wetness.sample(&mut rng)).collect();
    let balance: Vec<f64> = dates
        .iter()
        .zip(&precip)
        .map(|(d, p)| {
            use chrono::Datelike;
            let season = (d.ordinal0() as f64 / 365.25 * std::f64::consts::TAU).cos();
            let pet = (2.0 - 1.5 * season + pet_noise.sample(&mut rng)).max(0.0);
            p * year_factor[(d.year() - 1981) as usize] - pet
        })
        .collect();

    let config = MonthlyConfig::new().with_aggregation(6).with_months(vec![4, 10]);
    let table = spei_monthly(&dates, &balance, &config).unwrap();

    assert_eq!(table.kind(), IndexKind::Spei);
    assert_eq!(table.n_rows(), 30);
    assert_eq!(labels(&table), vec!["04-09", "10-03"]);
    let summer = table.column("04-09").unwrap();
    assert!(summer.amounts().iter().any(|a| *a < 0.0));
    assert!(summer.index().iter().all(|z| z.is_finite()));
    let winter = table.column("10-03").unwrap();
    assert!(winter.index()[29].is_nan());
}
