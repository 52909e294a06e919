//! Resampling dated observations into calendar-month totals.

use caeli_calendar::{Period, YearMonth};
use chrono::Datelike;

/// Monthly totals over whole calendar years, January of the first observed
/// year through December of the last.
///
/// A month without any finite observation is `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthlyGrid {
    first_year: i32,
    totals: Vec<f64>,
}

impl MonthlyGrid {
    /// Sum `values` by calendar month of the matching `dates`.
    ///
    /// `dates` and `values` must have the same, non-zero length.
    pub(crate) fn from_dated<D: Datelike>(dates: &[D], values: &[f64]) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        let (first_year, last_year) = dates
            .iter()
            .map(Datelike::year)
            .fold((i32::MAX, i32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
        let n_years = (last_year - first_year + 1).max(0) as usize;
        let origin = year_start(first_year);

        let mut sums = vec![0.0; n_years * 12];
        let mut seen = vec![false; n_years * 12];
        for (date, &v) in dates.iter().zip(values) {
            if !v.is_finite() {
                continue;
            }
            let slot = YearMonth::from_date(date).months_since(origin) as usize;
            sums[slot] += v;
            seen[slot] = true;
        }

        let totals = sums
            .into_iter()
            .zip(seen)
            .map(|(s, ok)| if ok { s } else { f64::NAN })
            .collect();
        Self { first_year, totals }
    }

    /// Calendar years covered, in order.
    pub(crate) fn years(&self) -> Vec<i32> {
        (0..self.n_years()).map(|i| self.first_year + i as i32).collect()
    }

    pub(crate) fn n_years(&self) -> usize {
        self.totals.len() / 12
    }

    /// Total for one month, `NaN` if missing.
    #[cfg(test)]
    pub(crate) fn total(&self, at: YearMonth) -> f64 {
        let slot = at.months_since(year_start(self.first_year));
        usize::try_from(slot)
            .ok()
            .and_then(|i| self.totals.get(i).copied())
            .unwrap_or(f64::NAN)
    }

    /// One window sum per year for `period`, each window starting in that
    /// year. Windows touching a missing month or running past December of
    /// the last year are `NaN`.
    pub(crate) fn window_sums(&self, period: Period) -> Vec<f64> {
        let origin = year_start(self.first_year);
        (0..self.n_years())
            .map(|y| {
                let first = origin.add_months(y * 12 + period.start().index());
                let last = first.add_months(period.length() - 1);
                let lo = first.months_since(origin) as usize;
                let hi = last.months_since(origin) as usize;
                match self.totals.get(lo..=hi) {
                    Some(window) => window.iter().sum(),
                    None => f64::NAN,
                }
            })
            .collect()
    }
}

/// January of `year`.
fn year_start(year: i32) -> YearMonth {
    YearMonth::from_ordinal(i64::from(year) * 12)
}
