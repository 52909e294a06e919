//! Year-by-period output of the monthly transformers.

use std::fmt;

use caeli_calendar::Period;
use caeli_distribution::Family;

/// Which standardized index a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// Standardized Precipitation Index (gamma family).
    Spi,
    /// Standardized Precipitation-Evapotranspiration Index (log-logistic
    /// family).
    Spei,
}

impl IndexKind {
    /// Distribution family the index is fitted with.
    pub fn family(self) -> Family {
        match self {
            IndexKind::Spi => Family::Gamma,
            IndexKind::Spei => Family::LogLogistic,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Spi => write!(f, "spi"),
            IndexKind::Spei => write!(f, "spei"),
        }
    }
}

/// Aggregated amounts and their index for one period, one entry per year.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodColumn {
    period: Period,
    amounts: Vec<f64>,
    index: Vec<f64>,
}

impl PeriodColumn {
    pub(crate) fn new(period: Period, amounts: Vec<f64>, index: Vec<f64>) -> Self {
        debug_assert_eq!(amounts.len(), index.len());
        Self {
            period,
            amounts,
            index,
        }
    }

    /// The aggregation window.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Column label, e.g. `"11-01"`.
    pub fn label(&self) -> String {
        self.period.label()
    }

    /// Window totals per year, `NaN` where missing.
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Index values per year, `NaN` where missing.
    pub fn index(&self) -> &[f64] {
        &self.index
    }
}

/// Monthly drought-index table: one row per calendar year, an amount and an
/// index column per target period.
///
/// Values are stored unrounded. [`Display`](fmt::Display) rounds to two
/// decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTable {
    kind: IndexKind,
    years: Vec<i32>,
    columns: Vec<PeriodColumn>,
}

impl MonthlyTable {
    pub(crate) fn new(kind: IndexKind, years: Vec<i32>, columns: Vec<PeriodColumn>) -> Self {
        Self {
            kind,
            years,
            columns,
        }
    }

    /// The index stored in this table.
    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    /// Row keys.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Period columns in output order.
    pub fn columns(&self) -> &[PeriodColumn] {
        &self.columns
    }

    /// Looks up a period column by label.
    pub fn column(&self, label: &str) -> Option<&PeriodColumn> {
        self.columns.iter().find(|c| c.label() == label)
    }

    /// Number of rows (years).
    pub fn n_rows(&self) -> usize {
        self.years.len()
    }

    /// Number of value columns: an amount and an index per period.
    pub fn n_columns(&self) -> usize {
        2 * self.columns.len()
    }

    /// Header names of the value columns, e.g. `["01-03", "spi_01-03"]`.
    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(|c| {
                let label = c.label();
                let index = format!("{}_{label}", self.kind);
                [label, index]
            })
            .collect()
    }

    /// Value cells of row `row`, in [`headers`](Self::headers) order.
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.columns
            .iter()
            .flat_map(|c| [c.amounts[row], c.index[row]])
            .collect()
    }
}

impl fmt::Display for MonthlyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.headers();
        let width = headers.iter().map(String::len).max().unwrap_or(0).max(8);

        write!(f, "{:>6}", "year")?;
        for h in &headers {
            write!(f, " {h:>width$}")?;
        }
        writeln!(f)?;

        for (i, year) in self.years.iter().enumerate() {
            write!(f, "{year:>6}")?;
            for v in self.row(i) {
                if v.is_nan() {
                    write!(f, " {:>width$}", "NaN")?;
                } else {
                    write!(f, " {v:>width$.2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
