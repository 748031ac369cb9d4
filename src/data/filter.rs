//! Launch Filter Module
//! Site and payload-range filtering plus the outcome aggregations
//! behind the dashboard charts.

use polars::prelude::*;
use thiserror::Error;

use super::{LAUNCH_SITE, OUTCOME, PAYLOAD_MASS};

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Wire value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Current site filter: everything, or one named launch site.
///
/// Site names are not validated against the dataset; an unknown name
/// simply filters down to an empty subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse the wire value coming from the site dropdown.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw.to_string())
        }
    }

    /// Human-readable label used in chart titles.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }
}

/// Read-only filtering and aggregation over the launch records frame.
pub struct LaunchFilter;

impl LaunchFilter {
    /// Restrict to the selected site. `All` is the identity.
    pub fn by_site(df: &DataFrame, selection: &SiteSelection) -> Result<DataFrame, FilterError> {
        match selection {
            SiteSelection::All => Ok(df.clone()),
            SiteSelection::Site(site) => {
                let filtered = df
                    .clone()
                    .lazy()
                    .filter(col(LAUNCH_SITE).eq(lit(site.as_str())))
                    .collect()?;
                Ok(filtered)
            }
        }
    }

    /// Restrict to rows whose payload mass lies within `[low, high]`, inclusive.
    pub fn by_payload(df: &DataFrame, low: f64, high: f64) -> Result<DataFrame, FilterError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(
                col(PAYLOAD_MASS)
                    .gt_eq(lit(low))
                    .and(col(PAYLOAD_MASS).lt_eq(lit(high))),
            )
            .collect()?;
        Ok(filtered)
    }

    /// Count of successful launches per site, ordered by the given site list.
    ///
    /// Sites with zero successes are kept so the pie slice set matches the
    /// distinct sites present in the data.
    pub fn success_counts_by_site(
        df: &DataFrame,
        sites: &[String],
    ) -> Result<Vec<(String, u32)>, FilterError> {
        let site_series = df.column(LAUNCH_SITE)?;
        let outcome = df.column(OUTCOME)?.cast(&DataType::Int64)?;
        let outcome = outcome.i64()?;

        let mut counts: Vec<(String, u32)> = sites.iter().map(|s| (s.clone(), 0)).collect();
        for i in 0..df.height() {
            if let (Ok(site), Some(flag)) = (site_series.get(i), outcome.get(i)) {
                if flag != 1 {
                    continue;
                }
                let site = site.to_string().trim_matches('"').to_string();
                if let Some(entry) = counts.iter_mut().find(|(name, _)| *name == site) {
                    entry.1 += 1;
                }
            }
        }
        Ok(counts)
    }

    /// (successes, failures) over the given frame.
    pub fn outcome_counts(df: &DataFrame) -> Result<(u32, u32), FilterError> {
        let outcome = df.column(OUTCOME)?.cast(&DataType::Int64)?;
        let outcome = outcome.i64()?;

        let mut successes = 0;
        let mut failures = 0;
        for i in 0..df.height() {
            match outcome.get(i) {
                Some(1) => successes += 1,
                Some(_) => failures += 1,
                None => {}
            }
        }
        Ok((successes, failures))
    }
}
