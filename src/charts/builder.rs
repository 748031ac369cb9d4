//! Chart Builder Module
//! Recomputes the two dashboard figures from the current filter selection.
//! Both builders are pure functions of the dataset and their inputs.

use polars::prelude::*;
use thiserror::Error;

use crate::data::{
    FilterError, LaunchData, LaunchFilter, SiteSelection, BOOSTER_VERSION, OUTCOME, PAYLOAD_MASS,
};

use super::figure::{
    palette_color, Figure, Layout, PieMarker, ScatterMarker, Trace, FAILURE_COLOR, SUCCESS_COLOR,
};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Filter error: {0}")]
    FilterError(#[from] FilterError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Marker symbol keyed by the outcome flag.
fn outcome_symbol(flag: i64) -> &'static str {
    if flag == 1 {
        "diamond"
    } else {
        "circle"
    }
}

/// Builds the dashboard's chart specifications.
pub struct ChartBuilder;

impl ChartBuilder {
    /// Launch-outcome pie chart for the current site selection.
    ///
    /// With no site filter the slices are per-site success counts; for a
    /// single site they are that site's success/failure split. An empty
    /// subset yields a figure with no slices.
    pub fn success_pie(
        data: &LaunchData,
        selection: &SiteSelection,
    ) -> Result<Figure, ChartError> {
        match selection {
            SiteSelection::All => {
                let counts =
                    LaunchFilter::success_counts_by_site(data.frame(), data.launch_sites())?;

                let labels: Vec<String> = counts.iter().map(|(site, _)| site.clone()).collect();
                let values: Vec<f64> = counts.iter().map(|&(_, n)| f64::from(n)).collect();
                let colors: Vec<String> = (0..labels.len())
                    .map(|i| palette_color(i).to_string())
                    .collect();

                Ok(Figure::new(
                    vec![Trace::Pie {
                        labels,
                        values,
                        marker: PieMarker { colors },
                    }],
                    Layout::titled("Total Successful Launches by Site"),
                ))
            }
            SiteSelection::Site(site) => {
                let subset = LaunchFilter::by_site(data.frame(), selection)?;
                let (successes, failures) = LaunchFilter::outcome_counts(&subset)?;

                let mut labels = Vec::new();
                let mut values = Vec::new();
                let mut colors = Vec::new();
                if successes > 0 {
                    labels.push("Success".to_string());
                    values.push(f64::from(successes));
                    colors.push(SUCCESS_COLOR.to_string());
                }
                if failures > 0 {
                    labels.push("Failure".to_string());
                    values.push(f64::from(failures));
                    colors.push(FAILURE_COLOR.to_string());
                }

                let traces = if labels.is_empty() {
                    Vec::new()
                } else {
                    vec![Trace::Pie {
                        labels,
                        values,
                        marker: PieMarker { colors },
                    }]
                };

                Ok(Figure::new(
                    traces,
                    Layout::titled(format!("Success vs Failure at {site}")),
                ))
            }
        }
    }

    /// Payload-vs-outcome scatter plot for the current site selection and
    /// inclusive payload range. One trace per booster version, marker symbol
    /// keyed by the outcome flag.
    pub fn payload_scatter(
        data: &LaunchData,
        selection: &SiteSelection,
        low: f64,
        high: f64,
    ) -> Result<Figure, ChartError> {
        let subset = LaunchFilter::by_payload(data.frame(), low, high)?;
        let subset = LaunchFilter::by_site(&subset, selection)?;

        let payload = subset.column(PAYLOAD_MASS)?.cast(&DataType::Float64)?;
        let payload = payload.f64()?;
        let outcome = subset.column(OUTCOME)?.cast(&DataType::Int64)?;
        let outcome = outcome.i64()?;
        let booster = subset.column(BOOSTER_VERSION)?;

        // Group points by booster version, preserving first-seen order
        let mut groups: Vec<(String, Vec<f64>, Vec<f64>, Vec<&'static str>)> = Vec::new();
        for i in 0..subset.height() {
            let (Some(mass), Some(flag), Ok(version)) =
                (payload.get(i), outcome.get(i), booster.get(i))
            else {
                continue;
            };
            if version.is_null() {
                continue;
            }
            let version = version.to_string().trim_matches('"').to_string();

            let idx = match groups.iter().position(|(name, ..)| *name == version) {
                Some(idx) => idx,
                None => {
                    groups.push((version, Vec::new(), Vec::new(), Vec::new()));
                    groups.len() - 1
                }
            };
            let group = &mut groups[idx];
            group.1.push(mass);
            group.2.push(flag as f64);
            group.3.push(outcome_symbol(flag));
        }

        let traces: Vec<Trace> = groups
            .into_iter()
            .enumerate()
            .map(|(i, (name, x, y, symbol))| Trace::Scatter {
                x,
                y,
                mode: "markers",
                name,
                marker: ScatterMarker {
                    color: palette_color(i).to_string(),
                    symbol,
                    size: 9,
                },
            })
            .collect();

        Ok(Figure::new(
            traces,
            Layout::titled(format!("Payload vs Launch Outcome: {}", selection.label()))
                .with_axes("Payload Mass (kg)", "Launch Outcome"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_frame, LaunchData};

    fn sample_data() -> LaunchData {
        LaunchData::from_frame(sample_frame()).unwrap()
    }

    fn pie_slices(figure: &Figure) -> (Vec<String>, Vec<f64>) {
        match figure.data.first() {
            Some(Trace::Pie { labels, values, .. }) => (labels.clone(), values.clone()),
            _ => (Vec::new(), Vec::new()),
        }
    }

    /// All (payload, outcome) points across every trace of a scatter figure.
    fn scatter_points(figure: &Figure) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        for trace in &figure.data {
            if let Trace::Scatter { x, y, .. } = trace {
                points.extend(x.iter().copied().zip(y.iter().copied()));
            }
        }
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points
    }

    #[test]
    fn all_sites_pie_has_one_slice_per_site() {
        let data = sample_data();
        let figure = ChartBuilder::success_pie(&data, &SiteSelection::All).unwrap();
        let (labels, values) = pie_slices(&figure);
        assert_eq!(labels, data.launch_sites());
        assert_eq!(values, vec![1.0, 1.0, 2.0]);
    }

    #[test]
    fn single_site_pie_has_at_most_two_slices() {
        let data = sample_data();
        for site in data.launch_sites().to_vec() {
            let figure =
                ChartBuilder::success_pie(&data, &SiteSelection::Site(site.clone())).unwrap();
            let (labels, _) = pie_slices(&figure);
            assert!(labels.len() <= 2, "{site}: {labels:?}");
        }
    }

    #[test]
    fn single_site_pie_splits_success_and_failure() {
        let data = sample_data();
        let selection = SiteSelection::Site("KSC LC-39A".to_string());
        let figure = ChartBuilder::success_pie(&data, &selection).unwrap();
        let (labels, values) = pie_slices(&figure);
        assert_eq!(labels, ["Success", "Failure"]);
        assert_eq!(values, [1.0, 1.0]);
    }

    #[test]
    fn unknown_site_pie_is_empty() {
        let data = sample_data();
        let selection = SiteSelection::Site("No Such Pad".to_string());
        let figure = ChartBuilder::success_pie(&data, &selection).unwrap();
        assert!(figure.is_empty());
    }

    #[test]
    fn scatter_points_match_the_filtered_subset_exactly() {
        let data = sample_data();
        let figure =
            ChartBuilder::payload_scatter(&data, &SiteSelection::All, 475.0, 5300.0).unwrap();
        // Rows with payload in [475, 5300]: 500/0, 3170/1, 2296/1, 5300/1, 475/1
        assert_eq!(
            scatter_points(&figure),
            vec![
                (475.0, 1.0),
                (500.0, 0.0),
                (2296.0, 1.0),
                (3170.0, 1.0),
                (5300.0, 1.0),
            ]
        );
    }

    #[test]
    fn scatter_respects_the_site_filter() {
        let data = sample_data();
        let selection = SiteSelection::Site("VAFB SLC-4E".to_string());
        let figure = ChartBuilder::payload_scatter(&data, &selection, 0.0, 10_000.0).unwrap();
        assert_eq!(scatter_points(&figure), vec![(475.0, 1.0), (2296.0, 1.0)]);
    }

    #[test]
    fn scatter_outside_data_range_is_empty() {
        let data = sample_data();
        let figure =
            ChartBuilder::payload_scatter(&data, &SiteSelection::All, 20_000.0, 30_000.0).unwrap();
        assert!(scatter_points(&figure).is_empty());
    }

    #[test]
    fn scatter_groups_traces_by_booster_version() {
        let data = sample_data();
        let figure =
            ChartBuilder::payload_scatter(&data, &SiteSelection::All, 0.0, 10_000.0).unwrap();
        let names: Vec<&str> = figure
            .data
            .iter()
            .map(|trace| match trace {
                Trace::Scatter { name, .. } => name.as_str(),
                _ => "",
            })
            .collect();
        // Every booster version in the sample frame is distinct
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"F9 FT B1029.1"));
    }
}
