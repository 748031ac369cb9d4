//! Launch Data Loader Module
//! Loads the launch records CSV once at startup and derives the values
//! that seed the dashboard controls (distinct sites, payload bounds).

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

use super::{LAUNCH_SITE, PAYLOAD_MASS, REQUIRED_COLUMNS};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("Dataset has no rows")]
    Empty,
    #[error("Column '{0}' has no numeric values")]
    NoNumericValues(String),
}

/// The launch records dataset, immutable for the lifetime of the process.
#[derive(Debug)]
pub struct LaunchData {
    df: DataFrame,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchData {
    /// Load a launch records CSV using Polars.
    pub fn load(file_path: &Path) -> Result<Self, DataError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path.to_path_buf())
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        Self::from_frame(df)
    }

    /// Build the dataset from an already-materialized DataFrame.
    pub fn from_frame(df: DataFrame) -> Result<Self, DataError> {
        for column in REQUIRED_COLUMNS {
            if df.column(column).is_err() {
                return Err(DataError::MissingColumn(column.to_string()));
            }
        }
        if df.height() == 0 {
            return Err(DataError::Empty);
        }

        let sites = unique_strings(&df, LAUNCH_SITE)?;
        let (payload_min, payload_max) = payload_bounds(&df)?;

        Ok(Self {
            df,
            sites,
            payload_min,
            payload_max,
        })
    }

    /// Distinct launch sites present in the data, sorted.
    pub fn launch_sites(&self) -> &[String] {
        &self.sites
    }

    /// Minimum and maximum payload mass across all rows.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// Number of launch records.
    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// The underlying DataFrame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }
}

/// Distinct non-null values of a string column, sorted.
fn unique_strings(df: &DataFrame, column: &str) -> Result<Vec<String>, DataError> {
    let unique = df
        .column(column)
        .map_err(|_| DataError::MissingColumn(column.to_string()))?
        .unique()?;

    let series = unique.as_materialized_series();
    let mut values: Vec<String> = (0..series.len())
        .filter_map(|i| {
            let val = series.get(i).ok()?;
            if val.is_null() {
                None
            } else {
                Some(val.to_string().trim_matches('"').to_string())
            }
        })
        .collect();
    values.sort();
    Ok(values)
}

/// Min/max of the payload mass column, ignoring nulls.
fn payload_bounds(df: &DataFrame) -> Result<(f64, f64), DataError> {
    let payload = df
        .column(PAYLOAD_MASS)
        .map_err(|_| DataError::MissingColumn(PAYLOAD_MASS.to_string()))?
        .cast(&DataType::Float64)?;
    let payload = payload.f64()?;

    let min = payload
        .min()
        .ok_or_else(|| DataError::NoNumericValues(PAYLOAD_MASS.to_string()))?;
    let max = payload
        .max()
        .ok_or_else(|| DataError::NoNumericValues(PAYLOAD_MASS.to_string()))?;
    Ok((min, max))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::super::{BOOSTER_VERSION, LAUNCH_SITE, OUTCOME, PAYLOAD_MASS};
    use super::*;

    /// Small frame shared by the data and chart tests.
    pub(crate) fn sample_frame() -> DataFrame {
        df!(
            LAUNCH_SITE => &[
                "CCAFS LC-40",
                "CCAFS LC-40",
                "VAFB SLC-4E",
                "KSC LC-39A",
                "KSC LC-39A",
                "VAFB SLC-4E",
            ],
            PAYLOAD_MASS => &[500.0, 3170.0, 2296.0, 5300.0, 9600.0, 475.0],
            BOOSTER_VERSION => &[
                "F9 v1.0  B0005",
                "F9 v1.1  B1011",
                "F9 FT B1029.1",
                "F9 FT B1031.1",
                "F9 B4 B1039.1",
                "F9 FT B1038.1",
            ],
            OUTCOME => &[0i64, 1, 1, 1, 0, 1],
        )
        .unwrap()
    }

    #[test]
    fn from_frame_derives_sorted_sites_and_bounds() {
        let data = LaunchData::from_frame(sample_frame()).unwrap();
        assert_eq!(
            data.launch_sites(),
            ["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(data.payload_bounds(), (475.0, 9600.0));
        assert_eq!(data.row_count(), 6);
    }

    #[test]
    fn from_frame_rejects_missing_column() {
        let df = df!(LAUNCH_SITE => &["CCAFS LC-40"], OUTCOME => &[1i64]).unwrap();
        let err = LaunchData::from_frame(df).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(col) if col == PAYLOAD_MASS));
    }

    #[test]
    fn from_frame_rejects_empty_dataset() {
        let df = df!(
            LAUNCH_SITE => Vec::<String>::new(),
            PAYLOAD_MASS => Vec::<f64>::new(),
            BOOSTER_VERSION => Vec::<String>::new(),
            OUTCOME => Vec::<i64>::new(),
        )
        .unwrap();
        assert!(matches!(LaunchData::from_frame(df), Err(DataError::Empty)));
    }

    #[test]
    fn load_reads_csv_from_disk() {
        let path = std::env::temp_dir().join("launchboard_loader_test.csv");
        std::fs::write(
            &path,
            "Launch Site,Payload Mass (kg),Booster Version,class\n\
             CCAFS LC-40,500.0,F9 v1.0  B0005,0\n\
             KSC LC-39A,5300.0,F9 FT B1031.1,1\n",
        )
        .unwrap();

        let data = LaunchData::load(&path).unwrap();
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.launch_sites(), ["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(data.payload_bounds(), (500.0, 5300.0));

        std::fs::remove_file(&path).ok();
    }
}
