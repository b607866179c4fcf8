//! CSV Data Loader Module
//! Reads a scene's CSV with Polars and extracts the `Year` / value columns.

use super::series::{DataPoint, TimeSeries};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column holding the x values in every scene file.
pub const YEAR_COLUMN: &str = "Year";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Column '{column}' not found in {}", file.display())]
    MissingColumn { column: String, file: PathBuf },
    #[error("No usable rows in {}", file.display())]
    NoData { file: PathBuf },
}

/// Result of reading one scene file.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: TimeSeries,
    /// Rows in the file, usable or not.
    pub row_count: usize,
    /// Rows dropped for a missing or non-numeric year/value.
    pub skipped_rows: usize,
}

/// Loads scene series from CSV files.
pub struct DataLoader;

impl DataLoader {
    /// Load `Year` and `value_col` from a CSV file, inferring column types.
    pub fn load_series(file_path: &Path, value_col: &str) -> Result<LoadedSeries, LoaderError> {
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::extract_series(&df, value_col, file_path)
    }

    /// Pull the year/value pairs out of an already loaded DataFrame.
    pub fn extract_series(
        df: &DataFrame,
        value_col: &str,
        file_path: &Path,
    ) -> Result<LoadedSeries, LoaderError> {
        for column in [YEAR_COLUMN, value_col] {
            if df.get_column_index(column).is_none() {
                return Err(LoaderError::MissingColumn {
                    column: column.to_string(),
                    file: file_path.to_path_buf(),
                });
            }
        }

        let year_f64 = df.column(YEAR_COLUMN)?.cast(&DataType::Float64)?;
        let year_ca = year_f64.f64()?;
        let value_f64 = df.column(value_col)?.cast(&DataType::Float64)?;
        let value_ca = value_f64.f64()?;

        let row_count = df.height();
        let mut points = Vec::with_capacity(row_count);

        for i in 0..row_count {
            let (Some(year), Some(value)) = (year_ca.get(i), value_ca.get(i)) else {
                continue;
            };
            // Years must be whole numbers; "1960.0" is fine, "1960.5" is not.
            if !year.is_finite() || year.fract() != 0.0 || !value.is_finite() {
                continue;
            }
            points.push(DataPoint::new(year as i32, value));
        }

        if points.is_empty() {
            return Err(LoaderError::NoData {
                file: file_path.to_path_buf(),
            });
        }

        let skipped_rows = row_count - points.len();
        if skipped_rows > 0 {
            log::warn!(
                "{}: skipped {} of {} rows without a numeric {}/{}",
                file_path.display(),
                skipped_rows,
                row_count,
                YEAR_COLUMN,
                value_col
            );
        }

        Ok(LoadedSeries {
            series: TimeSeries::new(points),
            row_count,
            skipped_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_temperature_fixture() {
        let file = write_csv("Year,Temperature (°C)\n1960,13.9\n1990,14.2\n2023,14.8\n");

        let loaded = DataLoader::load_series(file.path(), "Temperature (°C)").unwrap();

        assert_eq!(loaded.row_count, 3);
        assert_eq!(loaded.skipped_rows, 0);
        assert_eq!(
            loaded.series.points(),
            &[
                DataPoint::new(1960, 13.9),
                DataPoint::new(1990, 14.2),
                DataPoint::new(2023, 14.8),
            ]
        );
    }

    #[test]
    fn test_integer_values_and_extra_columns() {
        let file = write_csv("Entity,Year,CO2\nWorld,1960,10\nWorld,2023,32\n");

        let loaded = DataLoader::load_series(file.path(), "CO2").unwrap();

        assert_eq!(loaded.series.len(), 2);
        assert_eq!(loaded.series.value_extent(), Some((10.0, 32.0)));
    }

    #[test]
    fn test_unsorted_rows_come_back_in_year_order() {
        let file = write_csv("Year,IceExtent\n2023,14.7\n1960,16\n1990,15.4\n");

        let loaded = DataLoader::load_series(file.path(), "IceExtent").unwrap();

        let years: Vec<i32> = loaded.series.points().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1960, 1990, 2023]);
    }

    #[test]
    fn test_rows_with_missing_values_are_skipped() {
        let file = write_csv("Year,CO2\n1960,10\n1970,\n1980,19.5\n");

        let loaded = DataLoader::load_series(file.path(), "CO2").unwrap();

        assert_eq!(loaded.row_count, 3);
        assert_eq!(loaded.skipped_rows, 1);
        assert_eq!(loaded.series.len(), 2);
    }

    #[test]
    fn test_missing_value_column() {
        let file = write_csv("Year,CO2\n1960,10\n");

        let err = DataLoader::load_series(file.path(), "IceExtent").unwrap_err();

        match err {
            LoaderError::MissingColumn { column, .. } => assert_eq!(column, "IceExtent"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = DataLoader::load_series(Path::new("/nonexistent/scene.csv"), "CO2");
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only_file_has_no_data() {
        let file = write_csv("Year,CO2\n");

        let err = DataLoader::load_series(file.path(), "CO2").unwrap_err();
        assert!(matches!(err, LoaderError::NoData { .. }));
    }
}
