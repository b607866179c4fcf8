//! Data module - CSV loading and the year/value series model

mod loader;
mod series;

pub use loader::{DataLoader, LoadedSeries, LoaderError, YEAR_COLUMN};
pub use series::{DataPoint, TimeSeries};
