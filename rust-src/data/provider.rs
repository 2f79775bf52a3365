//! The seam between the dashboard and wherever its data comes from.

use crate::error::{DashboardError, DatasetError};
use crate::models::Dataset;


/// Supplies the dataset bound to a view.
pub trait DatasetProvider {
    /// Dataset for `view_name`, or `InvalidDataset(Missing)` when the provider has none.
    fn get_dataset(&self, view_name: &str) -> Result<Dataset, DashboardError>;

    /// Whether this provider carries a dataset for `view_name`.
    fn has_dataset(&self, view_name: &str) -> bool;

    /// Short description for logs.
    fn describe(&self) -> String;
}


/// Consults `primary` first and falls back for views it does not carry.
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}


impl<P: DatasetProvider, F: DatasetProvider> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}


impl<P: DatasetProvider, F: DatasetProvider> DatasetProvider for Layered<P, F> {
    fn get_dataset(&self, view_name: &str) -> Result<Dataset, DashboardError> {
        if self.primary.has_dataset(view_name) {
            self.primary.get_dataset(view_name)
        } else {
            self.fallback.get_dataset(view_name)
        }
    }

    fn has_dataset(&self, view_name: &str) -> bool {
        self.primary.has_dataset(view_name) || self.fallback.has_dataset(view_name)
    }

    fn describe(&self) -> String {
        format!("{} over {}", self.primary.describe(), self.fallback.describe())
    }
}


pub(crate) fn missing(view_name: &str) -> DashboardError {
    DashboardError::invalid_dataset(view_name, DatasetError::Missing)
}
