//! Datasets loaded from a JSON file.
//!
//! The file is an object keyed by view name:
//!
//! ```json
//! {
//!   "Phishing": {
//!     "type": "series",
//!     "labels": ["Jan", "Feb"],
//!     "values": [820, 640],
//!     "y_label": "Blocked Emails",
//!     "color": "#ff7f0e"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::DashboardError;
use crate::models::Dataset;

use super::provider::{missing, DatasetProvider};


#[derive(Debug, Clone)]
pub struct JsonDatasets {
    source: PathBuf,
    datasets: BTreeMap<String, Dataset>,
}


impl JsonDatasets {
    /// Load datasets from `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read datasets file: {}", path.display()))?;

        let datasets = Self::parse(&content)
            .with_context(|| format!("Failed to parse datasets file: {}", path.display()))?;

        tracing::info!(path = %path.display(), views = datasets.len(), "loaded dataset overrides");

        Ok(Self {
            source: path.to_path_buf(),
            datasets,
        })
    }

    fn parse(content: &str) -> Result<BTreeMap<String, Dataset>> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn view_names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }
}


impl DatasetProvider for JsonDatasets {
    fn get_dataset(&self, view_name: &str) -> Result<Dataset, DashboardError> {
        self.datasets
            .get(view_name)
            .cloned()
            .ok_or_else(|| missing(view_name))
    }

    fn has_dataset(&self, view_name: &str) -> bool {
        self.datasets.contains_key(view_name)
    }

    fn describe(&self) -> String {
        let names: Vec<&str> = self.view_names().collect();
        format!("datasets from {} ({})", self.source.display(), names.join(", "))
    }
}
