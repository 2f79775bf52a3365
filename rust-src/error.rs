//! Error types for view selection and dataset validation.

use thiserror::Error;


/// Shape violations found while validating a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("series is empty")]
    EmptySeries,

    #[error("series has {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("value at position {index} is not a finite number")]
    NonFiniteValue { index: usize },

    #[error("no metric cards")]
    NoCards,

    #[error("tile '{title}': {source}")]
    Tile {
        title: String,
        #[source]
        source: Box<DatasetError>,
    },

    #[error("table has no columns")]
    NoColumns,

    #[error("table has no rows")]
    NoRows,

    #[error("row {row} has {cells} cells, expected {columns}")]
    RowWidth { row: usize, cells: usize, columns: usize },

    #[error("{view_kind} view cannot render a {dataset_kind} dataset")]
    KindMismatch {
        view_kind: &'static str,
        dataset_kind: &'static str,
    },

    #[error("no dataset available")]
    Missing,
}


/// Errors surfaced to callers of `render`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("unknown view '{name}'")]
    InvalidView { name: String },

    #[error("invalid dataset for view '{view}': {reason}")]
    InvalidDataset { view: String, reason: DatasetError },

    #[error("view registry is empty")]
    EmptyRegistry,

    #[error("view '{name}' is registered twice")]
    DuplicateView { name: String },
}


impl DashboardError {
    pub fn invalid_view(name: impl Into<String>) -> Self {
        Self::InvalidView { name: name.into() }
    }

    pub fn invalid_dataset(view: impl Into<String>, reason: DatasetError) -> Self {
        Self::InvalidDataset {
            view: view.into(),
            reason,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DashboardError::invalid_view("Payroll");
        assert_eq!(err.to_string(), "unknown view 'Payroll'");

        let err = DashboardError::invalid_dataset(
            "Phishing",
            DatasetError::LengthMismatch { labels: 6, values: 5 },
        );
        assert_eq!(
            err.to_string(),
            "invalid dataset for view 'Phishing': series has 6 labels but 5 values"
        );
    }

    #[test]
    fn test_tile_error_names_tile() {
        let err = DatasetError::Tile {
            title: "MFA Trend".to_string(),
            source: Box::new(DatasetError::EmptySeries),
        };
        assert_eq!(err.to_string(), "tile 'MFA Trend': series is empty");
    }
}
