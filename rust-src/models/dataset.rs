//! Static datasets bound to views.

use serde::{Deserialize, Serialize};


/// Direction of a KPI trend arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}


/// Whether a trend is good or bad news for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Good,
    Bad,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub tone: Tone,
}


/// A single labeled KPI value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: Option<Trend>,
}


impl MetricCard {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            trend: None,
        }
    }

    pub fn trending(mut self, direction: TrendDirection, tone: Tone) -> Self {
        self.trend = Some(Trend { direction, tone });
        self
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}


/// A dashboard mini-chart that links to a detailed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTile {
    pub title: String,
    pub chart: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: String,
    pub target: String,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsDataset {
    pub cards: Vec<MetricCard>,
    #[serde(default)]
    pub tiles: Vec<ChartTile>,
}


/// Labeled series for a line or bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub x_label: Option<String>,
    pub y_label: String,
    pub color: String,
}


/// A table cell, either free text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}


impl CellValue {
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }
}


impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}


impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}


/// Data feeding one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dataset {
    Metrics(MetricsDataset),
    Series(SeriesDataset),
    Table(TableDataset),
}


impl Dataset {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Dataset::Metrics(_) => "metrics",
            Dataset::Series(_) => "series",
            Dataset::Table(_) => "table",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_json() {
        let json = r##"{
            "type": "series",
            "labels": ["Jan", "Feb"],
            "values": [820, 640],
            "y_label": "Blocked Emails",
            "color": "#ff7f0e"
        }"##;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        let Dataset::Series(series) = dataset else {
            panic!("expected series dataset");
        };
        assert_eq!(series.labels, vec!["Jan", "Feb"]);
        assert_eq!(series.values, vec![820.0, 640.0]);
        assert!(series.x_label.is_none());
    }

    #[test]
    fn test_table_cells_accept_text_and_numbers() {
        let json = r#"{
            "type": "table",
            "columns": ["Framework", "Compliance Score"],
            "rows": [["NIST CSF", 72]]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        let Dataset::Table(table) = dataset else {
            panic!("expected table dataset");
        };
        assert_eq!(table.rows[0][0], CellValue::Text("NIST CSF".to_string()));
        assert_eq!(table.rows[0][1], CellValue::Number(72.0));
    }

    #[test]
    fn test_card_trend_is_optional() {
        let json = r#"{"type": "metrics", "cards": [{"label": "MFA Adoption", "value": "92%"}]}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        let Dataset::Metrics(metrics) = dataset else {
            panic!("expected metrics dataset");
        };
        assert_eq!(metrics.cards[0].trend, None);
        assert!(metrics.tiles.is_empty());
    }
}
