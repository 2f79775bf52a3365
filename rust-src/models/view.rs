//! View definitions.

use serde::{Deserialize, Serialize};


/// How a view presents its dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    MetricsAndCharts,
    LineChart,
    BarChart,
    Table,
}


impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::MetricsAndCharts => "metrics_and_charts",
            ViewKind::LineChart => "line_chart",
            ViewKind::BarChart => "bar_chart",
            ViewKind::Table => "table",
        }
    }
}


impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


/// A named screen of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub kind: ViewKind,
}


impl View {
    pub fn new(name: &str, title: &str, kind: ViewKind) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            subtitle: None,
            kind,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }
}
