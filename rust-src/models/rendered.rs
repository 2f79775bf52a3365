//! Display-ready output produced by the view renderer.

use serde::Serialize;

use super::{ChartKind, Tone, TrendDirection, ViewKind};


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendIndicator {
    pub direction: TrendDirection,
    pub tone: Tone,
    pub symbol: &'static str,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCard {
    pub label: String,
    pub value: String,
    pub indicator: Option<TrendIndicator>,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub display: String,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub title: String,
    pub chart: ChartKind,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub color: String,
    pub points: Vec<ChartPoint>,
    pub min: f64,
    pub max: f64,
    /// View opened when the chart is a dashboard tile.
    pub target: Option<String>,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Columns whose cells are all numeric, right-aligned by text surfaces.
    pub numeric_columns: Vec<bool>,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedBody {
    Cards {
        cards: Vec<RenderedCard>,
        tiles: Vec<RenderedChart>,
    },
    Chart(RenderedChart),
    Table(RenderedTable),
}


/// One rendered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedOutput {
    pub view: String,
    pub kind: ViewKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: RenderedBody,
}


impl RenderedOutput {
    /// Number of top-level items: cards, chart points or table rows.
    pub fn item_count(&self) -> usize {
        match &self.body {
            RenderedBody::Cards { cards, .. } => cards.len(),
            RenderedBody::Chart(chart) => chart.points.len(),
            RenderedBody::Table(table) => table.rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    #[cfg(test)]
    pub fn cards(&self) -> Option<&[RenderedCard]> {
        match &self.body {
            RenderedBody::Cards { cards, .. } => Some(cards),
            _ => None,
        }
    }

    pub fn tiles(&self) -> &[RenderedChart] {
        match &self.body {
            RenderedBody::Cards { tiles, .. } => tiles,
            _ => &[],
        }
    }

    #[cfg(test)]
    pub fn table(&self) -> Option<&RenderedTable> {
        match &self.body {
            RenderedBody::Table(table) => Some(table),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn chart(&self) -> Option<&RenderedChart> {
        match &self.body {
            RenderedBody::Chart(chart) => Some(chart),
            _ => None,
        }
    }
}
