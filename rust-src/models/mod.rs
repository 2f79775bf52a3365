//! Data models for views, datasets and rendered output.

mod dataset;
mod rendered;
mod view;

pub use dataset::{
    CellValue, ChartKind, ChartTile, Dataset, MetricCard, MetricsDataset, SeriesDataset,
    TableDataset, Tone, TrendDirection,
};
pub use rendered::{
    ChartPoint, RenderedBody, RenderedCard, RenderedChart, RenderedOutput, RenderedTable,
    TrendIndicator,
};
pub use view::{View, ViewKind};
