//! Maps a view and its dataset to display-ready output.

use crate::error::{DashboardError, DatasetError};
use crate::models::{
    ChartKind, ChartPoint, ChartTile, Dataset, MetricCard, MetricsDataset, RenderedBody,
    RenderedCard, RenderedChart, RenderedOutput, RenderedTable, SeriesDataset, TableDataset,
    TrendIndicator, View, ViewKind,
};

use super::format::{format_cell, format_value, trend_symbol};


/// Render a view from its dataset.
///
/// Pure: the same `(view, dataset)` always yields the same output. Fails with
/// `InvalidDataset` when the dataset does not fit the view's kind or its
/// series and rows are malformed.
pub fn render(view: &View, dataset: &Dataset) -> Result<RenderedOutput, DashboardError> {
    let body = render_body(view, dataset)
        .map_err(|reason| DashboardError::invalid_dataset(&view.name, reason))?;

    Ok(RenderedOutput {
        view: view.name.clone(),
        kind: view.kind,
        title: view.title.clone(),
        subtitle: view.subtitle.clone(),
        body,
    })
}


fn render_body(view: &View, dataset: &Dataset) -> Result<RenderedBody, DatasetError> {
    match (view.kind, dataset) {
        (ViewKind::MetricsAndCharts, Dataset::Metrics(metrics)) => render_metrics(metrics),
        (ViewKind::LineChart, Dataset::Series(series)) => {
            render_series(view, series, ChartKind::Line).map(RenderedBody::Chart)
        }
        (ViewKind::BarChart, Dataset::Series(series)) => {
            render_series(view, series, ChartKind::Bar).map(RenderedBody::Chart)
        }
        (ViewKind::Table, Dataset::Table(table)) => render_table(table).map(RenderedBody::Table),
        (kind, dataset) => Err(DatasetError::KindMismatch {
            view_kind: kind.as_str(),
            dataset_kind: dataset.kind_name(),
        }),
    }
}


/// Check that labels and values line up and every value is finite.
pub fn validate_series(labels: &[String], values: &[f64]) -> Result<(), DatasetError> {
    if labels.is_empty() && values.is_empty() {
        return Err(DatasetError::EmptySeries);
    }
    if labels.len() != values.len() {
        return Err(DatasetError::LengthMismatch {
            labels: labels.len(),
            values: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DatasetError::NonFiniteValue { index });
    }
    Ok(())
}


fn render_metrics(metrics: &MetricsDataset) -> Result<RenderedBody, DatasetError> {
    if metrics.cards.is_empty() {
        return Err(DatasetError::NoCards);
    }

    let cards = metrics.cards.iter().map(render_card).collect();
    let tiles = metrics
        .tiles
        .iter()
        .map(render_tile)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RenderedBody::Cards { cards, tiles })
}


fn render_card(card: &MetricCard) -> RenderedCard {
    RenderedCard {
        label: card.label.clone(),
        value: card.value.clone(),
        indicator: card.trend.map(|trend| TrendIndicator {
            direction: trend.direction,
            tone: trend.tone,
            symbol: trend_symbol(trend.direction),
        }),
    }
}


fn render_tile(tile: &ChartTile) -> Result<RenderedChart, DatasetError> {
    validate_series(&tile.labels, &tile.values).map_err(|source| DatasetError::Tile {
        title: tile.title.clone(),
        source: Box::new(source),
    })?;

    let (min, max) = bounds(&tile.values);
    Ok(RenderedChart {
        title: tile.title.clone(),
        chart: tile.chart,
        x_label: None,
        y_label: None,
        color: tile.color.clone(),
        points: points(&tile.labels, &tile.values),
        min,
        max,
        target: Some(tile.target.clone()),
    })
}


fn render_series(
    view: &View,
    series: &SeriesDataset,
    chart: ChartKind,
) -> Result<RenderedChart, DatasetError> {
    validate_series(&series.labels, &series.values)?;

    let (min, max) = bounds(&series.values);
    Ok(RenderedChart {
        title: view.title.clone(),
        chart,
        x_label: series.x_label.clone(),
        y_label: Some(series.y_label.clone()),
        color: series.color.clone(),
        points: points(&series.labels, &series.values),
        min,
        max,
        target: None,
    })
}


fn render_table(table: &TableDataset) -> Result<RenderedTable, DatasetError> {
    if table.columns.is_empty() {
        return Err(DatasetError::NoColumns);
    }
    if table.rows.is_empty() {
        return Err(DatasetError::NoRows);
    }

    let columns = table.columns.len();
    for (row, cells) in table.rows.iter().enumerate() {
        if cells.len() != columns {
            return Err(DatasetError::RowWidth {
                row,
                cells: cells.len(),
                columns,
            });
        }
    }

    let numeric_columns = (0..columns)
        .map(|col| table.rows.iter().all(|row| row[col].is_number()))
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| row.iter().map(format_cell).collect())
        .collect();

    Ok(RenderedTable {
        columns: table.columns.clone(),
        rows,
        numeric_columns,
    })
}


fn points(labels: &[String], values: &[f64]) -> Vec<ChartPoint> {
    labels
        .iter()
        .zip(values)
        .map(|(label, &value)| ChartPoint {
            label: label.clone(),
            value,
            display: format_value(value),
        })
        .collect()
}


fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, Tone, TrendDirection};

    fn series(labels: &[&str], values: &[f64]) -> Dataset {
        Dataset::Series(SeriesDataset {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: values.to_vec(),
            x_label: None,
            y_label: "Blocked Emails".to_string(),
            color: "#ff7f0e".to_string(),
        })
    }

    fn bar_view() -> View {
        View::new("Phishing", "Phishing Detection Trend", ViewKind::BarChart)
    }

    #[test]
    fn test_three_metric_cards_keep_literal_values() {
        let view = View::new("Dashboard", "Dashboard", ViewKind::MetricsAndCharts);
        let dataset = Dataset::Metrics(MetricsDataset {
            cards: vec![
                MetricCard::new("Critical Vulns", "11"),
                MetricCard::new("Phishing Blocked", "760"),
                MetricCard::new("Endpoint Coverage", "87%"),
            ],
            tiles: vec![],
        });

        let output = render(&view, &dataset).unwrap();
        let cards = output.cards().unwrap();

        assert_eq!(cards.len(), 3);
        let pairs: Vec<(&str, &str)> = cards
            .iter()
            .map(|c| (c.label.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Critical Vulns", "11"),
                ("Phishing Blocked", "760"),
                ("Endpoint Coverage", "87%"),
            ]
        );
    }

    #[test]
    fn test_card_trend_indicator() {
        let view = View::new("Dashboard", "Dashboard", ViewKind::MetricsAndCharts);
        let dataset = Dataset::Metrics(MetricsDataset {
            cards: vec![
                MetricCard::new("MFA Adoption", "92%").trending(TrendDirection::Up, Tone::Good),
            ],
            tiles: vec![],
        });

        let output = render(&view, &dataset).unwrap();
        let indicator = output.cards().unwrap()[0].indicator.clone().unwrap();
        assert_eq!(indicator.symbol, "▲");
        assert_eq!(indicator.tone, Tone::Good);
    }

    #[test]
    fn test_bar_chart_points() {
        let dataset = series(&["Jan", "Feb", "Mar"], &[820.0, 640.0, 975.0]);
        let output = render(&bar_view(), &dataset).unwrap();
        let chart = output.chart().unwrap();

        assert_eq!(chart.chart, ChartKind::Bar);
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.points[2].display, "975");
        assert_eq!(chart.min, 640.0);
        assert_eq!(chart.max, 975.0);
        assert_eq!(chart.y_label.as_deref(), Some("Blocked Emails"));
    }

    #[test]
    fn test_mismatched_series_lengths() {
        let err = render(&bar_view(), &series(&["Jan", "Feb"], &[820.0])).unwrap_err();
        assert_eq!(
            err,
            DashboardError::invalid_dataset(
                "Phishing",
                DatasetError::LengthMismatch { labels: 2, values: 1 }
            )
        );
    }

    #[test]
    fn test_empty_series() {
        let err = render(&bar_view(), &series(&[], &[])).unwrap_err();
        assert_eq!(err, DashboardError::invalid_dataset("Phishing", DatasetError::EmptySeries));
    }

    #[test]
    fn test_non_finite_value() {
        let err = render(&bar_view(), &series(&["Jan", "Feb"], &[1.0, f64::NAN])).unwrap_err();
        assert_eq!(
            err,
            DashboardError::invalid_dataset("Phishing", DatasetError::NonFiniteValue { index: 1 })
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let view = View::new("Incidents", "Incidents", ViewKind::Table);
        let err = render(&view, &series(&["Jan"], &[1.0])).unwrap_err();
        assert_eq!(
            err,
            DashboardError::invalid_dataset(
                "Incidents",
                DatasetError::KindMismatch {
                    view_kind: "table",
                    dataset_kind: "series",
                }
            )
        );
    }

    #[test]
    fn test_invalid_tile_is_reported() {
        let view = View::new("Dashboard", "Dashboard", ViewKind::MetricsAndCharts);
        let dataset = Dataset::Metrics(MetricsDataset {
            cards: vec![MetricCard::new("Incidents This Month", "3")],
            tiles: vec![ChartTile {
                title: "Incidents".to_string(),
                chart: ChartKind::Bar,
                labels: vec!["Apr".to_string(), "May".to_string()],
                values: vec![2.0],
                color: "#d62728".to_string(),
                target: "Incidents".to_string(),
            }],
        });

        let err = render(&view, &dataset).unwrap_err();
        assert!(err.to_string().contains("tile 'Incidents'"));
    }

    #[test]
    fn test_table_row_width() {
        let view = View::new("Compliance", "Compliance Scorecard", ViewKind::Table);
        let dataset = Dataset::Table(TableDataset {
            columns: vec!["Framework".to_string(), "Compliance Score".to_string()],
            rows: vec![
                vec![CellValue::from("NIST CSF"), CellValue::from(72.0)],
                vec![CellValue::from("PCI DSS 4.0")],
            ],
        });

        let err = render(&view, &dataset).unwrap_err();
        assert_eq!(
            err,
            DashboardError::invalid_dataset(
                "Compliance",
                DatasetError::RowWidth { row: 1, cells: 1, columns: 2 }
            )
        );
    }

    #[test]
    fn test_table_numeric_columns() {
        let view = View::new("Compliance", "Compliance Scorecard", ViewKind::Table);
        let dataset = Dataset::Table(TableDataset {
            columns: vec!["Framework".to_string(), "Compliance Score".to_string()],
            rows: vec![
                vec![CellValue::from("NIST CSF"), CellValue::from(72.0)],
                vec![CellValue::from("PCI DSS 4.0"), CellValue::from(64.0)],
            ],
        });

        let output = render(&view, &dataset).unwrap();
        let table = output.table().unwrap();
        assert_eq!(table.numeric_columns, vec![false, true]);
        assert_eq!(table.rows[1], vec!["PCI DSS 4.0", "64"]);
    }

    #[test]
    fn test_render_is_pure() {
        let dataset = series(&["Jan", "Feb"], &[820.0, 640.0]);
        let first = render(&bar_view(), &dataset).unwrap();
        let second = render(&bar_view(), &dataset).unwrap();
        assert_eq!(first, second);
    }
}
