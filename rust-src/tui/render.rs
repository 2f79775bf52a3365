//! Frame drawing for the interactive dashboard.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Sparkline, Table,
    Tabs, Wrap,
};
use ratatui::Frame;

use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::models::{
    ChartKind, RenderedBody, RenderedCard, RenderedChart, RenderedOutput, RenderedTable, Tone,
};

use super::session::Session;


const ACCENT: Color = Color::Yellow;
const HELP: &str = "←/→ views  1-9 jump  ↑/↓ tile  Enter open  q quit";
const TILES_PER_ROW: usize = 3;


/// Draw one frame for the session's selected view.
pub fn draw(frame: &mut Frame, dashboard: &Dashboard, session: &Session) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Tabs
        Constraint::Min(5),    // View
        Constraint::Length(1), // Footer
    ])
    .split(frame.area());

    draw_tabs(frame, chunks[0], dashboard, session);

    let selected = session.nav().selected_view();
    match dashboard.render(selected) {
        Ok(output) => draw_output(frame, chunks[1], &output, session.focused_tile()),
        Err(e) => draw_error(frame, chunks[1], selected, &e),
    }

    let footer = match session.status() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(HELP, Style::default().add_modifier(Modifier::DIM))),
    };
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}


fn draw_tabs(frame: &mut Frame, area: Rect, dashboard: &Dashboard, session: &Session) {
    let registry = dashboard.registry();
    let selected = registry.position(session.nav().selected_view()).unwrap_or(0);
    let full: Vec<String> = registry
        .names()
        .enumerate()
        .map(|(i, name)| format!("{} {}", i + 1, name))
        .collect();

    // Collapse unselected tabs to their number when the full strip does not fit.
    let titles: Vec<Line> = if tabs_width(&full) <= area.width as usize {
        full.into_iter().map(Line::from).collect()
    } else {
        full.into_iter()
            .enumerate()
            .map(|(i, title)| {
                if i == selected {
                    Line::from(title)
                } else {
                    Line::from((i + 1).to_string())
                }
            })
            .collect()
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}


/// Cells needed for the titles with one cell of padding each side, dividers and borders.
fn tabs_width(titles: &[String]) -> usize {
    let text: usize = titles.iter().map(|t| t.chars().count() + 2).sum();
    text + titles.len().saturating_sub(1) + 2
}


/// Explicit error state in place of the view.
fn draw_error(frame: &mut Frame, area: Rect, view: &str, error: &DashboardError) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {view}: unable to render "));

    let text = vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Fix the dataset and restart, or pick another view."),
    ];

    frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}


fn draw_output(frame: &mut Frame, area: Rect, output: &RenderedOutput, focused_tile: usize) {
    let mut header = vec![Line::from(Span::styled(
        output.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = &output.subtitle {
        header.push(Line::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    let chunks = Layout::vertical([Constraint::Length(header.len() as u16), Constraint::Min(3)])
        .split(area);
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    match &output.body {
        RenderedBody::Cards { cards, tiles } => {
            draw_cards(frame, chunks[1], cards, tiles, focused_tile)
        }
        RenderedBody::Chart(chart) => draw_chart(frame, chunks[1], chart),
        RenderedBody::Table(table) => draw_table(frame, chunks[1], table),
    }
}


fn parse_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Cyan)
}


fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
    }
}


fn draw_cards(
    frame: &mut Frame,
    area: Rect,
    cards: &[RenderedCard],
    tiles: &[RenderedChart],
    focused_tile: usize,
) {
    let tile_rows = tiles.len().div_ceil(TILES_PER_ROW);
    let mut constraints = vec![Constraint::Length(5)];
    constraints.extend((0..tile_rows).map(|_| Constraint::Ratio(1, tile_rows as u32)));
    let rows = Layout::vertical(constraints).split(area);

    let card_count = cards.len().max(1) as u32;
    let card_areas =
        Layout::horizontal(cards.iter().map(|_| Constraint::Ratio(1, card_count))).split(rows[0]);

    for (card, card_area) in cards.iter().zip(card_areas.iter()) {
        let mut value = vec![Span::styled(
            card.value.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )];
        if let Some(ind) = &card.indicator {
            value.push(Span::raw(" "));
            value.push(Span::styled(ind.symbol, Style::default().fg(tone_color(ind.tone))));
        }

        let text = vec![
            Line::from(Span::styled(
                card.label.to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(value),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            *card_area,
        );
    }

    for (row_idx, row_tiles) in tiles.chunks(TILES_PER_ROW).enumerate() {
        let tile_areas = Layout::horizontal(
            (0..TILES_PER_ROW).map(|_| Constraint::Ratio(1, TILES_PER_ROW as u32)),
        )
        .split(rows[row_idx + 1]);

        for (col, tile) in row_tiles.iter().enumerate() {
            let index = row_idx * TILES_PER_ROW + col;
            draw_tile(frame, tile_areas[col], tile, index == focused_tile);
        }
    }
}


fn to_bar_value(value: f64) -> u64 {
    value.max(0.0).round() as u64
}


fn draw_tile(frame: &mut Frame, area: Rect, tile: &RenderedChart, focused: bool) {
    let border = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let hint = match (&tile.target, focused) {
        (Some(target), true) => format!(" Enter: {target} "),
        _ => String::new(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", tile.title))
        .title_bottom(Line::from(hint).right_aligned());

    let color = parse_color(&tile.color);
    match tile.chart {
        ChartKind::Line => {
            let data: Vec<u64> = tile.points.iter().map(|p| to_bar_value(p.value)).collect();
            let sparkline = Sparkline::default()
                .block(block)
                .data(data.as_slice())
                .style(Style::default().fg(color));
            frame.render_widget(sparkline, area);
        }
        ChartKind::Bar => draw_bars(frame, area, tile, block, color),
    }
}


fn draw_bars(frame: &mut Frame, area: Rect, chart: &RenderedChart, block: Block, color: Color) {
    let data: Vec<(&str, u64)> = chart
        .points
        .iter()
        .map(|p| (p.label.as_str(), to_bar_value(p.value)))
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let slots = data.len().max(1);
    let bar_width = (inner_width / slots).saturating_sub(1).clamp(1, 12) as u16;

    let bars = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color));

    frame.render_widget(bars, area);
}


fn draw_chart(frame: &mut Frame, area: Rect, chart: &RenderedChart) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(y_label) = &chart.y_label {
        block = block.title(format!(" {y_label} "));
    }
    let color = parse_color(&chart.color);

    if chart.chart == ChartKind::Bar {
        draw_bars(frame, area, chart, block, color);
        return;
    }

    let points: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();

    let dataset = Dataset::default()
        .name(chart.y_label.clone().unwrap_or_default())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points.as_slice());

    let span = (chart.max - chart.min).max(1.0);
    let (lo, hi) = (chart.min - span * 0.1, chart.max + span * 0.1);
    let last = chart.points.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = chart
        .points
        .iter()
        .map(|p| Span::raw(p.label.clone()))
        .collect();
    let y_labels: Vec<Span> = [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect();

    let mut x_axis = Axis::default().bounds([0.0, last]).labels(x_labels);
    if let Some(x_label) = &chart.x_label {
        x_axis = x_axis.title(x_label.clone());
    }

    let widget = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(Axis::default().bounds([lo, hi]).labels(y_labels));

    frame.render_widget(widget, area);
}


fn draw_table(frame: &mut Frame, area: Rect, table: &RenderedTable) {
    let widths: Vec<Constraint> = table
        .columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let longest = table
                .rows
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length(u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(2))
        })
        .collect();

    let header = Row::new(table.columns.clone())
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|cells| {
            let cells: Vec<Line> = cells
                .iter()
                .zip(&table.numeric_columns)
                .map(|(cell, &numeric)| {
                    let line = Line::from(cell.clone());
                    if numeric {
                        line.right_aligned()
                    } else {
                        line
                    }
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}
