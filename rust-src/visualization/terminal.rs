//! Plain terminal rendering of a view.

use crate::config::BAR_WIDTH;
use crate::models::{
    ChartKind, RenderedBody, RenderedCard, RenderedChart, RenderedOutput, RenderedTable, Tone,
};


// Constants
const ORANGE: &str = "\x1b[38;5;208m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const CARD_WIDTH: usize = 28;
const CARDS_PER_ROW: usize = 3;
const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];


/// ANSI escapes, or nothing when color is off.
#[derive(Debug, Clone, Copy)]
struct Paint {
    color: bool,
}


impl Paint {
    fn wrap(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn tone(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::Good => self.wrap(GREEN, text),
            Tone::Bad => self.wrap(RED, text),
        }
    }
}


/// Render a view as terminal text.
pub fn render_text(output: &RenderedOutput, color: bool) -> String {
    let paint = Paint { color };
    let mut lines = Vec::new();

    lines.push(paint.wrap(BOLD, &output.title));
    if let Some(subtitle) = &output.subtitle {
        lines.push(paint.wrap(DIM, subtitle));
    }
    lines.push(String::new());

    match &output.body {
        RenderedBody::Cards { cards, tiles } => {
            render_cards(&mut lines, cards, paint);
            if !tiles.is_empty() {
                lines.push(String::new());
                render_tiles(&mut lines, tiles, paint);
            }
        }
        RenderedBody::Chart(chart) => render_chart(&mut lines, chart, paint),
        RenderedBody::Table(table) => render_table(&mut lines, table),
    }

    lines.join("\n")
}


/// Render an error state in place of a view.
pub fn render_error_text(view: &str, message: &str, color: bool) -> String {
    let paint = Paint { color };
    format!(
        "{}\n{}",
        paint.wrap(BOLD, &format!("{view}: unable to render")),
        paint.wrap(RED, message)
    )
}


fn width(text: &str) -> usize {
    text.chars().count()
}


fn center(text: &str, cells: usize) -> String {
    let len = width(text);
    if len >= cells {
        return text.chars().take(cells).collect();
    }
    let left = (cells - len) / 2;
    let right = cells - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}


fn pad_right(text: &str, cells: usize) -> String {
    format!("{}{}", text, " ".repeat(cells.saturating_sub(width(text))))
}


fn pad_left(text: &str, cells: usize) -> String {
    format!("{}{}", " ".repeat(cells.saturating_sub(width(text))), text)
}


fn render_cards(lines: &mut Vec<String>, cards: &[RenderedCard], paint: Paint) {
    let inner = CARD_WIDTH - 2;
    let border = "─".repeat(inner);

    for row in cards.chunks(CARDS_PER_ROW) {
        let tops: Vec<String> = row.iter().map(|_| format!("┌{border}┐")).collect();
        let labels: Vec<String> = row
            .iter()
            .map(|card| format!("│{}│", center(&card.label.to_uppercase(), inner)))
            .collect();
        let values: Vec<String> = row
            .iter()
            .map(|card| {
                let plain = match &card.indicator {
                    Some(ind) => format!("{} {}", card.value, ind.symbol),
                    None => card.value.clone(),
                };
                let centered = center(&plain, inner);
                let value = paint.wrap(BOLD, &paint.wrap(ORANGE, &card.value));
                let painted = centered.replacen(&card.value, &value, 1);
                let painted = match &card.indicator {
                    Some(ind) => painted.replacen(ind.symbol, &paint.tone(ind.tone, ind.symbol), 1),
                    None => painted,
                };
                format!("│{painted}│")
            })
            .collect();
        let bottoms: Vec<String> = row.iter().map(|_| format!("└{border}┘")).collect();

        lines.push(tops.join("  "));
        lines.push(labels.join("  "));
        lines.push(values.join("  "));
        lines.push(bottoms.join("  "));
    }
}


fn sparkline(chart: &RenderedChart) -> String {
    let span = chart.max - chart.min;
    chart
        .points
        .iter()
        .map(|p| {
            if span <= 0.0 {
                return SPARK[SPARK.len() / 2];
            }
            let level = ((p.value - chart.min) / span * (SPARK.len() - 1) as f64).round() as usize;
            SPARK[level.min(SPARK.len() - 1)]
        })
        .collect()
}


fn render_tiles(lines: &mut Vec<String>, tiles: &[RenderedChart], paint: Paint) {
    let title_width = tiles.iter().map(|t| width(&t.title)).max().unwrap_or(0);
    let spark_width = tiles.iter().map(|t| t.points.len()).max().unwrap_or(0);

    for tile in tiles {
        let first = tile.points.first().map(|p| p.display.as_str()).unwrap_or("");
        let last = tile.points.last().map(|p| p.display.as_str()).unwrap_or("");
        let target = tile.target.as_deref().unwrap_or("");

        lines.push(format!(
            "{}  {}  {} → {}  {}",
            pad_right(&tile.title, title_width),
            paint.wrap(ORANGE, &pad_right(&sparkline(tile), spark_width)),
            first,
            last,
            paint.wrap(DIM, &format!("see detailed chart: {target}")),
        ));
    }
}


/// Create a simple text bar for visualization.
fn create_bar(value: f64, max_value: f64, width: usize, paint: Paint) -> String {
    if max_value <= 0.0 {
        return paint.wrap(DIM, &"░".repeat(width));
    }

    let filled = ((value / max_value) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}",
        paint.wrap(ORANGE, &"█".repeat(filled)),
        paint.wrap(DIM, &"░".repeat(width - filled)),
    )
}


fn render_chart(lines: &mut Vec<String>, chart: &RenderedChart, paint: Paint) {
    if chart.chart == ChartKind::Line {
        lines.push(format!("  {}", paint.wrap(ORANGE, &sparkline(chart))));
        lines.push(String::new());
    }

    let label_width = chart.points.iter().map(|p| width(&p.label)).max().unwrap_or(0);
    let value_width = chart.points.iter().map(|p| width(&p.display)).max().unwrap_or(0);

    for point in &chart.points {
        lines.push(format!(
            "  {} {} {}",
            pad_right(&point.label, label_width),
            create_bar(point.value, chart.max, BAR_WIDTH, paint),
            paint.wrap(CYAN, &pad_left(&point.display, value_width)),
        ));
    }

    lines.push(String::new());
    if let Some(y_label) = &chart.y_label {
        lines.push(paint.wrap(DIM, &format!("  y: {y_label}")));
    }
    if let Some(x_label) = &chart.x_label {
        lines.push(paint.wrap(DIM, &format!("  x: {x_label}")));
    }
}


fn render_table(lines: &mut Vec<String>, table: &RenderedTable) {
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            table
                .rows
                .iter()
                .map(|row| width(&row[col]))
                .chain(std::iter::once(width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    };

    let format_row = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if table.numeric_columns[col] {
                    pad_left(cell, widths[col])
                } else {
                    pad_right(cell, widths[col])
                }
            })
            .collect();
        format!("│ {} │", padded.join(" │ "))
    };

    lines.push(rule("┌", "┬", "┐"));
    lines.push(format_row(&table.columns));
    lines.push(rule("├", "┼", "┤"));
    for row in &table.rows {
        lines.push(format_row(row));
    }
    lines.push(rule("└", "┴", "┘"));
}
