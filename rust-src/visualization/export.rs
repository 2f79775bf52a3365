//! SVG and PNG export of rendered views.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{
    ChartKind, RenderedBody, RenderedCard, RenderedChart, RenderedOutput, RenderedTable, Tone,
};
use crate::render::format_value;


// Color scheme
const BG: &str = "#f0f2f6";
const PANEL: &str = "#ffffff";
const TEXT: &str = "#111111";
const TEXT_SECONDARY: &str = "#6b6b68";
const GRID: &str = "#d9dce3";
const GOOD: &str = "#2ca02c";
const BAD: &str = "#d62728";

// Layout
const MARGIN: i32 = 30;
const HEADER_HEIGHT: i32 = 80;
const PAGE_WIDTH: i32 = 1200;
const CARD_HEIGHT: i32 = 110;
const CARD_GAP: i32 = 16;
const TILE_HEIGHT: i32 = 220;
const TILES_PER_ROW: i32 = 3;
const CHART_HEIGHT: i32 = 520;
const ROW_HEIGHT: i32 = 34;
const CHAR_WIDTH: i32 = 9;
const Y_TICKS: i32 = 5;


/// Export a rendered view as SVG.
pub fn export_svg(output: &RenderedOutput, output_path: &Path) -> Result<()> {
    let svg_content = generate_svg(output);

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export a rendered view as PNG.
pub fn export_png(output: &RenderedOutput, output_path: &Path) -> Result<()> {
    let svg_content = generate_svg(output);

    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    // Parse SVG
    let tree = resvg::usvg::Tree::from_str(&svg_content, &options).context("Failed to parse SVG")?;

    // Render to pixmap
    let size = tree.size();
    let width = size.width() as u32;
    let height = size.height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).context("Failed to create pixmap")?;

    let bg = hex_to_rgb(BG);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Generate the SVG document for a view.
pub fn generate_svg(output: &RenderedOutput) -> String {
    let mut body = Vec::new();

    let (width, height) = match &output.body {
        RenderedBody::Cards { cards, tiles } => draw_cards_page(&mut body, cards, tiles),
        RenderedBody::Chart(chart) => {
            let width = PAGE_WIDTH;
            let panel = Rect {
                x: MARGIN,
                y: HEADER_HEIGHT,
                w: width - 2 * MARGIN,
                h: CHART_HEIGHT,
            };
            draw_panel(&mut body, &panel);
            draw_chart(&mut body, chart, &panel.inset(70, 30, 30, 60), true);
            (width, HEADER_HEIGHT + CHART_HEIGHT + MARGIN)
        }
        RenderedBody::Table(table) => draw_table_page(&mut body, table),
    };

    let mut svg_parts = vec![
        format!(
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            width, height
        ),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 26px sans-serif; }}", TEXT),
        format!("  .subtitle {{ fill: {}; font: 15px sans-serif; }}", TEXT_SECONDARY),
        format!("  .label {{ fill: {}; font: bold 13px sans-serif; }}", TEXT_SECONDARY),
        format!("  .value {{ fill: {}; font: bold 34px sans-serif; }}", TEXT),
        format!("  .tick {{ fill: {}; font: 12px sans-serif; }}", TEXT_SECONDARY),
        format!("  .cell {{ fill: {}; font: 14px sans-serif; }}", TEXT),
        format!("  .header {{ fill: {}; font: bold 14px sans-serif; }}", TEXT),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, width, height, BG),
        format!(
            r#"<text x="{}" y="42" class="title" text-anchor="middle">{}</text>"#,
            width / 2,
            escape_xml(&output.title)
        ),
    ];

    if let Some(subtitle) = &output.subtitle {
        svg_parts.push(format!(
            r#"<text x="{}" y="66" class="subtitle" text-anchor="middle">{}</text>"#,
            width / 2,
            escape_xml(subtitle)
        ));
    }

    svg_parts.extend(body);
    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}


#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}


impl Rect {
    fn inset(&self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        Rect {
            x: self.x + left,
            y: self.y + top,
            w: (self.w - left - right).max(1),
            h: (self.h - top - bottom).max(1),
        }
    }
}


fn draw_panel(parts: &mut Vec<String>, rect: &Rect) {
    parts.push(format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="{}" stroke="{}"/>"#,
        rect.x, rect.y, rect.w, rect.h, PANEL, GRID
    ));
}


fn draw_cards_page(
    parts: &mut Vec<String>,
    cards: &[RenderedCard],
    tiles: &[RenderedChart],
) -> (i32, i32) {
    let width = PAGE_WIDTH;
    let count = cards.len().max(1) as i32;
    let card_width = (width - 2 * MARGIN - (count - 1) * CARD_GAP) / count;

    for (i, card) in cards.iter().enumerate() {
        let rect = Rect {
            x: MARGIN + i as i32 * (card_width + CARD_GAP),
            y: HEADER_HEIGHT,
            w: card_width,
            h: CARD_HEIGHT,
        };
        draw_card(parts, card, &rect);
    }

    let tiles_top = HEADER_HEIGHT + CARD_HEIGHT + 2 * CARD_GAP;
    let tile_width = (width - 2 * MARGIN - (TILES_PER_ROW - 1) * CARD_GAP) / TILES_PER_ROW;

    for (i, tile) in tiles.iter().enumerate() {
        let (row, col) = (i as i32 / TILES_PER_ROW, i as i32 % TILES_PER_ROW);
        let rect = Rect {
            x: MARGIN + col * (tile_width + CARD_GAP),
            y: tiles_top + row * (TILE_HEIGHT + CARD_GAP),
            w: tile_width,
            h: TILE_HEIGHT,
        };
        draw_panel(parts, &rect);
        parts.push(format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            rect.x + rect.w / 2,
            rect.y + 24,
            escape_xml(&tile.title)
        ));
        draw_chart(parts, tile, &rect.inset(20, 40, 20, 40), false);
        if let Some(target) = &tile.target {
            parts.push(format!(
                r#"<text x="{}" y="{}" class="tick" text-anchor="middle">See detailed chart: {}</text>"#,
                rect.x + rect.w / 2,
                rect.y + rect.h - 14,
                escape_xml(target)
            ));
        }
    }

    let tile_rows = (tiles.len() as i32 + TILES_PER_ROW - 1) / TILES_PER_ROW;
    let height = tiles_top + tile_rows * (TILE_HEIGHT + CARD_GAP) + MARGIN;
    (width, height)
}


fn draw_card(parts: &mut Vec<String>, card: &RenderedCard, rect: &Rect) {
    let cx = rect.x + rect.w / 2;
    draw_panel(parts, rect);
    parts.push(format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        cx,
        rect.y + 34,
        escape_xml(&card.label.to_uppercase())
    ));

    let indicator = card
        .indicator
        .as_ref()
        .map(|ind| {
            let color = match ind.tone {
                Tone::Good => GOOD,
                Tone::Bad => BAD,
            };
            format!(r#" <tspan fill="{}">{}</tspan>"#, color, ind.symbol)
        })
        .unwrap_or_default();

    parts.push(format!(
        r#"<text x="{}" y="{}" class="value" text-anchor="middle">{}{}</text>"#,
        cx,
        rect.y + 80,
        escape_xml(&card.value),
        indicator
    ));
}


/// Plot bounds: bars start at zero, lines hug the data.
fn value_range(chart: &RenderedChart) -> (f64, f64) {
    let (lo, hi) = match chart.chart {
        ChartKind::Bar => (chart.min.min(0.0), chart.max.max(0.0)),
        ChartKind::Line => (chart.min, chart.max),
    };
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    match chart.chart {
        ChartKind::Bar => (lo, hi + span * 0.1),
        ChartKind::Line => (lo - span * 0.1, hi + span * 0.1),
    }
}


fn draw_chart(parts: &mut Vec<String>, chart: &RenderedChart, area: &Rect, axes: bool) {
    let (lo, hi) = value_range(chart);
    let n = chart.points.len().max(1) as f64;
    let slot = area.w as f64 / n;
    let to_y = |v: f64| area.y as f64 + area.h as f64 * (1.0 - (v - lo) / (hi - lo));
    let to_x = |i: usize| area.x as f64 + slot * (i as f64 + 0.5);

    if axes {
        for tick in 0..=Y_TICKS {
            let value = lo + (hi - lo) * tick as f64 / Y_TICKS as f64;
            let y = to_y(value);
            parts.push(format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                area.x,
                y,
                area.x + area.w,
                y,
                GRID
            ));
            parts.push(format!(
                r#"<text x="{}" y="{:.1}" class="tick" text-anchor="end">{}</text>"#,
                area.x - 8,
                y + 4.0,
                format_value(value.round())
            ));
        }

        for (i, point) in chart.points.iter().enumerate() {
            parts.push(format!(
                r#"<text x="{:.1}" y="{}" class="tick" text-anchor="middle">{}</text>"#,
                to_x(i),
                area.y + area.h + 20,
                escape_xml(&point.label)
            ));
        }

        if let Some(y_label) = &chart.y_label {
            let (x, y) = (area.x - 52, area.y + area.h / 2);
            parts.push(format!(
                r#"<text x="{}" y="{}" class="label" text-anchor="middle" transform="rotate(-90 {} {})">{}</text>"#,
                x,
                y,
                x,
                y,
                escape_xml(y_label)
            ));
        }
        if let Some(x_label) = &chart.x_label {
            parts.push(format!(
                r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
                area.x + area.w / 2,
                area.y + area.h + 44,
                escape_xml(x_label)
            ));
        }
    }

    match chart.chart {
        ChartKind::Bar => {
            let bar_width = slot * 0.7;
            let baseline = to_y(lo.max(0.0).min(hi));
            for (i, point) in chart.points.iter().enumerate() {
                let top = to_y(point.value);
                let (y, h) = if top < baseline {
                    (top, baseline - top)
                } else {
                    (baseline, top - baseline)
                };
                parts.push(format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" class="bar"><title>{}: {}</title></rect>"#,
                    to_x(i) - bar_width / 2.0,
                    y,
                    bar_width,
                    h,
                    escape_xml(&chart.color),
                    escape_xml(&point.label),
                    point.display
                ));
            }
        }
        ChartKind::Line => {
            let coords: Vec<String> = chart
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{:.1},{:.1}", to_x(i), to_y(p.value)))
                .collect();
            parts.push(format!(
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="3"/>"#,
                coords.join(" "),
                escape_xml(&chart.color)
            ));
            for (i, point) in chart.points.iter().enumerate() {
                parts.push(format!(
                    r#"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{}" class="marker"><title>{}: {}</title></circle>"#,
                    to_x(i),
                    to_y(point.value),
                    escape_xml(&chart.color),
                    escape_xml(&point.label),
                    point.display
                ));
            }
        }
    }
}


fn draw_table_page(parts: &mut Vec<String>, table: &RenderedTable) -> (i32, i32) {
    let widths: Vec<i32> = table
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
            longest as i32 * CHAR_WIDTH + 32
        })
        .collect();

    let table_width: i32 = widths.iter().sum();
    let width = (table_width + 2 * MARGIN).max(PAGE_WIDTH / 2);
    let rows = table.rows.len() as i32 + 1;
    let height = HEADER_HEIGHT + rows * ROW_HEIGHT + MARGIN;

    let panel = Rect {
        x: MARGIN,
        y: HEADER_HEIGHT,
        w: table_width,
        h: rows * ROW_HEIGHT,
    };
    draw_panel(parts, &panel);
    parts.push(format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        panel.x, panel.y, panel.w, ROW_HEIGHT, GRID
    ));

    let draw_row = |parts: &mut Vec<String>, cells: &[String], row: i32, class: &str| {
        let y = HEADER_HEIGHT + row * ROW_HEIGHT + ROW_HEIGHT / 2 + 5;
        let mut x = MARGIN;
        for (col, cell) in cells.iter().enumerate() {
            let (anchor, tx) = if table.numeric_columns[col] && class == "cell" {
                ("end", x + widths[col] - 16)
            } else {
                ("start", x + 16)
            };
            parts.push(format!(
                r#"<text x="{}" y="{}" class="{}" text-anchor="{}">{}</text>"#,
                tx,
                y,
                class,
                anchor,
                escape_xml(cell)
            ));
            x += widths[col];
        }
    };

    draw_row(parts, table.columns.as_slice(), 0, "header");
    for (i, row) in table.rows.iter().enumerate() {
        let row_index = i as i32 + 1;
        if row_index > 1 {
            let y = HEADER_HEIGHT + row_index * ROW_HEIGHT;
            parts.push(format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
                MARGIN,
                y,
                MARGIN + table_width,
                y,
                GRID
            ));
        }
        draw_row(parts, row.as_slice(), row_index, "cell");
    }

    (width, height)
}


/// Escape text for inclusion in SVG.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}


/// Convert hex color to RGB tuple.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return (0, 0, 0);
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}
