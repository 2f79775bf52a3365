//! Text and image surfaces for rendered views.

mod export;
mod terminal;

pub use export::{export_png, export_svg, open_file};
pub use terminal::{render_error_text, render_text};
