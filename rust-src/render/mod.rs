//! Pure view rendering: dataset validation and display formatting.

mod format;
mod renderer;

pub use format::format_value;
pub use renderer::render;
