//! Export command for chart images.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::{export_file_name, get_export_dir};
use crate::dashboard::Dashboard;
use crate::visualization::{export_png, export_svg, open_file};


/// Run the export command.
pub fn run(
    dashboard: &Dashboard,
    view: Option<&str>,
    svg: bool,
    should_open: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let session = super::select_view(dashboard, view)?;
    let name = session.selected(dashboard.registry())?.name.clone();
    let rendered = dashboard.render_selected(&session)?;

    // Determine format and output path
    let format_type = if svg { "svg" } else { "png" };
    let output_path = match output {
        Some(path) => path,
        None => get_export_dir()?.join(export_file_name(&name, format_type)),
    };

    println!("Exporting {} to {}...", name, format_type.to_uppercase());
    tracing::info!(view = %name, path = %output_path.display(), "exporting view");

    if svg {
        export_svg(&rendered, &output_path)?;
    } else {
        export_png(&rendered, &output_path)?;
    }

    println!("\x1b[32m+ Exported to: {}\x1b[0m", output_path.display());

    // Open if requested
    if should_open {
        println!("Opening {}...", format_type.to_uppercase());
        open_file(&output_path)?;
    }

    Ok(())
}
