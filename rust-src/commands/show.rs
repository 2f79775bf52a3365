//! Show command - print rendered views.

use anyhow::{bail, Result};

use crate::dashboard::Dashboard;
use crate::models::RenderedOutput;
use crate::visualization::{render_error_text, render_text};


/// Run the show command.
pub fn run(
    dashboard: &Dashboard,
    view: Option<&str>,
    all: bool,
    json: bool,
    color: bool,
) -> Result<()> {
    if all {
        return show_all(dashboard, json, color);
    }

    let session = super::select_view(dashboard, view)?;
    let output = dashboard.render_selected(&session)?;
    print_output(&output, json, color)
}


fn print_output(output: &RenderedOutput, json: bool, color: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        println!("{}", render_text(output, color));
    }
    Ok(())
}


fn show_all(dashboard: &Dashboard, json: bool, color: bool) -> Result<()> {
    let results = dashboard.render_all();
    let total = results.len();
    let mut rendered = Vec::with_capacity(total);
    let mut failed = 0;

    for (name, result) in results {
        match result {
            Ok(output) => rendered.push(output),
            Err(e) => {
                failed += 1;
                tracing::warn!(view = %name, error = %e, "view failed to render");
                if !json {
                    eprintln!("{}\n", render_error_text(name, &e.to_string(), color));
                }
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        let texts: Vec<String> = rendered.iter().map(|o| render_text(o, color)).collect();
        println!("{}", texts.join("\n\n"));
    }

    if failed > 0 {
        bail!("{} of {} views failed to render", failed, total);
    }

    Ok(())
}
