//! Check command - render every view and report dataset problems.

use anyhow::{bail, Result};

use crate::dashboard::Dashboard;


const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";


fn status(label: &str, code: &str, color: bool) -> String {
    let padded = format!("{label:<4}");
    if color {
        format!("{code}{padded}{RESET}")
    } else {
        padded
    }
}


/// Run the check command.
pub fn run(dashboard: &Dashboard, color: bool) -> Result<()> {
    let results = dashboard.render_all();
    let mut failed = 0;

    for (name, result) in &results {
        match result {
            Ok(output) if !output.is_empty() => {
                let items = output.item_count();
                println!("{}  {} ({} items)", status("ok", GREEN, color), name, items);
            }
            Ok(_) => {
                failed += 1;
                tracing::warn!(view = %name, "check found an empty view");
                println!("{}  {}: rendered nothing", status("FAIL", RED, color), name);
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(view = %name, error = %e, "check failed");
                println!("{}  {}: {}", status("FAIL", RED, color), name, e);
            }
        }
    }

    if failed > 0 {
        bail!("{} view(s) failed to render", failed);
    }

    println!("\nAll {} views render.", results.len());
    Ok(())
}
