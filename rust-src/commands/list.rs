//! List command - show the registered views.

use anyhow::Result;

use crate::dashboard::Dashboard;


/// Run the list command.
pub fn run(dashboard: &Dashboard) -> Result<()> {
    let registry = dashboard.registry();
    let width = registry.names().map(|n| n.chars().count()).max().unwrap_or(0);

    for (i, view) in registry.iter().enumerate() {
        println!("{:>2}  {:width$}  {}", i + 1, view.name, view.kind, width = width);
    }

    Ok(())
}
