//! Interactive dashboard command.

use anyhow::Result;

use crate::dashboard::Dashboard;


/// Run the interactive dashboard.
pub fn run(dashboard: &Dashboard) -> Result<()> {
    crate::tui::run(dashboard)
}
