//! Application settings and path constants.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};


pub const APP_NAME: &str = "secdash";

/// Width of text bars in the terminal printer.
pub const BAR_WIDTH: usize = 24;

/// Input poll interval for the interactive dashboard (milliseconds).
pub const TUI_TICK_MS: u64 = 250;

const DATASETS_FILE: &str = "datasets.json";


/// Directory holding the optional datasets file.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}


/// Default datasets override file.
pub fn get_default_datasets_path() -> PathBuf {
    get_config_dir().join(DATASETS_FILE)
}


/// Pick the datasets file: an explicit path wins, then the default file if present.
pub fn resolve_datasets_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let default = get_default_datasets_path();
    default.exists().then_some(default)
}


/// Directory for exported charts, created on demand.
pub fn get_export_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{APP_NAME}"))
        .join("exports");

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    Ok(dir)
}


/// File name for an exported view, e.g. `mfa-adoption.png`.
pub fn export_file_name(view_name: &str, extension: &str) -> String {
    let slug: String = view_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{slug}.{extension}")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(APP_NAME, "secdash");
        assert_eq!(BAR_WIDTH, 24);
        assert_eq!(TUI_TICK_MS, 250);
    }

    #[test]
    fn test_default_datasets_path() {
        let path = get_default_datasets_path();
        assert!(path.to_string_lossy().contains("secdash"));
        assert!(path.to_string_lossy().ends_with("datasets.json"));
    }

    #[test]
    fn test_explicit_datasets_path_wins() {
        let explicit = PathBuf::from("/tmp/custom.json");
        assert_eq!(resolve_datasets_path(Some(&explicit)), Some(explicit));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("MFA Adoption", "png"), "mfa-adoption.png");
        assert_eq!(export_file_name("Dashboard", "svg"), "dashboard.svg");
        assert_eq!(export_file_name("Tool  Inventory", "svg"), "tool-inventory.svg");
    }
}
