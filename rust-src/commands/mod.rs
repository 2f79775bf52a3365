//! CLI command implementations.

pub mod check;
pub mod export;
pub mod list;
pub mod show;
pub mod tui;

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::resolve_datasets_path;
use crate::dashboard::Dashboard;
use crate::data::{BuiltinDatasets, DatasetProvider, JsonDatasets, Layered};
use crate::error::DashboardError;
use crate::navigation::{NavigationState, ViewRegistry};


/// Build the dashboard, layering a datasets file over the built-ins when one is configured.
///
/// `views` restricts navigation to the named views, in that order.
pub fn load_dashboard(data: Option<&Path>, views: &[String]) -> Result<Dashboard> {
    let builtin = ViewRegistry::builtin();
    let registry = if views.is_empty() {
        builtin.clone()
    } else {
        let names: Vec<&str> = views.iter().map(String::as_str).collect();
        builtin.subset(&names)?
    };

    let provider: Box<dyn DatasetProvider> = match resolve_datasets_path(data) {
        Some(path) => {
            let overrides = JsonDatasets::from_path(&path)?;
            check_override_names(&builtin, &overrides, &path)?;
            Box::new(Layered::new(overrides, BuiltinDatasets::new()))
        }
        None => Box::new(BuiltinDatasets::new()),
    };

    tracing::debug!(provider = %provider.describe(), "dataset provider selected");
    Ok(Dashboard::new(registry, provider))
}


/// Every key in a datasets file must name a known view.
fn check_override_names(
    registry: &ViewRegistry,
    overrides: &JsonDatasets,
    path: &Path,
) -> Result<()> {
    for name in overrides.view_names() {
        if !registry.contains(name) {
            tracing::error!(
                view = %name,
                path = %path.display(),
                "datasets file names an unknown view"
            );
            return Err(anyhow!(
                "{} in datasets file {}",
                DashboardError::invalid_view(name),
                path.display()
            ));
        }
    }
    Ok(())
}


/// A fresh session on the requested view, or on the first one.
pub fn select_view(
    dashboard: &Dashboard,
    view: Option<&str>,
) -> Result<NavigationState, DashboardError> {
    let mut session = dashboard.session();
    if let Some(name) = view {
        session.select(dashboard.registry(), name)?;
    }
    Ok(session)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{DASHBOARD, INCIDENTS};
    use std::io::Write;

    fn write_json(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_unknown_override_key_is_rejected() {
        let file = write_json(
            r#"{"incidents": {"type": "table", "columns": ["A"], "rows": [[1]]}}"#,
        );
        let err = load_dashboard(Some(file.path()), &[]).err().unwrap();
        assert!(err.to_string().starts_with("unknown view 'incidents' in datasets file"));
    }

    #[test]
    fn test_known_override_key_is_used() {
        let file = write_json(
            r#"{"Incidents": {"type": "table", "columns": ["A"], "rows": [[1]]}}"#,
        );
        let dashboard = load_dashboard(Some(file.path()), &[]).unwrap();
        assert_eq!(dashboard.render(INCIDENTS).unwrap().item_count(), 1);
    }

    #[test]
    fn test_restricted_views() {
        let views = vec![INCIDENTS.to_string(), DASHBOARD.to_string()];
        let dashboard = load_dashboard(None, &views).unwrap();
        assert_eq!(
            dashboard.registry().names().collect::<Vec<_>>(),
            vec![INCIDENTS, DASHBOARD]
        );
        assert_eq!(select_view(&dashboard, None).unwrap().selected_view(), INCIDENTS);
    }

    #[test]
    fn test_restricted_views_reject_unknown_and_duplicates() {
        let err = load_dashboard(None, &["Payroll".to_string()]).err().unwrap();
        assert_eq!(err.to_string(), "unknown view 'Payroll'");

        let twice = vec![INCIDENTS.to_string(), INCIDENTS.to_string()];
        let err = load_dashboard(None, &twice).err().unwrap();
        assert_eq!(
            err.downcast_ref::<DashboardError>(),
            Some(&DashboardError::DuplicateView { name: INCIDENTS.to_string() })
        );
    }

    #[test]
    fn test_select_view() {
        let dashboard = load_dashboard(None, &[]).unwrap();
        let session = select_view(&dashboard, Some(INCIDENTS)).unwrap();
        assert_eq!(session.selected(dashboard.registry()).unwrap().name, INCIDENTS);
        assert_eq!(
            select_view(&dashboard, Some("Payroll")).unwrap_err(),
            DashboardError::invalid_view("Payroll")
        );
    }
}
