//! The closed, ordered list of views.

use std::collections::HashMap;

use crate::error::DashboardError;
use crate::models::{View, ViewKind};


pub const DASHBOARD: &str = "Dashboard";
pub const VULNERABILITIES: &str = "Vulnerabilities";
pub const PHISHING: &str = "Phishing";
pub const MFA_ADOPTION: &str = "MFA Adoption";
pub const INCIDENTS: &str = "Incidents";
pub const TOOL_INVENTORY: &str = "Tool Inventory";
pub const CULTURE: &str = "Culture";
pub const COMPLIANCE: &str = "Compliance";


/// Ordered views with name lookup. Fixed once built.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<View>,
    index: HashMap<String, usize>,
}


impl ViewRegistry {
    /// Build a registry, rejecting empty lists and duplicate names.
    pub fn new(views: Vec<View>) -> Result<Self, DashboardError> {
        if views.is_empty() {
            return Err(DashboardError::EmptyRegistry);
        }

        let mut index = HashMap::with_capacity(views.len());
        for (pos, view) in views.iter().enumerate() {
            if index.insert(view.name.clone(), pos).is_some() {
                return Err(DashboardError::DuplicateView {
                    name: view.name.clone(),
                });
            }
        }

        Ok(Self { views, index })
    }

    /// The eight views of the executive dashboard.
    pub fn builtin() -> Self {
        let views = vec![
            View::new(DASHBOARD, "Cybersecurity Executive Dashboard", ViewKind::MetricsAndCharts)
                .with_subtitle("High-level summary of current cybersecurity posture."),
            View::new(VULNERABILITIES, "Vulnerability Remediation Trend", ViewKind::LineChart),
            View::new(PHISHING, "Phishing Detection Trend", ViewKind::BarChart),
            View::new(MFA_ADOPTION, "MFA Adoption Trend", ViewKind::LineChart),
            View::new(INCIDENTS, "Incident Response Details", ViewKind::Table),
            View::new(TOOL_INVENTORY, "Security Tool Inventory", ViewKind::Table),
            View::new(CULTURE, "Security Culture and Awareness", ViewKind::Table),
            View::new(COMPLIANCE, "Compliance Scorecard", ViewKind::Table),
        ];

        let index = views
            .iter()
            .enumerate()
            .map(|(pos, view)| (view.name.clone(), pos))
            .collect();

        Self { views, index }
    }

    /// Keep only the named views, in the given order.
    pub fn subset(&self, names: &[&str]) -> Result<Self, DashboardError> {
        let mut views = Vec::with_capacity(names.len());
        for name in names {
            views.push(self.get(name)?.clone());
        }
        Self::new(views)
    }

    pub fn get(&self, name: &str) -> Result<&View, DashboardError> {
        self.index
            .get(name)
            .map(|&pos| &self.views[pos])
            .ok_or_else(|| DashboardError::invalid_view(name))
    }

    pub fn at(&self, pos: usize) -> Option<&View> {
        self.views.get(pos)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn first(&self) -> &View {
        // Non-empty by construction.
        &self.views[0]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|v| v.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }
}
