//! Navigation state owned by a single session.

use crate::error::DashboardError;
use crate::models::View;

use super::ViewRegistry;


/// User navigation actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Select(String),
    SelectIndex(usize),
    Next,
    Prev,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Changed { from: String, to: String },
    Unchanged(String),
}


/// The currently selected view. Always a member of the registry it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    selected_view: String,
}


impl NavigationState {
    pub fn new(registry: &ViewRegistry) -> Self {
        Self {
            selected_view: registry.first().name.clone(),
        }
    }

    pub fn selected_view(&self) -> &str {
        &self.selected_view
    }

    pub fn selected<'r>(&self, registry: &'r ViewRegistry) -> Result<&'r View, DashboardError> {
        registry.get(&self.selected_view)
    }

    /// Select a view by name. Unknown names leave the state untouched.
    pub fn select<'r>(
        &mut self,
        registry: &'r ViewRegistry,
        name: &str,
    ) -> Result<&'r View, DashboardError> {
        let view = registry.get(name)?;
        self.selected_view = view.name.clone();
        Ok(view)
    }

    pub fn apply(
        &mut self,
        registry: &ViewRegistry,
        command: NavCommand,
    ) -> Result<NavEvent, DashboardError> {
        let from = self.selected_view.clone();

        let to = match command {
            NavCommand::Select(name) => registry.get(&name)?.name.clone(),
            NavCommand::SelectIndex(pos) => registry
                .at(pos)
                .map(|v| v.name.clone())
                .ok_or_else(|| DashboardError::invalid_view(format!("#{}", pos + 1)))?,
            NavCommand::Next => self.rotate(registry, 1),
            NavCommand::Prev => self.rotate(registry, -1),
        };

        if to == from {
            return Ok(NavEvent::Unchanged(from));
        }

        tracing::debug!(from = %from, to = %to, "view selected");
        self.selected_view = to.clone();
        Ok(NavEvent::Changed { from, to })
    }

    fn rotate(&self, registry: &ViewRegistry, delta: isize) -> String {
        let current = registry.position(&self.selected_view).unwrap_or(0) as isize;
        let len = registry.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        registry
            .at(next)
            .unwrap_or_else(|| registry.first())
            .name
            .clone()
    }
}
