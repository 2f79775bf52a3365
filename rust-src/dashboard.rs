//! The render contract the surfaces call on every navigation event.

use crate::data::DatasetProvider;
use crate::error::DashboardError;
use crate::models::RenderedOutput;
use crate::navigation::{NavigationState, ViewRegistry};
use crate::render::render;


/// A view registry bound to a dataset provider.
pub struct Dashboard {
    registry: ViewRegistry,
    provider: Box<dyn DatasetProvider>,
}


impl Dashboard {
    pub fn new(registry: ViewRegistry, provider: Box<dyn DatasetProvider>) -> Self {
        tracing::debug!(views = registry.len(), provider = %provider.describe(), "dashboard ready");
        Self { registry, provider }
    }

    /// The eight built-in views over the built-in datasets.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::new(ViewRegistry::builtin(), Box::new(crate::data::BuiltinDatasets::new()))
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Start a fresh navigation session on the first view.
    pub fn session(&self) -> NavigationState {
        NavigationState::new(&self.registry)
    }

    /// Render the named view.
    pub fn render(&self, view_name: &str) -> Result<RenderedOutput, DashboardError> {
        let view = self.registry.get(view_name)?;
        let dataset = self.provider.get_dataset(&view.name)?;
        render(view, &dataset)
    }

    pub fn render_selected(
        &self,
        state: &NavigationState,
    ) -> Result<RenderedOutput, DashboardError> {
        self.render(state.selected_view())
    }

    /// Render every view in navigation order.
    pub fn render_all(&self) -> Vec<(&str, Result<RenderedOutput, DashboardError>)> {
        self.registry
            .names()
            .map(|name| (name, self.render(name)))
            .collect()
    }
}
