//! View registry and per-session navigation state.

mod registry;
mod state;

pub use registry::{
    ViewRegistry, COMPLIANCE, CULTURE, DASHBOARD, INCIDENTS, MFA_ADOPTION, PHISHING,
    TOOL_INVENTORY, VULNERABILITIES,
};
pub use state::{NavCommand, NavEvent, NavigationState};
