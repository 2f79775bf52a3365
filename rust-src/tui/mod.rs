//! Full-screen interactive dashboard.

mod app;
mod render;
mod session;

pub use app::run;
