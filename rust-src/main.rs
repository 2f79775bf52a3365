//! secdash - cybersecurity executive dashboard
//!
//! Eight static views (metrics, trends, incident tables) with a pure renderer
//! behind a terminal, text and image front end.

mod cli;
mod commands;
mod config;
mod dashboard;
mod data;
mod error;
mod models;
mod navigation;
mod render;
mod tui;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
