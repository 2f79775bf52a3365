//! Configuration and settings for secdash.

mod settings;

pub use settings::{
    export_file_name,
    get_export_dir,
    resolve_datasets_path,
    BAR_WIDTH,
    TUI_TICK_MS,
};
