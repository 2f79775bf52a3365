//! Dataset providers feeding the views.

mod builtin;
mod json_file;
mod provider;

pub use builtin::BuiltinDatasets;
pub use json_file::JsonDatasets;
pub use provider::{DatasetProvider, Layered};
