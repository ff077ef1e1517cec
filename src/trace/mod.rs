mod json_export;
mod models;
mod summary;

pub use json_export::get_json_data;
pub use models::{Trace, TraceStep};
pub use summary::TraceInfo;
