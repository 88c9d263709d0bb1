pub mod analyze;

pub use analyze::{analyze, analyze_at, build_form_data};
