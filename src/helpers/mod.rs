// Small shared helpers

pub mod format;
pub mod validate;

pub use format::{format_millis, format_number};
pub use validate::{validate_query_description, validate_query_name};
