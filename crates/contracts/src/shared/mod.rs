pub mod api_error;
pub mod api_paths;
pub mod date_utils;

pub use api_error::ApiError;
pub use date_utils::{format_date, format_date_in, parse_date_like, INVALID_DATE};
