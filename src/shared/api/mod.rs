pub mod json_config;
pub mod response;

pub use response::{bad_request, internal_error, ErrorBody};
