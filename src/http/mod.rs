//! HTTP response layer
//!
//! Response builders shared by all handlers.

pub mod response;

pub use response::{build_404_response, build_405_response, build_text_response, json_response};
