//! Country-data API boundary.
//!
//! The plugin never performs I/O itself: the event handler emits a fetch action
//! carrying a URL built here, the Zellij host performs the request, and the raw
//! result comes back as an event that is decoded here.
//!
//! - `request`: URL construction and request context keys
//! - `response`: status/body decoding into country records

pub mod request;
pub mod response;

pub use request::{
    generation_from_context, search_url, CONTEXT_GENERATION, CONTEXT_QUERY, DEFAULT_API_BASE_URL,
};
pub use response::decode_search_response;
