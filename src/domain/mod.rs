//! Domain layer for the zcountry plugin.
//!
//! Core types independent of Zellij APIs and of the HTTP transport.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country records as returned by the API
//! - [`query`]: Validated search query

pub mod country;
pub mod error;
pub mod query;

pub use country::{CountryRecord, Flags, Language};
pub use error::{CountryLookupError, Result};
pub use query::Query;
