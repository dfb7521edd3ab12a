//! gassplit — split the gasoline cost of a shared car trip.
//!
//! The library exposes the validation and cost-splitting core plus the
//! supporting pieces the CLI is built from: locale dictionaries, the places
//! client, the average-price lookup and its disk cache.

pub mod cache;
pub mod cost;
pub mod error;
pub mod form;
pub mod locale;
pub mod logging;
pub mod places;
pub mod price;
pub mod validate;

pub use error::{Result, SplitError};
