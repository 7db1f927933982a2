//! Core module - configuration and error definitions
//!
//! - [`Config`] - engine configuration
//! - [`SeatingError`] - engine errors

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{SeatingError, SeatingResult};
