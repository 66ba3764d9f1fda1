//! Random human name generation from name list files.
//!
//! This crate provides:
//! - Loading of flat name lists (one name per line, or first column of a CSV export)
//! - Loading of grouped name lists (one group per column, e.g. by decade)
//! - Composition of full names with an optional, probabilistic middle name
//! - A TOML configuration model for the command-line front end
//!
//! Missing files never abort a load: the result is simply empty and a
//! warning is logged. Deciding whether an empty list is fatal is left to
//! the caller, see [`model::NameComposer::compose_checked`].

/// Name sources, grouped sources and the composer.
pub mod model;

/// Generator configuration (paths, file format, probability, seed).
pub mod config;

/// Crate error type.
pub mod error;

/// File reading and the shared delimited-text parser.
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
