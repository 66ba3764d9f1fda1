use std::path::PathBuf;

use thiserror::Error;

use crate::model::composer::NameRole;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading name lists or composing names.
///
/// `MissingFile` and `Io` are recovered by the soft `load_*` constructors
/// (logged, empty source returned). The remaining variants are hard stops
/// for the current generation attempt.
#[derive(Error, Debug)]
pub enum Error {
	/// A name list could not be opened.
	#[error("could not open file {}: {source}", path.display())]
	MissingFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A first or last name list has no entries.
	#[error("{0} name source is empty, cannot compose a name")]
	EmptyRequiredSource(NameRole),

	/// Group selection outside `[0, len)`.
	#[error("group index {index} out of range (available groups: {len})")]
	IndexOutOfRange { index: usize, len: usize },

	/// 1-based group number, as typed by a user, that names no group.
	#[error("group {ordinal} does not exist ({len} groups available)")]
	GroupOutOfRange { ordinal: usize, len: usize },

	/// Middle name inclusion probability outside `[0.0, 1.0]`.
	#[error("middle name probability must be between 0.0 and 1.0, got {0}")]
	InvalidProbability(f64),

	/// Invalid or incomplete configuration.
	#[error("configuration error: {0}")]
	Config(String),

	/// Malformed TOML configuration file.
	#[error("invalid configuration file: {0}")]
	Toml(#[from] toml::de::Error),

	/// Any other I/O failure while reading an opened file.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}
