use std::path::Path;

use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::Result;
use crate::io::{or_empty, parse_table, read_file, ParseOptions};

/// A flat list of candidate names for one name component.
///
/// # Responsibilities
/// - Load names from a line-oriented or single-column delimited file
/// - Draw one name uniformly at random
///
/// # Invariants
/// - No entry is empty, padded with whitespace, or spans several lines
/// - Immutable once loaded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSource {
	names: Vec<String>,
}

impl NameSource {
	/// Builds a source from in-memory names.
	///
	/// Entries are trimmed; entries empty after trimming are dropped.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let names = names
			.into_iter()
			.map(|name| name.as_ref().trim().to_owned())
			.filter(|name| !name.is_empty())
			.collect();
		Self { names }
	}

	/// Wraps an already cleaned column.
	pub(crate) fn from_column(names: Vec<String>) -> Self {
		Self { names }
	}

	/// Parses a one-name-per-line text.
	pub fn parse_flat(contents: &str) -> Self {
		Self::from_table_column(contents, ParseOptions::lines())
	}

	/// Parses a delimited text, discarding the header row and keeping
	/// only the text before the first `delimiter` of each row.
	pub fn parse_flat_from_delimited(contents: &str, delimiter: char) -> Self {
		Self::from_table_column(contents, ParseOptions::first_column(delimiter))
	}

	fn from_table_column(contents: &str, options: ParseOptions) -> Self {
		let table = parse_table(contents, options);
		Self::from_column(table.columns.into_iter().next().unwrap_or_default())
	}

	/// Reads a one-name-per-line file.
	///
	/// # Errors
	/// Returns `Error::MissingFile` if the file cannot be opened.
	pub fn read_flat<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		let source = Self::parse_flat(&read_file(path)?);
		info!("Loaded {} names from file: {}", source.len(), path.display());
		Ok(source)
	}

	/// Reads a delimited file, first column only, header row discarded.
	///
	/// # Errors
	/// Returns `Error::MissingFile` if the file cannot be opened.
	pub fn read_flat_from_delimited<P: AsRef<Path>>(filepath: P, delimiter: char) -> Result<Self> {
		let path = filepath.as_ref();
		let source = Self::parse_flat_from_delimited(&read_file(path)?, delimiter);
		info!("Loaded {} names from delimited file: {}", source.len(), path.display());
		Ok(source)
	}

	/// Like [`NameSource::read_flat`], but an unreadable file yields an empty
	/// source and a logged warning.
	pub fn load_flat<P: AsRef<Path>>(filepath: P) -> Self {
		or_empty(Self::read_flat(filepath))
	}

	/// Like [`NameSource::read_flat_from_delimited`], but an unreadable file
	/// yields an empty source and a logged warning.
	pub fn load_flat_from_delimited<P: AsRef<Path>>(filepath: P, delimiter: char) -> Self {
		or_empty(Self::read_flat_from_delimited(filepath, delimiter))
	}

	/// Draws one name uniformly at random.
	///
	/// Returns `None` when the source is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.names.choose(rng).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Names in file order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn contains(&self, name: &str) -> bool {
		self.names.iter().any(|n| n == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}
}
