use std::fmt;
use std::path::Path;

use log::{debug, info};

use super::name_source::NameSource;
use crate::error::{Error, Result};
use crate::io::{or_empty, parse_table, read_file, ParseOptions};

/// Label and size of one group, for display and selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSummary {
	pub label: String,
	pub count: usize,
}

impl fmt::Display for GroupSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.label, self.count)
	}
}

/// Name lists partitioned by column, e.g. first names by decade.
///
/// Built from a delimited file whose header row names the groups. Each data
/// row contributes at most one name per group, by position.
///
/// # Invariants
/// - `labels.len() == sources.len()`
/// - Individual groups may be empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedNameSource {
	labels: Vec<String>,
	sources: Vec<NameSource>,
}

impl GroupedNameSource {
	/// Parses a multi-column delimited text.
	///
	/// # Notes
	/// - Rows shorter than the header only fill their leading groups
	/// - Cells past the header width are ignored
	/// - A blank or missing header yields zero groups
	pub fn parse(contents: &str, delimiter: char) -> Self {
		let table = parse_table(contents, ParseOptions::named_columns(delimiter));
		Self {
			labels: table.labels,
			sources: table.columns.into_iter().map(NameSource::from_column).collect(),
		}
	}

	/// Reads a multi-column delimited file.
	///
	/// # Errors
	/// Returns `Error::MissingFile` if the file cannot be opened.
	pub fn read<P: AsRef<Path>>(filepath: P, delimiter: char) -> Result<Self> {
		let path = filepath.as_ref();
		let grouped = Self::parse(&read_file(path)?, delimiter);
		info!("Loaded {} groups from file: {}", grouped.len(), path.display());
		for group in grouped.list_groups() {
			debug!("Group {group}");
		}
		Ok(grouped)
	}

	/// Like [`GroupedNameSource::read`], but an unreadable file yields zero
	/// groups and a logged warning.
	pub fn load<P: AsRef<Path>>(filepath: P, delimiter: char) -> Self {
		or_empty(Self::read(filepath, delimiter))
	}

	/// Ordered `(label, count)` pairs.
	pub fn list_groups(&self) -> Vec<GroupSummary> {
		self.labels
			.iter()
			.zip(&self.sources)
			.map(|(label, source)| GroupSummary { label: label.clone(), count: source.len() })
			.collect()
	}

	/// Returns the group at a 0-based `index`.
	///
	/// # Errors
	/// Returns `Error::IndexOutOfRange` if `index >= self.len()`.
	pub fn select_group(&self, index: usize) -> Result<&NameSource> {
		self.sources.get(index).ok_or(Error::IndexOutOfRange { index, len: self.len() })
	}

	/// Returns the group at a 1-based `ordinal`, as typed by a user.
	///
	/// # Errors
	/// Returns `Error::GroupOutOfRange`, carrying `ordinal` unchanged, for `0`
	/// or any ordinal past the last group.
	pub fn select_ordinal(&self, ordinal: usize) -> Result<&NameSource> {
		ordinal
			.checked_sub(1)
			.and_then(|index| self.sources.get(index))
			.ok_or(Error::GroupOutOfRange { ordinal, len: self.len() })
	}

	/// Returns the first group whose label equals `label`.
	pub fn find_group(&self, label: &str) -> Option<&NameSource> {
		let index = self.labels.iter().position(|l| l == label)?;
		self.sources.get(index)
	}

	pub fn labels(&self) -> &[String] {
		&self.labels
	}

	/// Number of groups.
	pub fn len(&self) -> usize {
		self.sources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}
}
