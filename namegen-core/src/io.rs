use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a text file into memory.
///
/// - Opening failures map to `Error::MissingFile`
/// - Invalid UTF-8 sequences are replaced rather than rejected
/// - A leading byte order mark is dropped
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut file = File::open(path).map_err(|source| Error::MissingFile {
		path: path.to_path_buf(),
		source,
	})?;

	let mut bytes = Vec::new();
	file.read_to_end(&mut bytes)?;

	let decoded = String::from_utf8_lossy(&bytes);
	let contents: &str = &decoded;
	Ok(contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(contents).to_owned())
}

/// Turns a failed load into an empty value, logging the failure.
///
/// Used by the soft loaders: a missing list must not stop the program,
/// callers decide later whether an empty source is fatal.
pub(crate) fn or_empty<T: Default>(result: Result<T>) -> T {
	match result {
		Ok(value) => value,
		Err(e) => {
			warn!("{e}; continuing without these names");
			T::default()
		}
	}
}

/// What to do with the first row of a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Header {
	/// Every line is data.
	None,
	/// First line is discarded whatever it contains.
	Skip,
	/// First line provides the column labels.
	Labels,
}

/// Which cells of a data row are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Columns {
	/// Text before the first delimiter only.
	First,
	/// Every cell, by position, up to the header width.
	All,
}

/// Layout of a name file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParseOptions {
	pub header: Header,
	pub columns: Columns,
	/// `None` keeps the whole line as a single cell.
	pub delimiter: Option<char>,
}

impl ParseOptions {
	/// One name per line.
	pub(crate) fn lines() -> Self {
		Self { header: Header::None, columns: Columns::First, delimiter: None }
	}

	/// Header row discarded, first column kept.
	pub(crate) fn first_column(delimiter: char) -> Self {
		Self { header: Header::Skip, columns: Columns::First, delimiter: Some(delimiter) }
	}

	/// Header row names the groups, every column kept.
	pub(crate) fn named_columns(delimiter: char) -> Self {
		Self { header: Header::Labels, columns: Columns::All, delimiter: Some(delimiter) }
	}
}

/// Parsed file: column labels (if any) and the names found in each column.
///
/// # Invariants
/// - With `Header::Labels`, `labels.len() == columns.len()`
/// - No cell stored in `columns` is empty or padded with whitespace
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Table {
	pub labels: Vec<String>,
	pub columns: Vec<Vec<String>>,
}

/// Splits a line into trimmed cells.
fn split_cells(line: &str, delimiter: Option<char>) -> Vec<&str> {
	match delimiter {
		Some(d) => line.split(d).map(str::trim).collect(),
		None => vec![line.trim()],
	}
}

/// Parses file contents according to `options`.
///
/// - Line terminators (`\n`, `\r\n`) are stripped by `str::lines`
/// - Empty cells are skipped, so blank lines contribute nothing
/// - Short rows leave the trailing columns untouched for that row
/// - Cells beyond the header width are ignored
/// - A blank header line defines zero columns in `Columns::All` mode
pub(crate) fn parse_table(contents: &str, options: ParseOptions) -> Table {
	let mut lines = contents.lines();

	let header: Vec<&str> = match options.header {
		Header::None => Vec::new(),
		Header::Skip | Header::Labels => match lines.next() {
			Some(line) if !line.trim().is_empty() => split_cells(line, options.delimiter),
			_ => Vec::new(),
		},
	};

	let width = match options.columns {
		Columns::First => 1,
		Columns::All => header.len(),
	};

	let labels = match options.header {
		Header::Labels => {
			let mut labels: Vec<String> = header.iter().take(width).map(|s| (*s).to_owned()).collect();
			labels.resize(width, String::new());
			labels
		}
		_ => Vec::new(),
	};

	let mut columns: Vec<Vec<String>> = vec![Vec::new(); width];
	for line in lines {
		for (column, cell) in columns.iter_mut().zip(split_cells(line, options.delimiter)) {
			if !cell.is_empty() {
				column.push(cell.to_owned());
			}
		}
	}

	Table { labels, columns }
}
