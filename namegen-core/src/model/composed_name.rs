use std::fmt;

/// A generated full name.
///
/// `middle` is `None` when no middle name was drawn; it is never `Some("")`.
/// An empty `first` or `last` means the corresponding source had no entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedName {
	pub first: String,
	pub middle: Option<String>,
	pub last: String,
}

impl ComposedName {
	pub fn new(first: impl Into<String>, middle: Option<String>, last: impl Into<String>) -> Self {
		Self { first: first.into(), middle, last: last.into() }
	}

	/// Renders `"first last"` or `"first middle last"`.
	///
	/// Names are written exactly as stored, separated by single spaces.
	/// Empty components are left out instead of leaving a double space.
	pub fn format(&self) -> String {
		[Some(self.first.as_str()), self.middle.as_deref(), Some(self.last.as_str())]
			.into_iter()
			.flatten()
			.filter(|part| !part.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl fmt::Display for ComposedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format())
	}
}
