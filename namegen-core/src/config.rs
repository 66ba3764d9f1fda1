use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::warn;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::io::read_file;
use crate::model::{
	ComposedName, GroupedNameSource, NameComposer, NameRole, NameSource, DEFAULT_MIDDLE_PROBABILITY,
};

/// Layout of the flat first/middle/last name files.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
	/// One name per line.
	Lines,
	/// CSV export: header row, name in the first column.
	#[default]
	Delimited,
}

impl SourceFormat {
	/// Loads a flat source in this format. Never fails, see [`NameSource::load_flat`].
	pub fn load<P: AsRef<Path>>(self, filepath: P, delimiter: char) -> NameSource {
		match self {
			SourceFormat::Lines => NameSource::load_flat(filepath),
			SourceFormat::Delimited => NameSource::load_flat_from_delimited(filepath, delimiter),
		}
	}
}

impl FromStr for SourceFormat {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"lines" => Ok(SourceFormat::Lines),
			"delimited" | "csv" => Ok(SourceFormat::Delimited),
			other => Err(Error::Config(format!(
				"unknown format '{other}', expected 'lines' or 'delimited'"
			))),
		}
	}
}

impl fmt::Display for SourceFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SourceFormat::Lines => "lines",
			SourceFormat::Delimited => "delimited",
		})
	}
}

/// Settings for a generation run, usually read from a TOML file and then
/// overridden from the command line.
///
/// Two modes:
/// - Flat: `first`, optional `middle` and `last` files in `format`
/// - Grouped: `grouped` file, group number `group` (1-based) provides both
///   first and middle names, `last` still provides last names
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
	pub first: Option<PathBuf>,
	pub middle: Option<PathBuf>,
	pub last: Option<PathBuf>,
	pub format: SourceFormat,
	pub delimiter: String,
	pub grouped: Option<PathBuf>,
	pub group: Option<usize>,
	/// Number of names to generate.
	pub count: usize,
	pub middle_probability: f64,
	/// Fixed seed; taken from the operating system when absent.
	pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			first: None,
			middle: None,
			last: None,
			format: SourceFormat::default(),
			delimiter: ",".to_owned(),
			grouped: None,
			group: None,
			count: 10,
			middle_probability: DEFAULT_MIDDLE_PROBABILITY,
			seed: None,
		}
	}
}

impl GeneratorConfig {
	/// Parses a TOML document. Missing keys take their default value.
	///
	/// # Errors
	/// Returns `Error::Toml` on syntax errors or unknown keys.
	pub fn from_toml(contents: &str) -> Result<Self> {
		Ok(toml::from_str(contents)?)
	}

	/// Reads a TOML configuration file.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		Self::from_toml(&read_file(filepath)?)
	}

	/// The delimiter as a single character.
	///
	/// # Errors
	/// Returns `Error::Config` unless `delimiter` is exactly one character.
	pub fn delimiter(&self) -> Result<char> {
		let mut chars = self.delimiter.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(Error::Config(format!(
				"delimiter must be a single character, got '{}'",
				self.delimiter
			))),
		}
	}

	/// Checks values that do not depend on the file system.
	pub fn validate(&self) -> Result<()> {
		if !(0.0..=1.0).contains(&self.middle_probability) {
			return Err(Error::InvalidProbability(self.middle_probability));
		}
		self.delimiter()?;
		if self.grouped.is_some() && self.group.is_none() {
			return Err(Error::Config("a group number is required with a grouped name list".to_owned()));
		}
		Ok(())
	}

	/// Builds a composer, seeded once for the whole run.
	pub fn composer(&self) -> NameComposer {
		match self.seed {
			Some(seed) => NameComposer::with_seed(seed),
			None => NameComposer::from_os_rng(),
		}
	}

	/// Loads every name list the configuration points at.
	///
	/// Unreadable files become empty lists (with a warning); whether that
	/// is fatal is decided when composing.
	///
	/// # Errors
	/// - `Error::Config` if no first or last name list is configured
	/// - `Error::GroupOutOfRange` if `group` does not exist in the grouped file
	pub fn load_lists(&self) -> Result<NameLists> {
		self.validate()?;
		let delimiter = self.delimiter()?;

		let (first, middle) = match (&self.grouped, self.group) {
			(Some(path), Some(ordinal)) => {
				if self.first.is_some() || self.middle.is_some() {
					warn!(
						"Grouped name list {} replaces the configured first and middle name lists",
						path.display()
					);
				}
				let grouped = GroupedNameSource::load(path, delimiter);
				let group = grouped.select_ordinal(ordinal)?;
				(group.clone(), Some(group.clone()))
			}
			_ => {
				let first = self
					.first
					.as_ref()
					.ok_or_else(|| Error::Config("no first name list configured".to_owned()))?;
				(
					self.format.load(first, delimiter),
					self.middle.as_ref().map(|path| self.format.load(path, delimiter)),
				)
			}
		};

		let last = self
			.last
			.as_ref()
			.ok_or_else(|| Error::Config("no last name list configured".to_owned()))?;
		let last = self.format.load(last, delimiter);

		Ok(NameLists { first, middle, last })
	}
}

/// Name lists resolved from a configuration, ready to compose from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameLists {
	pub first: NameSource,
	pub middle: Option<NameSource>,
	pub last: NameSource,
}

impl NameLists {
	/// Composes `count` names.
	///
	/// # Errors
	/// Fails before composing anything if the first or last list is empty,
	/// even when `count` is zero.
	pub fn generate<R: rand::Rng>(
		&self,
		composer: &mut NameComposer<R>,
		count: usize,
		middle_probability: f64,
	) -> Result<Vec<ComposedName>> {
		if self.first.is_empty() {
			return Err(Error::EmptyRequiredSource(NameRole::First));
		}
		if self.last.is_empty() {
			return Err(Error::EmptyRequiredSource(NameRole::Last));
		}
		let middle = self.middle.as_ref();
		(0..count)
			.map(|_| composer.compose_checked(&self.first, &self.last, middle, middle_probability))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn defaults_from_empty_document() {
		let config = GeneratorConfig::from_toml("").unwrap();
		assert_eq!(config, GeneratorConfig::default());
		assert_eq!(config.count, 10);
		assert_eq!(config.middle_probability, 0.5);
		assert_eq!(config.delimiter().unwrap(), ',');
	}

	#[test]
	fn parses_full_document() {
		let config = GeneratorConfig::from_toml(
			r#"
			first = "data/first.txt"
			last = "data/last.txt"
			format = "lines"
			delimiter = ";"
			count = 3
			middle_probability = 0.25
			seed = 42
			"#,
		)
		.unwrap();

		assert_eq!(config.first, Some(PathBuf::from("data/first.txt")));
		assert_eq!(config.format, SourceFormat::Lines);
		assert_eq!(config.delimiter().unwrap(), ';');
		assert_eq!(config.count, 3);
		assert_eq!(config.seed, Some(42));
	}

	#[test]
	fn unknown_keys_rejected() {
		assert!(matches!(GeneratorConfig::from_toml("colour = 1"), Err(Error::Toml(_))));
	}

	#[test]
	fn validate_rejects_bad_values() {
		let config = GeneratorConfig { middle_probability: 1.2, ..Default::default() };
		assert!(matches!(config.validate(), Err(Error::InvalidProbability(_))));

		let config = GeneratorConfig { delimiter: "::".to_owned(), ..Default::default() };
		assert!(matches!(config.validate(), Err(Error::Config(_))));

		let config = GeneratorConfig { grouped: Some("g.csv".into()), ..Default::default() };
		assert!(matches!(config.validate(), Err(Error::Config(_))));
	}

	#[test]
	fn format_from_str() {
		assert_eq!("lines".parse::<SourceFormat>().unwrap(), SourceFormat::Lines);
		assert_eq!("CSV".parse::<SourceFormat>().unwrap(), SourceFormat::Delimited);
		assert!("xml".parse::<SourceFormat>().is_err());
	}

	#[test]
	fn flat_lists_generate_names() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("first.csv"), "name\nAino\nHelmi\n").unwrap();
		fs::write(dir.path().join("middle.csv"), "name\nMaria\n").unwrap();
		fs::write(dir.path().join("last.csv"), "name,count\nKorhonen,10\n").unwrap();

		let config = GeneratorConfig {
			first: Some(dir.path().join("first.csv")),
			middle: Some(dir.path().join("middle.csv")),
			last: Some(dir.path().join("last.csv")),
			middle_probability: 1.0,
			seed: Some(1),
			..Default::default()
		};
		let lists = config.load_lists().unwrap();
		let names = lists.generate(&mut config.composer(), 5, config.middle_probability).unwrap();

		assert_eq!(names.len(), 5);
		for name in names {
			assert!(name.format().ends_with(" Maria Korhonen"));
		}
	}

	#[test]
	fn grouped_lists_share_group_for_first_and_middle() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("decades.csv"), "1870-79,1880-89\nAino,Helmi\nToivo,\n").unwrap();
		fs::write(dir.path().join("last.txt"), "Korhonen\n").unwrap();

		let config = GeneratorConfig {
			grouped: Some(dir.path().join("decades.csv")),
			group: Some(2),
			last: Some(dir.path().join("last.txt")),
			format: SourceFormat::Lines,
			..Default::default()
		};
		let lists = config.load_lists().unwrap();

		assert_eq!(lists.first.names(), ["Helmi"]);
		assert_eq!(lists.middle.as_ref().unwrap().names(), ["Helmi"]);
		assert_eq!(lists.last.names(), ["Korhonen"]);
	}

	#[test]
	fn grouped_lists_reject_missing_group() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("decades.csv"), "1870-79,1880-89\n").unwrap();

		let config = GeneratorConfig {
			grouped: Some(dir.path().join("decades.csv")),
			group: Some(3),
			last: Some(dir.path().join("last.txt")),
			..Default::default()
		};
		assert!(matches!(
			config.load_lists(),
			Err(Error::GroupOutOfRange { ordinal: 3, len: 2 })
		));
	}

	#[test]
	fn missing_required_file_stops_generation() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("first.txt"), "Aino\n").unwrap();

		let config = GeneratorConfig {
			first: Some(dir.path().join("first.txt")),
			last: Some(dir.path().join("missing.txt")),
			format: SourceFormat::Lines,
			..Default::default()
		};
		let lists = config.load_lists().unwrap();
		assert!(lists.last.is_empty());
		assert!(matches!(
			lists.generate(&mut config.composer(), 1, 0.5),
			Err(Error::EmptyRequiredSource(NameRole::Last))
		));
	}

	#[test]
	fn empty_required_list_stops_even_without_names_to_generate() {
		let first = NameSource::from_names(["Aino"]);
		let mut composer = NameComposer::with_seed(1);

		let lists = NameLists { first: first.clone(), middle: None, last: NameSource::default() };
		assert!(matches!(
			lists.generate(&mut composer, 0, 0.5),
			Err(Error::EmptyRequiredSource(NameRole::Last))
		));

		let lists = NameLists { first: NameSource::default(), middle: None, last: first };
		assert!(matches!(
			lists.generate(&mut composer, 0, 0.5),
			Err(Error::EmptyRequiredSource(NameRole::First))
		));
	}

	#[test]
	fn zero_count_with_loaded_lists_is_empty() {
		let lists = NameLists {
			first: NameSource::from_names(["Aino"]),
			middle: Some(NameSource::default()),
			last: NameSource::from_names(["Korhonen"]),
		};
		let names = lists.generate(&mut NameComposer::with_seed(1), 0, 0.5).unwrap();
		assert!(names.is_empty());
	}

	#[test]
	fn grouped_list_replaces_configured_first_and_middle() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("decades.csv"), "1870-79,1880-89
Aino,Helmi
").unwrap();
		fs::write(dir.path().join("first.txt"), "Matti
").unwrap();
		fs::write(dir.path().join("middle.txt"), "Olavi
").unwrap();
		fs::write(dir.path().join("last.txt"), "Korhonen
").unwrap();

		let config = GeneratorConfig {
			first: Some(dir.path().join("first.txt")),
			middle: Some(dir.path().join("middle.txt")),
			grouped: Some(dir.path().join("decades.csv")),
			group: Some(1),
			last: Some(dir.path().join("last.txt")),
			format: SourceFormat::Lines,
			..Default::default()
		};
		let lists = config.load_lists().unwrap();

		assert_eq!(lists.first.names(), ["Aino"]);
		assert_eq!(lists.middle.as_ref().unwrap().names(), ["Aino"]);
	}

	#[test]
	fn missing_paths_are_config_errors() {
		let config = GeneratorConfig::default();
		assert!(matches!(config.load_lists(), Err(Error::Config(_))));
	}
}
