use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use namegen_core::config::{GeneratorConfig, SourceFormat};
use namegen_core::model::GroupedNameSource;

/// Command-line arguments for namegen
///
/// Every option overrides the matching key of the configuration file.
#[derive(Parser, Debug)]
#[command(name = "namegen")]
#[command(about = "Generate random full names from name list files")]
#[command(version)]
struct Args {
	/// TOML configuration file
	#[arg(short, long, env = "NAMEGEN_CONFIG")]
	config: Option<PathBuf>,

	/// First name list
	#[arg(long, env = "NAMEGEN_FIRST")]
	first: Option<PathBuf>,

	/// Middle name list
	#[arg(long, env = "NAMEGEN_MIDDLE")]
	middle: Option<PathBuf>,

	/// Last name list
	#[arg(long, env = "NAMEGEN_LAST")]
	last: Option<PathBuf>,

	/// Layout of the flat name lists: `lines` or `delimited`
	#[arg(long, env = "NAMEGEN_FORMAT")]
	format: Option<SourceFormat>,

	/// Column delimiter of delimited files
	#[arg(long, env = "NAMEGEN_DELIMITER")]
	delimiter: Option<String>,

	/// Multi-column list providing first and middle names by group
	#[arg(long, env = "NAMEGEN_GROUPED")]
	grouped: Option<PathBuf>,

	/// Group number (1-based) within the grouped list
	#[arg(short, long, env = "NAMEGEN_GROUP")]
	group: Option<usize>,

	/// Print the groups of the grouped list and exit
	#[arg(long)]
	list_groups: bool,

	/// Number of names to generate
	#[arg(short = 'n', long, env = "NAMEGEN_COUNT")]
	count: Option<usize>,

	/// Probability of including a middle name
	#[arg(short = 'p', long, env = "NAMEGEN_MIDDLE_PROBABILITY")]
	middle_probability: Option<f64>,

	/// Seed for reproducible output
	#[arg(long, env = "NAMEGEN_SEED")]
	seed: Option<u64>,
}

impl Args {
	/// Reads the configuration file, if any, and applies the overrides.
	fn into_config(self) -> Result<GeneratorConfig> {
		let mut config = match &self.config {
			Some(path) => GeneratorConfig::from_file(path)
				.with_context(|| format!("Failed to load configuration {}", path.display()))?,
			None => GeneratorConfig::default(),
		};

		config.first = self.first.or(config.first);
		config.middle = self.middle.or(config.middle);
		config.last = self.last.or(config.last);
		config.grouped = self.grouped.or(config.grouped);
		config.group = self.group.or(config.group);
		config.seed = self.seed.or(config.seed);
		if let Some(format) = self.format {
			config.format = format;
		}
		if let Some(delimiter) = self.delimiter {
			config.delimiter = delimiter;
		}
		if let Some(count) = self.count {
			config.count = count;
		}
		if let Some(p) = self.middle_probability {
			config.middle_probability = p;
		}

		Ok(config)
	}
}

/// Writes `N: label (count)` for every group of the configured grouped list.
fn list_groups(config: &GeneratorConfig, out: &mut impl Write) -> Result<()> {
	let path = config
		.grouped
		.as_ref()
		.context("--list-groups needs a grouped name list (--grouped)")?;
	let grouped = GroupedNameSource::load(path, config.delimiter()?);

	for (i, group) in grouped.list_groups().iter().enumerate() {
		writeln!(out, "{}: {}", i + 1, group)?;
	}
	Ok(())
}

/// Probability as a percentage, rounded to two decimals for display.
fn percent(probability: f64) -> f64 {
	(probability * 10_000.0).round() / 100.0
}

/// Writes `count` numbered names between a header and a footer line.
fn generate(config: &GeneratorConfig, out: &mut impl Write) -> Result<()> {
	let lists = config.load_lists()?;
	let mut composer = config.composer();
	let names = lists
		.generate(&mut composer, config.count, config.middle_probability)
		.context("Cannot generate names")?;

	writeln!(
		out,
		"--- Randomly generated names (middle name with {}% probability) ---",
		percent(config.middle_probability)
	)?;
	for (i, name) in names.iter().enumerate() {
		writeln!(out, "{}: {}", i + 1, name)?;
	}
	writeln!(out, "------------------------------------------------------------------")?;
	Ok(())
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
	let list_only = args.list_groups;
	let config = args.into_config()?;

	if list_only {
		list_groups(&config, out)
	} else {
		info!("Generating {} names", config.count);
		generate(&config, out)
	}
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let stdout = io::stdout();
	run(args, &mut stdout.lock())
}
