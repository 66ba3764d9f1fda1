use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::composed_name::ComposedName;
use super::name_source::NameSource;
use crate::error::{Error, Result};

/// Probability of drawing a middle name when none is configured.
pub const DEFAULT_MIDDLE_PROBABILITY: f64 = 0.5;

/// A name component that must have candidates for a name to be composed.
///
/// The middle name is optional and never required, so it has no role here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRole {
	First,
	Last,
}

impl fmt::Display for NameRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			NameRole::First => "first",
			NameRole::Last => "last",
		})
	}
}

/// Draws full names from first, optional middle, and last name sources.
///
/// The random generator is owned by the composer and seeded once, when the
/// composer is built. Sources are only read, so one composer can be reused
/// for any number of names.
#[derive(Debug)]
pub struct NameComposer<R = StdRng> {
	rng: R,
}

impl NameComposer<StdRng> {
	/// Composer seeded from the operating system.
	pub fn from_os_rng() -> Self {
		Self::new(StdRng::from_os_rng())
	}

	/// Composer with a fixed seed, for reproducible output.
	pub fn with_seed(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> NameComposer<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	/// Composes one name.
	///
	/// First and last names are always drawn, in that order. A middle name
	/// is drawn only if `middle` is given, has entries, and an independent
	/// draw succeeds with probability `middle_probability`.
	///
	/// An empty first or last source gives an empty field, see
	/// [`NameComposer::compose_checked`] to reject that instead.
	///
	/// # Errors
	/// Returns `Error::InvalidProbability` if `middle_probability` is not
	/// within `[0.0, 1.0]`.
	pub fn compose(
		&mut self,
		first: &NameSource,
		last: &NameSource,
		middle: Option<&NameSource>,
		middle_probability: f64,
	) -> Result<ComposedName> {
		if !(0.0..=1.0).contains(&middle_probability) {
			return Err(Error::InvalidProbability(middle_probability));
		}

		let first_name = first.sample(&mut self.rng).unwrap_or_default().to_owned();
		let last_name = last.sample(&mut self.rng).unwrap_or_default().to_owned();

		let middle_name = match middle {
			Some(source) if !source.is_empty() && self.rng.random_bool(middle_probability) => {
				source.sample(&mut self.rng).map(str::to_owned)
			}
			_ => None,
		};

		let name = ComposedName::new(first_name, middle_name, last_name);
		debug!("Composed name: {name}");
		Ok(name)
	}

	/// Same as [`NameComposer::compose`], but refuses empty first or last sources.
	///
	/// # Errors
	/// - `Error::EmptyRequiredSource` naming the empty role
	/// - `Error::InvalidProbability` as for `compose`
	pub fn compose_checked(
		&mut self,
		first: &NameSource,
		last: &NameSource,
		middle: Option<&NameSource>,
		middle_probability: f64,
	) -> Result<ComposedName> {
		if first.is_empty() {
			return Err(Error::EmptyRequiredSource(NameRole::First));
		}
		if last.is_empty() {
			return Err(Error::EmptyRequiredSource(NameRole::Last));
		}
		self.compose(first, last, middle, middle_probability)
	}
}
