//! Name lists and the name composer.
//!
//! - Flat name lists (`NameSource`)
//! - Name lists partitioned by column (`GroupedNameSource`)
//! - Random full-name composition (`NameComposer`, `ComposedName`)

/// Flat list of names loaded from a line or delimited file.
///
/// Supports uniform random sampling.
pub mod name_source;

/// Multi-column file split into one `NameSource` per header label.
pub mod grouped_source;

/// Draws first, optional middle, and last names with an injected generator.
pub mod composer;

/// Result of a composition and its textual rendering.
pub mod composed_name;

pub use composed_name::ComposedName;
pub use composer::{NameComposer, NameRole, DEFAULT_MIDDLE_PROBABILITY};
pub use grouped_source::{GroupSummary, GroupedNameSource};
pub use name_source::NameSource;
