//! Status-code data model and merge engine for the teapot generator.
//!
//! The types here feed the renderer in `teapot-codegen`: a registry
//! snapshot supplies [`CanonicalEntry`] values, [`curated`] supplies the
//! hand-maintained extension [`Case`]s, and [`merge`] combines both into
//! the ordered [`MergedTable`] the generated enum is rendered from.

mod case;
pub mod curated;
mod error;
mod merge;
mod overrides;
mod snapshot;

pub use case::Case;
pub use error::{Error, Result};
pub use merge::{MergedTable, merge};
pub use overrides::NameOverrides;
pub use snapshot::{CanonicalEntry, RegistrySnapshot};
