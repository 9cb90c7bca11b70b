//! Model-name parsing and specification inference for Intel Core desktop CPUs.
//!
//! Classification is a two-stage pipeline:
//! - **Validator:** normalizes a typed model name (e.g. `i7-6700K`), rejects
//!   unsupported hardware classes and malformed shapes, and splits the name
//!   into family, model code and suffix.
//! - **Resolver:** derives the full [`Specification`] from the parsed
//!   identity through fixed rule tables.
//!
//! Reference data (extreme-edition and legacy name lists) is loaded once
//! into [`ReferenceLists`] and borrowed by every classification.

pub mod error;
pub mod family;
pub mod format;
pub mod reference;
pub mod resolve;
pub mod specification;
pub mod validate;

pub use error::{CatalogError, Result};
pub use family::Family;
pub use format::OutputFormat;
pub use reference::ReferenceLists;
pub use resolve::resolve;
pub use specification::{Microarchitecture, Socket, Specification, Tier};
pub use validate::{normalize, ParsedIdentity, RejectReason, UnsupportedKind, Validator};

/// Classify a raw model name against the given reference lists.
///
/// Returns the derived specification, or the reason the name was rejected.
pub fn classify(
    raw: &str,
    lists: &ReferenceLists,
) -> std::result::Result<Specification, RejectReason> {
    let identity = Validator::new(lists).validate(raw)?;
    Ok(resolve(&identity))
}
