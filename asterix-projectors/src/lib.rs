//! # asterix-projectors
//!
//! Per-category projectors (C9): pure functions turning a generic,
//! structurally-decoded [`asterix_core::RawRecord`] into a typed,
//! JSON-serializable domain model. Each projector implements
//! [`asterix_core::Projector`] and dispatches on FRN, the same shape as a
//! `switch item.Meta.FRN` walk over a decoded record.

pub mod cat021;
pub mod cat048;
pub mod numeric;

pub use cat021::{Cat021, Cat021Model};
pub use cat048::{Cat048, Cat048Model};
