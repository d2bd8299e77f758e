//! Projection interface (C6): the contract between decoded generic records
//! and per-category semantic projectors.
//!
//! The core does not mandate a particular model shape. It only guarantees
//! that every item listed in a record's FSPEC appears under its FRN (via
//! [`crate::item::RawRecord::item`] and
//! [`crate::item::RawRecord::iter`]) with the correct [`crate::uap::FieldKind`]
//! variant. Everything past that -- turning raw bytes into latitude/longitude,
//! knots, or a named enum -- is a projector's concern, implemented outside
//! this crate (see the `asterix-projectors` crate).

use crate::error::DecodeError;
use crate::item::RawRecord;

/// A pure function turning one decoded record into a category-specific
/// domain model.
///
/// Fallible: a record can be structurally well-formed (every FSPEC bit has a
/// matching item) yet carry a value a projector cannot interpret -- e.g. an
/// enum discriminant outside the range the published category spec defines.
pub trait Projector {
    type Model;

    fn project(record: &RawRecord) -> Result<Self::Model, DecodeError>;
}
