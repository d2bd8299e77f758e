//! # asterix-core
//!
//! Generic, UAP-driven binary decoder for ASTERIX surveillance messages.
//!
//! This crate provides the table-directed decoder at the heart of an ASTERIX
//! pipeline: it walks a chained FSPEC bitmap, resolves each present Field
//! Reference Number against a [`Uap`] table, and dispatches to the matching
//! one of five structural decoding strategies (Fixed, Extended, Repetitive,
//! Compound, Explicit). It has **zero external dependencies** and relies only
//! on the Rust standard library.
//!
//! ## Key components
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Cursor`] | Sequential, bounded read over an in-memory octet sequence |
//! | [`Uap`] | A category's User Application Profile |
//! | [`FieldDescriptor`] | One UAP entry's kind and layout |
//! | [`Item`] / [`RawRecord`] / [`DataBlock`] | Decoded output shapes |
//! | [`DecodeError`] | Unified error type for decode failures |
//! | [`Projector`] | Contract implemented by external per-category projectors |
//!
//! ## Example
//!
//! ```
//! use asterix_core::{Cursor, FieldDescriptor, Uap, decode_datablock};
//!
//! let uap = Uap::new(48, "cat048-demo", vec![
//!     FieldDescriptor::fixed(1, "I048/010", "Data Source Identifier", 2),
//! ]);
//!
//! let datagram = [0x30u8, 0x00, 0x06, 0x80, 0x01, 0x02];
//! let mut cursor = Cursor::new(&datagram);
//! let block = decode_datablock(&mut cursor, &uap).unwrap();
//!
//! assert_eq!(block.category, 48);
//! assert_eq!(block.records[0].item(1).unwrap().name, "I048/010");
//! ```

pub mod cursor;
pub mod decode;
pub mod error;
pub mod fspec;
pub mod item;
pub mod projection;
pub mod record;
pub mod subitem;
pub mod uap;

pub use cursor::Cursor;
pub use decode::decode_field;
pub use error::DecodeError;
pub use fspec::{read_fspec, FspecBits};
pub use item::{DataBlock, Item, ItemPayload, RawRecord, SubValueOwned};
pub use projection::Projector;
pub use record::{decode_datablock, decode_record};
pub use subitem::{Interpretation, SubItem, SubValue};
pub use uap::{CompoundChild, FieldDescriptor, FieldKind, Layout, Uap};
