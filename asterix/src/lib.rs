//! Asterix - ASTERIX surveillance message decoding library.
//!
//! This crate re-exports the core runtime (`asterix-core`), UAP tables
//! (`asterix-uap`), semantic projectors (`asterix-projectors`), and I/O
//! shell (`asterix-io`) crates for convenient single-import usage.
//!
//! ## Crate structure
//!
//! - [`core`] - the generic, UAP-driven decoder (`Cursor`, `decode_datablock`, `DecodeError`, ...)
//! - [`uap`] - User Application Profile data tables per category
//! - [`projectors`] - per-category semantic models (`Cat021Model`, `Cat048Model`, ...)
//! - [`io`] - datagram ingestion and JSON rendering
//!
//! ## Usage
//!
//! ```ignore
//! use asterix::core::{Cursor, decode_datablock};
//! use asterix::uap::UapRegistry;
//! ```

pub mod core {
    pub use asterix_core::*;
}

pub mod uap {
    pub use asterix_uap::*;
}

pub mod projectors {
    pub use asterix_projectors::*;
}

pub mod io {
    pub use asterix_io::*;
}

pub use core::{decode_datablock, Cursor, DataBlock, DecodeError, RawRecord};
pub use uap::UapRegistry;
