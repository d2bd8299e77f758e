//! # asterix-io
//!
//! The I/O shell (C10) around the decoder and its projectors: reading
//! datagram files off disk, dispatching each datablock to the right UAP by
//! category, and rendering decoded output as JSON, either raw (every item
//! and byte the decoder saw) or projected (a category's semantic model).

pub mod datagram;
pub mod error;
pub mod json;

pub use datagram::{decode_stream, read_datagram};
pub use error::IoShellError;
pub use json::{project_to_json, to_json};
