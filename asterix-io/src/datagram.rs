//! Datagram ingestion (C10): reading raw bytes off disk and decoding a
//! possibly multi-block, possibly multi-category stream.

use std::fs;
use std::path::Path;

use asterix_core::{decode_datablock, Cursor, DataBlock};
use asterix_uap::UapRegistry;

use crate::error::IoShellError;

/// Reads an entire datagram file into memory.
pub fn read_datagram(path: impl AsRef<Path>) -> Result<Vec<u8>, IoShellError> {
    let path = path.as_ref();
    log::debug!("reading datagram from {}", path.display());
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Decodes every datablock in `bytes`, looking up each one's UAP by its
/// leading category byte.
///
/// The category byte is peeked via a cloned cursor before
/// [`decode_datablock`] consumes the block, since the UAP to use is not
/// known until the category byte is read.
pub fn decode_stream(bytes: &[u8], registry: &UapRegistry) -> Result<Vec<DataBlock>, IoShellError> {
    let mut cursor = Cursor::new(bytes);
    let mut blocks = Vec::new();

    while cursor.remaining() > 0 {
        let mut peek = cursor.clone();
        let category = peek.read_u8()?;
        let uap = registry.get(category)?;
        match decode_datablock(&mut cursor, uap) {
            Ok(block) => {
                log::debug!("decoded category {} datablock with {} record(s)", category, block.records.len());
                blocks.push(block);
            }
            Err(e) => {
                log::warn!("failed to decode category {} datablock: {}", category, e);
                return Err(e.into());
            }
        }
    }

    Ok(blocks)
}
