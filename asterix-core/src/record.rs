//! Record engine (C5): drives the FSPEC reader and field decoders to produce
//! a [`RawRecord`], and the datablock loop that decodes records until the
//! datablock's declared length is exhausted.

use crate::cursor::Cursor;
use crate::decode::decode_field;
use crate::error::DecodeError;
use crate::fspec::read_fspec;
use crate::item::{DataBlock, RawRecord};
use crate::uap::Uap;

/// Decodes one record: FSPEC, then the ordered list of present items.
pub fn decode_record(cursor: &mut Cursor, category: u8, uap: &Uap) -> Result<RawRecord, DecodeError> {
    let start = cursor.consumed();

    let bits = read_fspec(cursor, Some(uap.max_frn()))?;

    let mut items = Vec::with_capacity(bits.positions.len());
    for frn in &bits.positions {
        let descriptor = uap.get(*frn).ok_or(DecodeError::UnknownFrn(*frn))?;
        items.push(decode_field(cursor, descriptor)?);
    }

    let consumed = cursor.consumed() - start;
    Ok(RawRecord {
        category,
        length: (consumed + 3) as u16,
        fspec: bits.raw,
        items,
    })
}

/// Decodes one datablock: category byte, u16 length, then records until
/// `length - 3` payload bytes have been consumed.
pub fn decode_datablock(cursor: &mut Cursor, uap: &Uap) -> Result<DataBlock, DecodeError> {
    let category = cursor.read_u8()?;
    let length = cursor.read_u16_be()?;
    let payload_len = length.checked_sub(3).ok_or(DecodeError::LengthMismatch)? as usize;

    let start = cursor.consumed();
    let mut records = Vec::new();
    while cursor.consumed() - start < payload_len {
        records.push(decode_record(cursor, category, uap)?);
    }

    if cursor.consumed() - start != payload_len {
        return Err(DecodeError::LengthMismatch);
    }

    Ok(DataBlock { category, length, records })
}
