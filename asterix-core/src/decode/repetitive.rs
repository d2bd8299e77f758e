use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::item::ItemPayload;

/// Reads a Repetitive item: a u8 count, then that many `repeat_size`-byte blocks.
pub fn decode(cursor: &mut Cursor, repeat_size: u8) -> Result<ItemPayload, DecodeError> {
    let count = cursor.read_u8()?;
    let mut repeats = Vec::with_capacity(count as usize);
    for _ in 0..count {
        repeats.push(cursor.read_n(repeat_size as usize)?.to_vec());
    }
    Ok(ItemPayload::Repetitive { count, repeats })
}
