use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::item::ItemPayload;

/// Reads an Extended item: a primary extent, then as many secondary extents
/// as the FX chain (LSB of each extent's final octet) requests.
pub fn decode(cursor: &mut Cursor, primary_size: u8, secondary_size: u8) -> Result<ItemPayload, DecodeError> {
    let mut extents = Vec::new();

    let primary = cursor.read_n(primary_size as usize)?.to_vec();
    let mut more = last_bit_set(&primary);
    extents.push(primary);

    while more {
        let extent = cursor.read_n(secondary_size as usize)?.to_vec();
        more = last_bit_set(&extent);
        extents.push(extent);
    }

    Ok(ItemPayload::Extended { extents })
}

fn last_bit_set(extent: &[u8]) -> bool {
    match extent.last() {
        Some(b) => b & 0x01 != 0,
        None => false,
    }
}
