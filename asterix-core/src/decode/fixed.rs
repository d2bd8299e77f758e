use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::item::{ItemPayload, SubValueOwned};
use crate::subitem;
use crate::uap::FieldDescriptor;

/// Reads a Fixed item: exactly `size` bytes, with sub-item extraction if the
/// descriptor declares any.
pub fn decode(cursor: &mut Cursor, size: u8, descriptor: &FieldDescriptor) -> Result<ItemPayload, DecodeError> {
    let raw = cursor.read_n(size as usize)?.to_vec();
    let subvalues: Vec<SubValueOwned> = if descriptor.subitems.is_empty() {
        Vec::new()
    } else {
        subitem::extract(&raw, &descriptor.subitems)
            .into_iter()
            .map(SubValueOwned::from)
            .collect()
    };
    Ok(ItemPayload::Fixed { raw, subvalues })
}
