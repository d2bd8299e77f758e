//! Field decoders (C4): the five structural decoding strategies, dispatched
//! by a UAP entry's kind.

pub mod compound;
pub mod explicit;
pub mod extended;
pub mod fixed;
pub mod repetitive;

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::item::{Item, ItemPayload};
use crate::uap::{FieldDescriptor, FieldKind, Layout};

/// Decodes one item from `cursor` according to `descriptor`'s kind and layout.
pub fn decode_field(cursor: &mut Cursor, descriptor: &FieldDescriptor) -> Result<Item, DecodeError> {
    let payload = match (descriptor.kind, &descriptor.layout) {
        (FieldKind::Fixed, Layout::Fixed { size }) => fixed::decode(cursor, *size, descriptor)?,
        (FieldKind::Extended, Layout::Extended { primary_size, secondary_size }) => {
            extended::decode(cursor, *primary_size, *secondary_size)?
        }
        (FieldKind::Repetitive, Layout::Repetitive { repeat_size }) => {
            repetitive::decode(cursor, *repeat_size)?
        }
        (FieldKind::Compound, Layout::Compound { children }) => compound::decode(cursor, children)?,
        (FieldKind::Explicit, Layout::Explicit)
        | (FieldKind::ReservedExpansion, Layout::Explicit)
        | (FieldKind::SpecialPurpose, Layout::Explicit) => explicit::decode(cursor)?,
        (FieldKind::Spare, Layout::None) => ItemPayload::Spare,
        (kind, layout) => {
            unreachable!(
                "FRN {}: kind {:?} does not match its layout {:?} -- malformed UAP table",
                descriptor.frn, kind, layout
            )
        }
    };

    Ok(Item {
        frn: descriptor.frn,
        name: descriptor.name,
        description: descriptor.description,
        kind: descriptor.kind,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_spare_to_zero_byte_marker() {
        let data: [u8; 0] = [];
        let mut c = Cursor::new(&data);
        let descriptor = FieldDescriptor::spare(5);
        let item = decode_field(&mut c, &descriptor).unwrap();
        assert_eq!(item.payload, ItemPayload::Spare);
        assert_eq!(c.consumed(), 0);
    }

    #[test]
    fn dispatches_fixed() {
        let data = [0xAAu8];
        let mut c = Cursor::new(&data);
        let descriptor = FieldDescriptor::fixed(1, "n", "d", 1);
        let item = decode_field(&mut c, &descriptor).unwrap();
        assert_eq!(item.frn, 1);
        matches!(item.payload, ItemPayload::Fixed { .. });
    }
}
