use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::fspec;
use crate::item::ItemPayload;
use crate::uap::CompoundChild;

/// Reads a Compound item: its own chained sub-FSPEC, then one child per set
/// bit, in bit order, recursing through the ordinary field-decode dispatch.
pub fn decode(cursor: &mut Cursor, children: &[CompoundChild]) -> Result<ItemPayload, DecodeError> {
    let max_slot = children.iter().map(|c| c.slot).max();
    let bits = fspec::read_fspec(cursor, max_slot)?;

    let mut subitems = Vec::with_capacity(bits.positions.len());
    for slot in &bits.positions {
        let child = children
            .iter()
            .find(|c| c.slot == *slot)
            .ok_or(DecodeError::UnknownFrn(*slot))?;
        subitems.push(super::decode_field(cursor, &child.descriptor)?);
    }

    Ok(ItemPayload::Compound { fspec: bits.raw, subitems })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uap::FieldDescriptor;

    #[test]
    fn s4_scenario() {
        let data = [0xC0u8, 0x11, 0x22, 0x33];
        let mut c = Cursor::new(&data);
        let children = vec![
            CompoundChild::new(1, FieldDescriptor::fixed(1, "sub1", "d", 1)),
            CompoundChild::new(2, FieldDescriptor::fixed(2, "sub2", "d", 2)),
        ];

        let payload = decode(&mut c, &children).unwrap();
        match payload {
            ItemPayload::Compound { fspec, subitems } => {
                assert_eq!(fspec, vec![0xC0]);
                assert_eq!(subitems.len(), 2);
                match &subitems[0].payload {
                    ItemPayload::Fixed { raw, .. } => assert_eq!(raw, &vec![0x11]),
                    _ => panic!("expected Fixed"),
                }
                match &subitems[1].payload {
                    ItemPayload::Fixed { raw, .. } => assert_eq!(raw, &vec![0x22, 0x33]),
                    _ => panic!("expected Fixed"),
                }
            }
            _ => panic!("expected Compound payload"),
        }
        assert_eq!(c.consumed(), 4);
    }

    #[test]
    fn unset_slot_is_skipped() {
        let data = [0x80u8, 0x11]; // only slot 1 set
        let mut c = Cursor::new(&data);
        let children = vec![
            CompoundChild::new(1, FieldDescriptor::fixed(1, "sub1", "d", 1)),
            CompoundChild::new(2, FieldDescriptor::fixed(2, "sub2", "d", 2)),
        ];
        let payload = decode(&mut c, &children).unwrap();
        match payload {
            ItemPayload::Compound { subitems, .. } => assert_eq!(subitems.len(), 1),
            _ => panic!("expected Compound payload"),
        }
    }

    #[test]
    fn set_bit_with_no_defined_child_errors() {
        let data = [0x80u8];
        let mut c = Cursor::new(&data);
        let children = vec![CompoundChild::new(2, FieldDescriptor::fixed(2, "sub2", "d", 1))];
        assert_eq!(decode(&mut c, &children), Err(DecodeError::UnknownFrn(1)));
    }

    #[test]
    fn chains_past_single_octet() {
        // two slots defined at positions 1 and 8 -> sub-FSPEC must chain
        let data = [0x81u8, 0x80, 0x11, 0x22];
        let mut c = Cursor::new(&data);
        let children = vec![
            CompoundChild::new(1, FieldDescriptor::fixed(1, "sub1", "d", 1)),
            CompoundChild::new(8, FieldDescriptor::fixed(8, "sub8", "d", 1)),
        ];
        let payload = decode(&mut c, &children).unwrap();
        match payload {
            ItemPayload::Compound { fspec, subitems } => {
                assert_eq!(fspec, vec![0x81, 0x80]);
                assert_eq!(subitems.len(), 2);
            }
            _ => panic!("expected Compound payload"),
        }
    }
}
