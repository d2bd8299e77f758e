use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::item::ItemPayload;

/// Reads an Explicit-shaped item: a u8 total length (including the length
/// byte itself), then `length - 1` payload bytes.
///
/// Also used structurally for ReservedExpansion and SpecialPurpose items.
pub fn decode(cursor: &mut Cursor) -> Result<ItemPayload, DecodeError> {
    let length = cursor.read_u8()?;
    if length == 0 {
        return Err(DecodeError::ExplicitTooShort);
    }
    let raw = cursor.read_n((length - 1) as usize)?.to_vec();
    Ok(ItemPayload::Explicit { raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_length_prefixed_payload() {
        let data = [0x08u8, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut c = Cursor::new(&data);
        let payload = decode(&mut c).unwrap();
        match payload {
            ItemPayload::Explicit { raw } => {
                assert_eq!(raw, vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
            }
            _ => panic!("expected Explicit payload"),
        }
    }

    #[test]
    fn length_one_yields_empty_payload() {
        let data = [0x01u8];
        let mut c = Cursor::new(&data);
        let payload = decode(&mut c).unwrap();
        match payload {
            ItemPayload::Explicit { raw } => assert!(raw.is_empty()),
            _ => panic!("expected Explicit payload"),
        }
    }

    #[test]
    fn zero_length_errors() {
        let data = [0x00u8];
        let mut c = Cursor::new(&data);
        assert_eq!(decode(&mut c), Err(DecodeError::ExplicitTooShort));
    }

    #[test]
    fn truncated_payload_is_eof() {
        let data = [0x08u8, 0x01, 0x02];
        let mut c = Cursor::new(&data);
        assert_eq!(decode(&mut c), Err(DecodeError::UnexpectedEof));
    }
}
