use crate::cursor::Cursor;
use crate::error::DecodeError;

/// Decoded form of a chained FSPEC-style bitmap.
///
/// Used both for a record's outer FSPEC (where `positions` are FRNs) and for a
/// Compound item's nested sub-FSPEC (where `positions` are 1-based child slot
/// indices) -- both follow the identical 7-bits-plus-FX chaining rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FspecBits {
    pub raw: Vec<u8>,
    pub positions: Vec<u16>,
}

/// Reads a chained FSPEC-style bitmap from `cursor`.
///
/// `max_position`, when given, bounds how many octets the chain may span: once
/// the octets needed to cover `max_position` (rounded up to a 7-bit boundary)
/// have been read, a further FX=1 is rejected with
/// [`DecodeError::FspecOverflow`] rather than read as another octet.
pub fn read_fspec(cursor: &mut Cursor, max_position: Option<u16>) -> Result<FspecBits, DecodeError> {
    let max_octets = max_position.map(|m| m.div_ceil(7) as usize);

    let mut raw = Vec::new();
    let mut positions = Vec::new();
    let mut octet_index: usize = 0;

    loop {
        if let Some(max) = max_octets {
            if octet_index >= max {
                return Err(DecodeError::FspecOverflow);
            }
        }

        let byte = cursor.read_u8()?;
        raw.push(byte);

        for bit in 0..7u16 {
            if byte & (0x80 >> bit) != 0 {
                positions.push(octet_index as u16 * 7 + bit + 1);
            }
        }

        octet_index += 1;
        if byte & 0x01 == 0 {
            break;
        }
    }

    Ok(FspecBits { raw, positions })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_octet_no_fx() {
        let data = [0x80];
        let mut c = Cursor::new(&data);
        let fspec = read_fspec(&mut c, Some(7)).unwrap();
        assert_eq!(fspec.raw, vec![0x80]);
        assert_eq!(fspec.positions, vec![1]);
    }

    #[test]
    fn empty_record_fx_zero_first_octet() {
        let data = [0x00];
        let mut c = Cursor::new(&data);
        let fspec = read_fspec(&mut c, Some(7)).unwrap();
        assert!(fspec.positions.is_empty());
        assert_eq!(fspec.raw, vec![0x00]);
    }

    #[test]
    fn chained_two_octets() {
        // byte0: FRN1 present, FX=1 -> 0x81
        // byte1: FRN8 present (bit 1 of octet 2), FX=0 -> 0x40
        let data = [0x81, 0x40];
        let mut c = Cursor::new(&data);
        let fspec = read_fspec(&mut c, Some(14)).unwrap();
        assert_eq!(fspec.positions, vec![1, 8]);
    }

    #[test]
    fn compound_s4_scenario() {
        // C0 = bits 8 and 7 set, FX=0
        let data = [0xC0];
        let mut c = Cursor::new(&data);
        let fspec = read_fspec(&mut c, Some(7)).unwrap();
        assert_eq!(fspec.positions, vec![1, 2]);
    }

    #[test]
    fn missing_chained_octet_is_eof() {
        let data = [0x01]; // FX=1 but nothing follows
        let mut c = Cursor::new(&data);
        assert_eq!(read_fspec(&mut c, Some(14)), Err(DecodeError::UnexpectedEof));
    }

    #[test]
    fn overflow_past_max_frn() {
        // max_position = 7 means only one octet is ever legal; FX=1 here is an overflow.
        let data = [0x01, 0x80];
        let mut c = Cursor::new(&data);
        assert_eq!(read_fspec(&mut c, Some(7)), Err(DecodeError::FspecOverflow));
    }

    #[test]
    fn unbounded_chain_has_no_overflow_check() {
        let data = [0x81, 0x81, 0x80];
        let mut c = Cursor::new(&data);
        let fspec = read_fspec(&mut c, None).unwrap();
        assert_eq!(fspec.raw.len(), 3);
    }
}
