use std::fmt;

/// Unified error type for ASTERIX decoding failures.
///
/// # Variants
///
/// - [`UnexpectedEof`](Self::UnexpectedEof) -- the cursor ran out of bytes mid-read.
/// - [`FspecOverflow`](Self::FspecOverflow) -- an FSPEC chain continued past the
///   highest FRN the UAP defines.
/// - [`UnknownFrn`](Self::UnknownFrn) -- the FSPEC asserted an FRN the UAP has no
///   entry for.
/// - [`ExplicitTooShort`](Self::ExplicitTooShort) -- an Explicit item's length
///   byte was zero.
/// - [`LengthMismatch`](Self::LengthMismatch) -- a decoded record or datablock
///   consumed a different number of bytes than its declared length.
/// - [`CategoryUnknown`](Self::CategoryUnknown) -- no UAP is registered for the
///   wire category.
///
/// # Example
///
/// ```
/// use asterix_core::DecodeError;
///
/// let err = DecodeError::UnknownFrn(12);
/// assert!(matches!(err, DecodeError::UnknownFrn(12)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    UnexpectedEof,
    FspecOverflow,
    UnknownFrn(u16),
    ExplicitTooShort,
    LengthMismatch,
    CategoryUnknown(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of input"),
            DecodeError::FspecOverflow => write!(f, "FSPEC chain exceeds the UAP's defined FRNs"),
            DecodeError::UnknownFrn(frn) => write!(f, "FRN {} has no entry in the UAP", frn),
            DecodeError::ExplicitTooShort => write!(f, "explicit item length byte is zero"),
            DecodeError::LengthMismatch => {
                write!(f, "decoded byte count does not match declared length")
            }
            DecodeError::CategoryUnknown(cat) => {
                write!(f, "no UAP registered for category {}", cat)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_non_empty() {
        let errs = [
            DecodeError::UnexpectedEof,
            DecodeError::FspecOverflow,
            DecodeError::UnknownFrn(7),
            DecodeError::ExplicitTooShort,
            DecodeError::LengthMismatch,
            DecodeError::CategoryUnknown(200),
        ];
        for e in errs {
            assert!(!e.to_string().is_empty());
        }
    }

    #[test]
    fn unknown_frn_carries_value() {
        let e = DecodeError::UnknownFrn(21);
        assert!(e.to_string().contains("21"));
    }
}
