//! Category-to-UAP lookup (C8): the map a datagram decoder consults after
//! reading a datablock's category byte.

use asterix_core::{DecodeError, Uap};

use crate::{cat021, cat034, cat048};

/// An immutable registry of UAPs, built once and shared across threads.
///
/// Construction builds every registered category's table eagerly; lookups
/// are a linear scan over a handful of entries, which is simpler than a
/// `HashMap` at this size and keeps the registry `Clone`-free to build.
pub struct UapRegistry {
    entries: Vec<Uap>,
}

impl UapRegistry {
    /// Builds a registry containing every UAP this crate ships.
    pub fn with_defaults() -> Self {
        Self { entries: vec![cat021(), cat034(), cat048()] }
    }

    /// Builds an empty registry; callers can populate it via [`Self::register`].
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, uap: Uap) {
        self.entries.retain(|u| u.category != uap.category);
        self.entries.push(uap);
    }

    pub fn get(&self, category: u8) -> Result<&Uap, DecodeError> {
        self.entries
            .iter()
            .find(|u| u.category == category)
            .ok_or(DecodeError::CategoryUnknown(category))
    }
}

impl Default for UapRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_021_034_048() {
        let reg = UapRegistry::with_defaults();
        assert!(reg.get(21).is_ok());
        assert!(reg.get(34).is_ok());
        assert!(reg.get(48).is_ok());
    }

    #[test]
    fn unregistered_category_errors() {
        let reg = UapRegistry::with_defaults();
        assert_eq!(reg.get(62), Err(DecodeError::CategoryUnknown(62)));
    }

    #[test]
    fn register_replaces_existing_category() {
        let mut reg = UapRegistry::new();
        reg.register(cat021());
        assert_eq!(reg.get(21).unwrap().name, "cat021_2.5");
        reg.register(Uap::new(21, "custom", vec![]));
        assert_eq!(reg.get(21).unwrap().name, "custom");
    }
}
