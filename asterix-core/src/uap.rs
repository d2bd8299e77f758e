//! Field descriptor model (C3): typed description of every item in a
//! category's User Application Profile.

use crate::subitem::SubItem;

/// The structural encoding of a UAP entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Fixed,
    Extended,
    Repetitive,
    Compound,
    Explicit,
    Spare,
    ReservedExpansion,
    SpecialPurpose,
}

/// Kind-specific layout parameters for a UAP entry.
#[derive(Debug, Clone)]
pub enum Layout {
    Fixed { size: u8 },
    Extended { primary_size: u8, secondary_size: u8 },
    Repetitive { repeat_size: u8 },
    Compound { children: Vec<CompoundChild> },
    /// Explicit, ReservedExpansion, SpecialPurpose: no parameters, length-prefixed.
    Explicit,
    /// Spare: no parameters, zero bytes consumed.
    None,
}

/// A single child slot of a Compound item's nested sub-FSPEC.
///
/// `slot` is the 1-based bit position within the compound's own chained
/// bitmap (bit 8 of the first sub-FSPEC octet is slot 1), matching the
/// `positions` produced by [`crate::fspec::read_fspec`] when reading that
/// sub-FSPEC.
#[derive(Debug, Clone)]
pub struct CompoundChild {
    pub slot: u16,
    pub descriptor: FieldDescriptor,
}

/// One entry of a category's UAP.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub frn: u16,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub layout: Layout,
    pub subitems: Vec<SubItem>,
}

impl FieldDescriptor {
    pub fn fixed(frn: u16, name: &'static str, description: &'static str, size: u8) -> Self {
        Self::fixed_with_subitems(frn, name, description, size, Vec::new())
    }

    pub fn fixed_with_subitems(
        frn: u16,
        name: &'static str,
        description: &'static str,
        size: u8,
        subitems: Vec<SubItem>,
    ) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::Fixed,
            layout: Layout::Fixed { size },
            subitems,
        }
    }

    pub fn extended(
        frn: u16,
        name: &'static str,
        description: &'static str,
        primary_size: u8,
        secondary_size: u8,
    ) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::Extended,
            layout: Layout::Extended { primary_size, secondary_size },
            subitems: Vec::new(),
        }
    }

    pub fn repetitive(
        frn: u16,
        name: &'static str,
        description: &'static str,
        repeat_size: u8,
    ) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::Repetitive,
            layout: Layout::Repetitive { repeat_size },
            subitems: Vec::new(),
        }
    }

    pub fn compound(
        frn: u16,
        name: &'static str,
        description: &'static str,
        children: Vec<CompoundChild>,
    ) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::Compound,
            layout: Layout::Compound { children },
            subitems: Vec::new(),
        }
    }

    pub fn explicit(frn: u16, name: &'static str, description: &'static str) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::Explicit,
            layout: Layout::Explicit,
            subitems: Vec::new(),
        }
    }

    pub fn reserved_expansion(frn: u16, name: &'static str, description: &'static str) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::ReservedExpansion,
            layout: Layout::Explicit,
            subitems: Vec::new(),
        }
    }

    pub fn special_purpose(frn: u16, name: &'static str, description: &'static str) -> Self {
        Self {
            frn,
            name,
            description,
            kind: FieldKind::SpecialPurpose,
            layout: Layout::Explicit,
            subitems: Vec::new(),
        }
    }

    pub fn spare(frn: u16) -> Self {
        Self {
            frn,
            name: "spare",
            description: "spare",
            kind: FieldKind::Spare,
            layout: Layout::None,
            subitems: Vec::new(),
        }
    }
}

impl CompoundChild {
    pub fn new(slot: u16, descriptor: FieldDescriptor) -> Self {
        Self { slot, descriptor }
    }
}

/// A category's User Application Profile: an ordered table keyed by FRN.
///
/// Built once at process start from plain Rust data (never from code
/// generation or runtime XML parsing); immutable and `Sync` thereafter, so a
/// single `Uap` may be shared across concurrently decoding threads.
#[derive(Debug, Clone)]
pub struct Uap {
    pub category: u8,
    pub name: &'static str,
    entries: Vec<FieldDescriptor>,
}

impl Uap {
    pub fn new(category: u8, name: &'static str, entries: Vec<FieldDescriptor>) -> Self {
        Self { category, name, entries }
    }

    pub fn get(&self, frn: u16) -> Option<&FieldDescriptor> {
        self.entries.iter().find(|e| e.frn == frn)
    }

    pub fn entries(&self) -> &[FieldDescriptor] {
        &self.entries
    }

    /// The highest FRN this UAP defines; bounds the outer FSPEC's FX chain.
    pub fn max_frn(&self) -> u16 {
        self.entries.iter().map(|e| e.frn).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subitem::Interpretation;

    #[test]
    fn lookup_by_frn() {
        let uap = Uap::new(
            48,
            "test",
            vec![
                FieldDescriptor::fixed(1, "I048/010", "Data Source Identifier", 2),
                FieldDescriptor::spare(2),
            ],
        );
        assert_eq!(uap.get(1).unwrap().name, "I048/010");
        assert!(uap.get(2).unwrap().kind == FieldKind::Spare);
        assert!(uap.get(3).is_none());
        assert_eq!(uap.max_frn(), 2);
    }

    #[test]
    fn fixed_with_subitems_carries_them() {
        let sub = SubItem::new("bit", 8, 1, Interpretation::UnsignedInt);
        let d = FieldDescriptor::fixed_with_subitems(1, "x", "d", 1, vec![sub]);
        assert_eq!(d.subitems.len(), 1);
    }

    #[test]
    fn empty_uap_max_frn_is_zero() {
        let uap = Uap::new(1, "empty", vec![]);
        assert_eq!(uap.max_frn(), 0);
    }
}
