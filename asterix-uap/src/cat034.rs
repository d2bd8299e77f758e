//! Category 034 (Monoradar Service Messages) User Application Profile.
//!
//! A representative subset of the published FRN table, not the full 28-entry
//! profile: enough to exercise every [`asterix_core::FieldKind`] this
//! category uses, not a byte-for-byte transcription of the standard.

use asterix_core::{CompoundChild, FieldDescriptor, Uap};

fn message_type() -> FieldDescriptor {
    FieldDescriptor::fixed(1, "I034/000", "Message Type", 1)
}

fn data_source_identifier() -> FieldDescriptor {
    FieldDescriptor::fixed(2, "I034/010", "Data Source Identifier", 2)
}

fn time_of_day() -> FieldDescriptor {
    FieldDescriptor::fixed(3, "I034/030", "Time of Day", 3)
}

fn sector_number() -> FieldDescriptor {
    FieldDescriptor::fixed(4, "I034/020", "Sector Number", 1)
}

fn antenna_rotation_speed() -> FieldDescriptor {
    FieldDescriptor::fixed(5, "I034/041", "Antenna Rotation Speed", 2)
}

fn system_configuration_status() -> FieldDescriptor {
    let children = vec![
        CompoundChild::new(1, FieldDescriptor::fixed(1, "I034/050#1", "COM Subsystem Status", 2)),
        CompoundChild::new(2, FieldDescriptor::fixed(2, "I034/050#2", "PSR Subsystem Status", 1)),
        CompoundChild::new(3, FieldDescriptor::fixed(3, "I034/050#3", "SSR Subsystem Status", 1)),
        CompoundChild::new(4, FieldDescriptor::fixed(4, "I034/050#4", "Mode S Subsystem Status", 1)),
        CompoundChild::new(5, FieldDescriptor::spare(5)),
        CompoundChild::new(6, FieldDescriptor::spare(6)),
        CompoundChild::new(7, FieldDescriptor::spare(7)),
    ];
    FieldDescriptor::compound(6, "I034/050", "System Configuration and Status", children)
}

/// Builds a representative CAT034 UAP table.
pub fn cat034() -> Uap {
    let entries = vec![
        message_type(),
        data_source_identifier(),
        time_of_day(),
        sector_number(),
        antenna_rotation_speed(),
        system_configuration_status(),
        FieldDescriptor::spare(7),
    ];
    Uap::new(34, "cat034-subset", entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterix_core::FieldKind;

    #[test]
    fn frn_1_is_message_type() {
        let uap = cat034();
        assert_eq!(uap.get(1).unwrap().name, "I034/000");
    }

    #[test]
    fn frn_6_is_compound_system_status() {
        let uap = cat034();
        assert_eq!(uap.get(6).unwrap().kind, FieldKind::Compound);
    }

    #[test]
    fn max_frn_is_seven() {
        assert_eq!(cat034().max_frn(), 7);
    }
}
