//! Category 048 (Monoradar Target Reports) User Application Profile.
//!
//! A representative subset: the items needed to decode a plausible target
//! report end to end (data source, time, position, track, identification),
//! not the full published FRN table.

use asterix_core::{Interpretation, SubItem, FieldDescriptor, Uap};

fn data_source_identifier() -> FieldDescriptor {
    FieldDescriptor::fixed(1, "I048/010", "Data Source Identifier", 2)
}

fn time_of_day() -> FieldDescriptor {
    FieldDescriptor::fixed(2, "I048/140", "Time of Day", 3)
}

fn target_report_descriptor() -> FieldDescriptor {
    FieldDescriptor::extended(3, "I048/020", "Target Report Descriptor", 1, 1)
}

fn measured_position_polar() -> FieldDescriptor {
    let subitems = vec![
        SubItem::new("rho", 16, 9, Interpretation::UnsignedInt),
        SubItem::new("theta", 8, 1, Interpretation::UnsignedInt),
    ];
    FieldDescriptor::fixed_with_subitems(4, "I048/040", "Measured Position in Polar Coordinates", 4, subitems)
}

fn mode_3a_code() -> FieldDescriptor {
    let subitems = vec![SubItem::new("code", 12, 1, Interpretation::UnsignedInt)];
    FieldDescriptor::fixed_with_subitems(5, "I048/070", "Mode-3/A Code", 2, subitems)
}

fn flight_level() -> FieldDescriptor {
    let subitems = vec![SubItem::new("flight_level", 14, 1, Interpretation::SignedInt)];
    FieldDescriptor::fixed_with_subitems(6, "I048/090", "Flight Level", 2, subitems)
}

fn aircraft_address() -> FieldDescriptor {
    FieldDescriptor::fixed(7, "I048/220", "Aircraft Address", 3)
}

fn aircraft_identification() -> FieldDescriptor {
    FieldDescriptor::fixed(8, "I048/240", "Aircraft Identification", 6)
}

fn mode_s_mb_data() -> FieldDescriptor {
    FieldDescriptor::repetitive(9, "I048/250", "Mode S MB Data", 8)
}

fn track_number() -> FieldDescriptor {
    FieldDescriptor::fixed(10, "I048/161", "Track Number", 2)
}

/// Builds a representative CAT048 UAP table.
pub fn cat048() -> Uap {
    let entries = vec![
        data_source_identifier(),
        time_of_day(),
        target_report_descriptor(),
        measured_position_polar(),
        mode_3a_code(),
        flight_level(),
        aircraft_address(),
        aircraft_identification(),
        mode_s_mb_data(),
        track_number(),
    ];
    Uap::new(48, "cat048-subset", entries)
}
