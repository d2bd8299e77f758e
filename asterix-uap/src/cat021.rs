//! Category 021 (ADS-B Target Reports) User Application Profile, version 2.5.

use asterix_core::{CompoundChild, FieldDescriptor, Uap};

fn met_information() -> FieldDescriptor {
    let children = vec![
        CompoundChild::new(1, FieldDescriptor::fixed(1, "I021/220#1", "Wind Speed", 2)),
        CompoundChild::new(2, FieldDescriptor::fixed(2, "I021/220#2", "Wind Direction", 2)),
        CompoundChild::new(3, FieldDescriptor::fixed(3, "I021/220#3", "Temperature", 2)),
        CompoundChild::new(4, FieldDescriptor::fixed(4, "I021/220#4", "Turbulence", 1)),
        CompoundChild::new(5, FieldDescriptor::spare(5)),
        CompoundChild::new(6, FieldDescriptor::spare(6)),
        CompoundChild::new(7, FieldDescriptor::spare(7)),
    ];
    FieldDescriptor::compound(31, "I021/220", "Met Information", children)
}

fn trajectory_intent() -> FieldDescriptor {
    let children = vec![
        CompoundChild::new(1, FieldDescriptor::fixed(1, "I021/110#1", "Trajectory Intent Status", 1)),
        CompoundChild::new(2, FieldDescriptor::repetitive(2, "I021/110#2", "Trajectory Intent Data", 15)),
        CompoundChild::new(3, FieldDescriptor::spare(3)),
        CompoundChild::new(4, FieldDescriptor::spare(4)),
        CompoundChild::new(5, FieldDescriptor::spare(5)),
        CompoundChild::new(6, FieldDescriptor::spare(6)),
        CompoundChild::new(7, FieldDescriptor::spare(7)),
    ];
    FieldDescriptor::compound(34, "I021/110", "Trajectory Intent", children)
}

fn data_ages() -> FieldDescriptor {
    let children = vec![
        CompoundChild::new(1, FieldDescriptor::fixed(1, "I021/295#1", "Age of Aircraft Operational Status", 1)),
        CompoundChild::new(2, FieldDescriptor::fixed(2, "I021/295#2", "Age of Target Report Descriptor", 1)),
        CompoundChild::new(3, FieldDescriptor::fixed(3, "I021/295#3", "Age of Mode 3/A Code", 1)),
        CompoundChild::new(4, FieldDescriptor::fixed(4, "I021/295#4", "Age of Quality Indicators", 1)),
        CompoundChild::new(5, FieldDescriptor::fixed(5, "I021/295#5", "Age of Trajectory Intent", 1)),
        CompoundChild::new(6, FieldDescriptor::fixed(6, "I021/295#6", "Age of Message Amplitude", 1)),
        CompoundChild::new(7, FieldDescriptor::fixed(7, "I021/295#7", "Age of Geometric Height", 1)),
    ];
    FieldDescriptor::compound(42, "I021/295", "Data Ages", children)
}

/// Builds the CAT021 v2.5 UAP table.
///
/// FRN 39 ("I021/250", Mode S MB Data) is a 1-to-1 port of what the original
/// table calls FRN 38 alongside I021/132 -- the upstream table aliases both
/// entries to FRN 38, which cannot be right since FRNs are unique FSPEC bit
/// positions. Renumbered here to 39, matching the FRN's position in the
/// category's published field order.
pub fn cat021() -> Uap {
    let entries = vec![
        FieldDescriptor::fixed(1, "I021/010", "Data Source Identification", 2),
        FieldDescriptor::extended(2, "I021/040", "Target Report Descriptor", 1, 1),
        FieldDescriptor::fixed(3, "I021/161", "Track Number", 2),
        FieldDescriptor::fixed(4, "I021/015", "Service Identification", 1),
        FieldDescriptor::fixed(5, "I021/071", "Time of Applicability for Position", 3),
        FieldDescriptor::fixed(6, "I021/130", "Position in WGS-84 co-ordinates", 6),
        FieldDescriptor::fixed(7, "I021/131", "Position in WGS-84 co-ordinates, high res", 8),
        FieldDescriptor::fixed(8, "I021/072", "Time of Applicability for Velocity", 3),
        FieldDescriptor::fixed(9, "I021/150", "Air Speed", 2),
        FieldDescriptor::fixed(10, "I021/151", "True Air Speed", 2),
        FieldDescriptor::fixed(11, "I021/080", "Target Address", 3),
        FieldDescriptor::fixed(12, "I021/073", "Time of Message Reception of Position", 3),
        FieldDescriptor::fixed(13, "I021/074", "Time of Message Reception of Position-High Precision", 4),
        FieldDescriptor::fixed(14, "I021/075", "Time of Message Reception of Velocity", 3),
        FieldDescriptor::fixed(15, "I021/076", "Time of Message Reception of Velocity-High Precision", 4),
        FieldDescriptor::fixed(16, "I021/140", "Geometric Height", 2),
        FieldDescriptor::extended(17, "I021/090", "Quality Indicators", 1, 1),
        FieldDescriptor::fixed(18, "I021/210", "MOPS Version", 1),
        FieldDescriptor::fixed(19, "I021/070", "Mode 3/A Code", 2),
        FieldDescriptor::fixed(20, "I021/230", "Roll Angle", 2),
        FieldDescriptor::fixed(21, "I021/145", "Flight Level", 2),
        FieldDescriptor::fixed(22, "I021/152", "Magnetic Heading", 2),
        FieldDescriptor::fixed(23, "I021/200", "Target Status", 1),
        FieldDescriptor::fixed(24, "I021/155", "Barometric Vertical Rate", 2),
        FieldDescriptor::fixed(25, "I021/157", "Geometric Vertical Rate", 2),
        FieldDescriptor::fixed(26, "I021/160", "Airborne Ground Vector", 4),
        FieldDescriptor::fixed(27, "I021/165", "Track Angle Rate", 2),
        FieldDescriptor::fixed(28, "I021/177", "Time of Report Transmission", 3),
        FieldDescriptor::fixed(29, "I021/170", "Target Identification", 6),
        FieldDescriptor::fixed(30, "I021/020", "Emitter Category", 1),
        met_information(),
        FieldDescriptor::fixed(32, "I021/146", "Selected Altitude", 2),
        FieldDescriptor::fixed(33, "I021/148", "Final State Selected Altitude", 2),
        trajectory_intent(),
        FieldDescriptor::fixed(35, "I021/016", "Service Management", 1),
        FieldDescriptor::fixed(36, "I021/008", "Aircraft Operational Status", 1),
        FieldDescriptor::extended(37, "I021/271", "Surface Capabilities and Characteristics", 1, 1),
        FieldDescriptor::fixed(38, "I021/132", "Message Amplitude", 1),
        FieldDescriptor::repetitive(39, "I021/250", "Mode S MB Data", 8),
        FieldDescriptor::fixed(40, "I021/260", "ACAS Resolution Advisory Report", 7),
        FieldDescriptor::fixed(41, "I021/400", "Receiver ID", 1),
        data_ages(),
        FieldDescriptor::spare(43),
        FieldDescriptor::spare(44),
        FieldDescriptor::spare(45),
        FieldDescriptor::spare(46),
        FieldDescriptor::spare(47),
        FieldDescriptor::reserved_expansion(48, "RE-021", "Reserved Expansion Field"),
        FieldDescriptor::special_purpose(49, "SP-021", "Special Purpose Field"),
    ];
    Uap::new(21, "cat021_2.5", entries)
}
