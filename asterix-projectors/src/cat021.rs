//! CAT021 (ADS-B Target Reports) projector: turns a decoded [`RawRecord`]
//! into a [`Cat021Model`].
//!
//! Field coverage mirrors a representative subset of the category, not
//! every FRN the UAP defines -- the fields with clear, stable published
//! scaling factors. A field absent from the source record (FSPEC bit not
//! set) is left `None` in the model rather than erroring.

use asterix_core::{DecodeError, ItemPayload, Projector, RawRecord};
use serde::Serialize;

use crate::numeric::{be_bytes_to_u32, sign_extend};

const LAT_LON_SCALE: f64 = 0.00002145767;
const TIME_OF_DAY_SCALE: f64 = 1.0 / 128.0;
const GEOMETRIC_HEIGHT_SCALE: f64 = 6.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceIdentifier {
    pub sac: u8,
    pub sic: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wgs84Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetAddress {
    pub target_type: u8,
    pub address: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirSpeed {
    pub is_mach: bool,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometricHeight {
    pub height_feet: f64,
    pub greater_than_max: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cat021Model {
    pub data_source_identification: Option<SourceIdentifier>,
    pub track_number: Option<u16>,
    pub service_identification: Option<u8>,
    pub time_of_applicability_for_position: Option<f64>,
    pub position_wgs84: Option<Wgs84Position>,
    pub target_address: Option<TargetAddress>,
    pub air_speed: Option<AirSpeed>,
    pub geometric_height: Option<GeometricHeight>,
}

pub struct Cat021;

impl Projector for Cat021 {
    type Model = Cat021Model;

    fn project(record: &RawRecord) -> Result<Cat021Model, DecodeError> {
        let mut model = Cat021Model::default();

        for (frn, item) in record.iter() {
            let raw = match &item.payload {
                ItemPayload::Fixed { raw, .. } => raw.as_slice(),
                _ => continue,
            };

            match frn {
                1 if raw.len() == 2 => {
                    model.data_source_identification = Some(SourceIdentifier { sac: raw[0], sic: raw[1] });
                }
                3 if raw.len() == 2 => {
                    model.track_number = Some(u16::from_be_bytes([raw[0], raw[1]]) & 0x0FFF);
                }
                4 if !raw.is_empty() => {
                    model.service_identification = Some(raw[0]);
                }
                5 if raw.len() == 3 => {
                    model.time_of_applicability_for_position = Some(time_of_day(raw));
                }
                6 if raw.len() == 6 => {
                    model.position_wgs84 = Some(wgs84_low_res(raw));
                }
                11 if raw.len() == 3 => {
                    model.target_address = Some(TargetAddress {
                        target_type: raw[0],
                        address: be_bytes_to_u32(&raw[1..3]),
                    });
                }
                9 if raw.len() == 2 => {
                    model.air_speed = Some(air_speed(raw));
                }
                16 if raw.len() == 2 => {
                    model.geometric_height = Some(geometric_height(raw));
                }
                _ => {}
            }
        }

        Ok(model)
    }
}

fn time_of_day(raw: &[u8]) -> f64 {
    be_bytes_to_u32(raw) as f64 * TIME_OF_DAY_SCALE
}

fn wgs84_low_res(raw: &[u8]) -> Wgs84Position {
    let lat_raw = be_bytes_to_u32(&raw[0..3]);
    let lon_raw = be_bytes_to_u32(&raw[3..6]);
    Wgs84Position {
        latitude: sign_extend(lat_raw, 24) as f64 * LAT_LON_SCALE,
        longitude: sign_extend(lon_raw, 24) as f64 * LAT_LON_SCALE,
    }
}

fn air_speed(raw: &[u8]) -> AirSpeed {
    let is_mach = raw[0] & 0x80 != 0;
    let magnitude = (((raw[0] & 0x7F) as u32) << 8) | raw[1] as u32;
    let value = if is_mach { magnitude as f64 * 0.001 } else { magnitude as f64 * 2f64.powi(-14) };
    AirSpeed { is_mach, value }
}

fn geometric_height(raw: &[u8]) -> GeometricHeight {
    let raw_value = u16::from_be_bytes([raw[0], raw[1]]);
    let signed = sign_extend(raw_value as u32, 16) as i16;
    GeometricHeight {
        height_feet: signed as f64 * GEOMETRIC_HEIGHT_SCALE,
        greater_than_max: signed == i16::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterix_core::{FieldKind, Item};

    fn fixed_item(frn: u16, raw: Vec<u8>) -> Item {
        Item { frn, name: "n", description: "d", kind: FieldKind::Fixed, payload: ItemPayload::Fixed { raw, subvalues: vec![] } }
    }

    fn record_with(items: Vec<Item>) -> RawRecord {
        RawRecord { category: 21, length: 0, fspec: vec![], items }
    }

    #[test]
    fn data_source_identification_maps_sac_sic() {
        let record = record_with(vec![fixed_item(1, vec![0x0A, 0x14])]);
        let model = Cat021::project(&record).unwrap();
        assert_eq!(model.data_source_identification, Some(SourceIdentifier { sac: 10, sic: 20 }));
    }

    #[test]
    fn track_number_masks_to_twelve_bits() {
        let record = record_with(vec![fixed_item(3, vec![0xFF, 0xFF])]);
        let model = Cat021::project(&record).unwrap();
        assert_eq!(model.track_number, Some(0x0FFF));
    }

    #[test]
    fn position_wgs84_low_res_sign_extends_negative_longitude() {
        // longitude raw 0xFFFFFF -> -1 * scale
        let record = record_with(vec![fixed_item(6, vec![0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF])]);
        let model = Cat021::project(&record).unwrap();
        let pos = model.position_wgs84.unwrap();
        assert_eq!(pos.latitude, 0.0);
        assert!((pos.longitude - (-1.0 * LAT_LON_SCALE)).abs() < 1e-12);
    }

    #[test]
    fn air_speed_mach_flag_selects_scale() {
        let record = record_with(vec![fixed_item(9, vec![0x80, 0x0A])]);
        let model = Cat021::project(&record).unwrap();
        let speed = model.air_speed.unwrap();
        assert!(speed.is_mach);
        assert!((speed.value - 0.01).abs() < 1e-9);
    }

    #[test]
    fn geometric_height_max_value_flags_greater_than() {
        let record = record_with(vec![fixed_item(16, vec![0x7F, 0xFF])]);
        let model = Cat021::project(&record).unwrap();
        let height = model.geometric_height.unwrap();
        assert!(height.greater_than_max);
    }

    #[test]
    fn absent_fields_are_none() {
        let record = record_with(vec![]);
        let model = Cat021::project(&record).unwrap();
        assert_eq!(model, Cat021Model::default());
    }
}
