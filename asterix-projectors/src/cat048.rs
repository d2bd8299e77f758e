//! CAT048 (Monoradar Target Reports) projector, matching the representative
//! UAP subset in `asterix-uap::cat048`.

use asterix_core::{DecodeError, ItemPayload, Projector, RawRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarPosition {
    pub rho: f64,
    pub theta: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cat048Model {
    pub measured_position: Option<PolarPosition>,
    pub mode_3a_code: Option<u16>,
    pub flight_level: Option<f64>,
    pub track_number: Option<u16>,
}

const RHO_LSB: f64 = 1.0 / 256.0; // nautical miles
const THETA_LSB: f64 = 360.0 / 65536.0; // degrees
const FLIGHT_LEVEL_LSB: f64 = 0.25;

pub struct Cat048;

impl Projector for Cat048 {
    type Model = Cat048Model;

    fn project(record: &RawRecord) -> Result<Cat048Model, DecodeError> {
        let mut model = Cat048Model::default();

        for (frn, item) in record.iter() {
            let subvalues = match &item.payload {
                ItemPayload::Fixed { subvalues, .. } => subvalues,
                _ => continue,
            };

            match frn {
                4 => {
                    let rho = subvalues.iter().find(|s| s.name == "rho").map(|s| s.value as f64 * RHO_LSB);
                    let theta = subvalues.iter().find(|s| s.name == "theta").map(|s| s.value as f64 * THETA_LSB);
                    if let (Some(rho), Some(theta)) = (rho, theta) {
                        model.measured_position = Some(PolarPosition { rho, theta });
                    }
                }
                5 => {
                    if let Some(code) = subvalues.iter().find(|s| s.name == "code") {
                        model.mode_3a_code = Some(code.value as u16);
                    }
                }
                6 => {
                    if let Some(fl) = subvalues.iter().find(|s| s.name == "flight_level") {
                        model.flight_level = Some(fl.value as f64 * FLIGHT_LEVEL_LSB);
                    }
                }
                10 => {
                    if let ItemPayload::Fixed { raw, .. } = &item.payload {
                        if raw.len() == 2 {
                            model.track_number = Some(u16::from_be_bytes([raw[0], raw[1]]));
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asterix_core::{FieldKind, Interpretation, Item, SubValueOwned};

    fn fixed_item_with_subvalues(frn: u16, raw: Vec<u8>, subvalues: Vec<SubValueOwned>) -> Item {
        Item { frn, name: "n", description: "d", kind: FieldKind::Fixed, payload: ItemPayload::Fixed { raw, subvalues } }
    }

    fn record_with(items: Vec<Item>) -> RawRecord {
        RawRecord { category: 48, length: 0, fspec: vec![], items }
    }

    #[test]
    fn measured_position_scales_rho_and_theta() {
        let subvalues = vec![
            SubValueOwned { name: "rho", interpretation: Interpretation::UnsignedInt, value: 256 },
            SubValueOwned { name: "theta", interpretation: Interpretation::UnsignedInt, value: 0 },
        ];
        let record = record_with(vec![fixed_item_with_subvalues(4, vec![0, 0, 0, 0], subvalues)]);
        let model = Cat048::project(&record).unwrap();
        let pos = model.measured_position.unwrap();
        assert!((pos.rho - 1.0).abs() < 1e-9);
        assert_eq!(pos.theta, 0.0);
    }

    #[test]
    fn track_number_reads_raw_fixed_bytes() {
        let record = record_with(vec![fixed_item_with_subvalues(10, vec![0x01, 0x02], vec![])]);
        let model = Cat048::project(&record).unwrap();
        assert_eq!(model.track_number, Some(0x0102));
    }

    #[test]
    fn absent_fields_are_none() {
        let record = record_with(vec![]);
        let model = Cat048::project(&record).unwrap();
        assert_eq!(model, Cat048Model::default());
    }
}
