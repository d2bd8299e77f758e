//! JSON rendering (C10): turns decoded output into `serde_json::Value`s.
//!
//! `asterix-core` carries zero dependencies, so `RawRecord`/`Item` have no
//! `Serialize` impl to derive from; this module builds the JSON
//! representation by hand instead. Projector models (`asterix-projectors`)
//! already derive `Serialize`, so [`project_to_json`] just delegates to
//! `serde_json::to_value`.

use asterix_core::{DataBlock, Item, ItemPayload, RawRecord};
use asterix_projectors::{Cat021, Cat048};
use serde_json::{json, Value};

use crate::error::IoShellError;

/// Renders a decoded datablock as raw, structurally faithful JSON -- every
/// FRN and byte the decoder saw, with no category-specific interpretation.
pub fn to_json(block: &DataBlock) -> Value {
    json!({
        "category": block.category,
        "length": block.length,
        "records": block.records.iter().map(record_to_json).collect::<Vec<_>>(),
    })
}

fn record_to_json(record: &RawRecord) -> Value {
    json!({
        "category": record.category,
        "length": record.length,
        "fspec": record.fspec,
        "items": record.items.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}

fn item_to_json(item: &Item) -> Value {
    json!({
        "frn": item.frn,
        "name": item.name,
        "description": item.description,
        "payload": payload_to_json(&item.payload),
    })
}

fn payload_to_json(payload: &ItemPayload) -> Value {
    match payload {
        ItemPayload::Fixed { raw, subvalues } => json!({
            "kind": "fixed",
            "raw": raw,
            "subvalues": subvalues.iter().map(|s| json!({
                "name": s.name,
                "value": s.value,
            })).collect::<Vec<_>>(),
        }),
        ItemPayload::Extended { extents } => json!({
            "kind": "extended",
            "extents": extents,
        }),
        ItemPayload::Repetitive { count, repeats } => json!({
            "kind": "repetitive",
            "count": count,
            "repeats": repeats,
        }),
        ItemPayload::Compound { fspec, subitems } => json!({
            "kind": "compound",
            "fspec": fspec,
            "subitems": subitems.iter().map(item_to_json).collect::<Vec<_>>(),
        }),
        ItemPayload::Explicit { raw } => json!({
            "kind": "explicit",
            "raw": raw,
        }),
        ItemPayload::Spare => json!({ "kind": "spare" }),
    }
}

/// Projects `record` into its category's semantic model (if one is
/// registered) and serializes that, rather than the raw item tree.
pub fn project_to_json(record: &RawRecord) -> Result<Value, IoShellError> {
    use asterix_core::Projector;

    let value = match record.category {
        21 => serde_json::to_value(Cat021::project(record)?)?,
        48 => serde_json::to_value(Cat048::project(record)?)?,
        other => {
            log::warn!("no projector registered for category {}, falling back to raw JSON", other);
            json!({ "category": other, "raw": record_to_json(record) })
        }
    };
    Ok(value)
}
