use log::debug;
use serde_json::Value;

use crate::config::RangePolicy;
use crate::error::{HeatmapError, Result};
use crate::model::AllocationSnapshot;

/// Decode a `/getalloc` response body.
///
/// The body must be a JSON array of finite numbers. `null` decodes to an
/// empty snapshot: the server sends it when the store's block size is
/// coarser than one sample. Samples outside [0,1] are handled per `policy`.
pub fn decode_snapshot(data: &[u8], policy: RangePolicy) -> Result<AllocationSnapshot> {
    let value: Value = serde_json::from_slice(data)
        .map_err(|e| HeatmapError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Null => {
            debug!("getalloc returned null, treating as empty snapshot");
            return Ok(AllocationSnapshot::default());
        }
        other => {
            return Err(HeatmapError::MalformedResponse(format!(
                "expected an array of numbers, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut samples = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(v) = item.as_f64().filter(|v| v.is_finite()) else {
            return Err(HeatmapError::MalformedResponse(format!(
                "element {index} is {}, expected a finite number",
                json_kind(item)
            )));
        };
        if policy == RangePolicy::Reject && !(0.0..=1.0).contains(&v) {
            return Err(HeatmapError::OutOfRangeSample { index, value: v });
        }
        samples.push(v);
    }

    debug!("decoded {} allocation samples", samples.len());
    Ok(AllocationSnapshot::new(samples))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
