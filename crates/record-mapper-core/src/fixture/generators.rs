//! Leaf value generators for the fixture walker.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// `"{field}{seed}"`, plus the list position for list elements.
pub(super) fn deterministic_string(field: &str, seed: &str, position: Option<usize>) -> String {
    match position {
        Some(i) => format!("{field}{seed}{i}"),
        None => format!("{field}{seed}"),
    }
}

/// `index` as the integer part and `index` repeated `index` times as the
/// fraction: 2 → 2.22, 3 → 3.333, 0 → 0.0.
pub(super) fn deterministic_float(index: usize) -> Option<f64> {
    let digits = index.to_string();
    format!("{digits}.{}", digits.repeat(index)).parse().ok()
}

/// Every calendar component set to `index`. `None` when that is not a valid
/// date-time (index 0, or anything past month 12).
pub(super) fn deterministic_datetime(index: usize) -> Option<DateTime<Utc>> {
    let year = i32::try_from(index).ok()?;
    let part = u32::try_from(index).ok()?;
    Utc.with_ymd_and_hms(year, part, part, part, part, part)
        .single()
}

/// Short random identifier: the first group of a v4 UUID built from `rng`.
pub(super) fn random_token(rng: &mut fastrand::Rng) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    uuid.to_string()
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Timestamps go through chrono's serde impl so generated graphs deserialize
/// back into `DateTime<Utc>` fields.
pub(super) fn datetime_value(value: DateTime<Utc>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}
