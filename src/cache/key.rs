//! Fingerprint Module
//!
//! Derives stable cache keys from a profile and a chart type.

use sha2::{Digest, Sha256};

use crate::models::Profile;

// == Constants ==
/// Decimal places kept for latitude and longitude before hashing
pub const COORDINATE_PRECISION: i32 = 4;

/// Length of a fingerprint in hex characters (SHA-256)
pub const FINGERPRINT_LEN: usize = 64;

// == Fingerprint ==
/// Computes the cache key for a `(profile, chart_type)` pair.
///
/// Coordinates are rounded to [`COORDINATE_PRECISION`] places so floating noise
/// collapses onto one slot. Absent strings become `""`, absent coordinates `0.0`.
/// Fields outside the fixed set are ignored.
pub fn fingerprint(profile: &Profile, chart_type: &str) -> String {
    // JSON array encoding keeps field boundaries unambiguous
    let canonical = serde_json::json!([
        profile.date_of_birth,
        profile.time_of_birth.as_deref().unwrap_or(""),
        format_coordinate(profile.latitude.unwrap_or(0.0)),
        format_coordinate(profile.longitude.unwrap_or(0.0)),
        profile.house_system.as_deref().unwrap_or(""),
        chart_type,
    ])
    .to_string();

    let digest = Sha256::digest(canonical.as_bytes());
    hex::encode(digest)
}

/// Rounds a coordinate and renders it with a fixed number of decimals.
fn format_coordinate(value: f64) -> String {
    let scale = 10f64.powi(COORDINATE_PRECISION);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        // -0.0 and 0.0 must share a key
        rounded = 0.0;
    }
    format!("{:.*}", COORDINATE_PRECISION as usize, rounded)
}
