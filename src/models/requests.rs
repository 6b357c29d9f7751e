//! Request DTOs for the cache admin API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::Profile;

/// Maximum accepted chart type length
pub const MAX_CHART_TYPE_LENGTH: usize = 64;

/// Request body addressing one cached chart
/// (POST /cache/contains, POST /cache/invalidate)
#[derive(Debug, Clone, Deserialize)]
pub struct ChartKeyRequest {
    /// Birth profile the chart was built from
    pub profile: Profile,
    /// Chart type tag, e.g. "natal" or "transit"
    pub chart_type: String,
}

impl ChartKeyRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.chart_type.is_empty() {
            return Some("chart_type cannot be empty".to_string());
        }
        if self.chart_type.len() > MAX_CHART_TYPE_LENGTH {
            return Some(format!(
                "chart_type exceeds maximum length of {} characters",
                MAX_CHART_TYPE_LENGTH
            ));
        }
        if self.profile.date_of_birth.is_empty() {
            return Some("date_of_birth cannot be empty".to_string());
        }
        let coordinates = [self.profile.latitude, self.profile.longitude];
        if coordinates.iter().flatten().any(|c| !c.is_finite()) {
            return Some("coordinates must be finite numbers".to_string());
        }
        None
    }
}
