//! Birth profile and chart artifact types
//!
//! The cache never interprets these values; it only reads them to build fingerprints
//! and stamps the `metadata.cached` marker on charts it hands back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque chart artifact produced by a builder.
///
/// Expected to be a JSON object with a `metadata` object inside it.
pub type Chart = Value;

/// Birth data a chart is computed from.
///
/// Only `date_of_birth` is required. Any extra fields are preserved in `extra`
/// but play no part in fingerprinting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_system: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Profile {
    /// Creates a profile with only a date of birth.
    pub fn new(date_of_birth: impl Into<String>) -> Self {
        Self {
            date_of_birth: date_of_birth.into(),
            time_of_birth: None,
            latitude: None,
            longitude: None,
            house_system: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_time(mut self, time_of_birth: impl Into<String>) -> Self {
        self.time_of_birth = Some(time_of_birth.into());
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_house_system(mut self, house_system: impl Into<String>) -> Self {
        self.house_system = Some(house_system.into());
        self
    }
}

/// Sets `metadata.cached` on a chart, creating the metadata object when needed.
///
/// A non-object chart is returned unchanged. A `metadata` value that is not an
/// object is replaced.
pub fn mark_cached(mut chart: Chart, cached: bool) -> Chart {
    if let Value::Object(fields) = &mut chart {
        let metadata = fields
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));
        if !metadata.is_object() {
            *metadata = Value::Object(Map::new());
        }
        if let Value::Object(meta) = metadata {
            meta.insert("cached".to_string(), Value::Bool(cached));
        }
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserialize_minimal() {
        let profile: Profile = serde_json::from_str(r#"{"date_of_birth": "1990-05-15"}"#).unwrap();
        assert_eq!(profile.date_of_birth, "1990-05-15");
        assert!(profile.time_of_birth.is_none());
        assert!(profile.latitude.is_none());
        assert!(profile.extra.is_empty());
    }

    #[test]
    fn test_profile_deserialize_keeps_extra_fields() {
        let json = r#"{
            "date_of_birth": "1990-05-15",
            "time_of_birth": "14:30",
            "latitude": 40.7128,
            "longitude": -74.006,
            "house_system": "placidus",
            "name": "Ada"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.time_of_birth.as_deref(), Some("14:30"));
        assert_eq!(profile.longitude, Some(-74.006));
        assert_eq!(profile.extra.get("name"), Some(&json!("Ada")));
    }

    #[test]
    fn test_mark_cached_adds_metadata() {
        let chart = mark_cached(json!({"planets": []}), true);
        assert_eq!(chart["metadata"]["cached"], json!(true));
    }

    #[test]
    fn test_mark_cached_overwrites_existing_flag() {
        let chart = json!({"metadata": {"cached": true, "engine": "v2"}});
        let chart = mark_cached(chart, false);
        assert_eq!(chart["metadata"]["cached"], json!(false));
        assert_eq!(chart["metadata"]["engine"], json!("v2"));
    }

    #[test]
    fn test_mark_cached_replaces_non_object_metadata() {
        let chart = mark_cached(json!({"metadata": "legacy"}), true);
        assert_eq!(chart["metadata"], json!({"cached": true}));
    }

    #[test]
    fn test_mark_cached_ignores_non_object_chart() {
        let chart = mark_cached(json!([1, 2, 3]), true);
        assert_eq!(chart, json!([1, 2, 3]));
    }
}
