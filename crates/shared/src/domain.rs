use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PositionRecord {
    pub azimuth: i64,
    pub elevation: i64,
}

impl PositionRecord {
    pub fn new(azimuth: i64, elevation: i64) -> Self {
        Self { azimuth, elevation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<i64>,
}

impl PositionUpdate {
    pub fn azimuth(value: i64) -> Self {
        Self {
            azimuth: Some(value),
            elevation: None,
        }
    }

    pub fn elevation(value: i64) -> Self {
        Self {
            azimuth: None,
            elevation: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.azimuth.is_none() && self.elevation.is_none()
    }

    pub fn apply_to(&self, record: &mut PositionRecord) {
        if let Some(azimuth) = self.azimuth {
            record.azimuth = azimuth;
        }
        if let Some(elevation) = self.elevation {
            record.elevation = elevation;
        }
    }
}

impl From<PositionRecord> for PositionUpdate {
    fn from(value: PositionRecord) -> Self {
        Self {
            azimuth: Some(value.azimuth),
            elevation: Some(value.elevation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut record = PositionRecord::new(10, 20);
        PositionUpdate::azimuth(99).apply_to(&mut record);
        assert_eq!(record, PositionRecord::new(99, 20));

        PositionUpdate::default().apply_to(&mut record);
        assert_eq!(record, PositionRecord::new(99, 20));
    }

    #[test]
    fn null_and_missing_fields_decode_as_absent() {
        let update: PositionUpdate =
            serde_json::from_str(r#"{"azimuth": null}"#).expect("json");
        assert!(update.is_empty());

        let update: PositionUpdate = serde_json::from_str(r#"{"elevation": 45}"#).expect("json");
        assert_eq!(update, PositionUpdate::elevation(45));
    }

    #[test]
    fn full_update_from_record_serializes_both_fields() {
        let update = PositionUpdate::from(PositionRecord::new(270, 45));
        assert_eq!(
            serde_json::to_value(update).expect("json"),
            serde_json::json!({ "azimuth": 270, "elevation": 45 })
        );
    }

    #[test]
    fn record_decoding_requires_both_fields() {
        let err = serde_json::from_str::<PositionRecord>(r#"{"azimuth": 1}"#);
        assert!(err.is_err());
    }
}
