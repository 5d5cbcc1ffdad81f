use serde::{Deserialize, Serialize};

pub fn get_current_position_route() -> &'static str {
    "/get_current_position"
}

pub fn set_position_route() -> &'static str {
    "/set_position"
}

pub fn healthz_route() -> &'static str {
    "/healthz"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AckStatus {
    #[default]
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetPositionResponse {
    pub status: AckStatus,
}

impl SetPositionResponse {
    pub fn success() -> Self {
        Self {
            status: AckStatus::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_matches_wire_format() {
        assert_eq!(
            serde_json::to_string(&SetPositionResponse::success()).expect("json"),
            r#"{"status":"success"}"#
        );
    }

    #[test]
    fn unknown_ack_status_is_rejected() {
        assert!(serde_json::from_str::<SetPositionResponse>(r#"{"status":"queued"}"#).is_err());
    }
}
