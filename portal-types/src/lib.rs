//! Wire types shared between the portal front-end and the Gram Panchayat
//! REST backend, plus the client-side validation helpers for registration.
//!
//! Everything here mirrors the backend's JSON. Fields the server may omit are
//! `Option` or defaulted so a sparse record never fails to decode.

use serde::{Deserialize, Serialize};

pub mod identity;
pub mod records;

pub use identity::{Identity, LoginResponse, ProfileUpdate, RegisterRequest, Role};
pub use records::{
    ApplicationRecord, ComplaintRecord, DashboardStats, NewApplication, NoticeRecord,
    PaymentRecord, PropertyRecord, Publisher,
};

/// Standard response wrapper used by every backend endpoint:
/// `{ success, message, data, error }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Best human-readable description of a failed response.
    pub fn failure_message(&self) -> Option<String> {
        if let Some(err) = &self.error {
            if !err.trim().is_empty() {
                return Some(err.clone());
            }
        }
        if !self.message.trim().is_empty() {
            return Some(self.message.clone());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_error_shape_without_data() {
        let env: ApiEnvelope<Vec<NoticeRecord>> = serde_json::from_str(
            r#"{"success":false,"message":"Login failed","error":"invalid credentials"}"#,
        )
        .expect("decode");
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.failure_message().as_deref(), Some("invalid credentials"));
    }

    #[test]
    fn failure_message_falls_back_to_message_field() {
        let env: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"Update failed"}"#).expect("decode");
        assert_eq!(env.failure_message().as_deref(), Some("Update failed"));
    }

    #[test]
    fn failure_message_is_none_when_both_fields_blank() {
        let env: ApiEnvelope<()> = serde_json::from_str(r#"{"success":false}"#).expect("decode");
        assert!(env.failure_message().is_none());
    }
}
