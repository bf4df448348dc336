use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A certificate application as listed by `/services/my-applications`.
/// Status is one of `pending | under_review | approved | rejected`; the
/// front-end renders unknown values with the pending style rather than
/// rejecting the record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub application_number: String,
    #[serde(rename = "type", default)]
    pub certificate_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub applicant: Option<Identity>,
}

/// Submission payload for `POST /services/apply`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewApplication {
    #[serde(rename = "type")]
    pub certificate_type: String,
    pub form_data: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Notice board entry. Priority is `urgent | high | normal | low`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NoticeRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub publisher: Option<Publisher>,
}

impl NoticeRecord {
    /// Publication date, falling back to the creation date.
    pub fn display_date(&self) -> &str {
        self.published_at.as_deref().unwrap_or(&self.created_at)
    }
}

/// Registered property for the property-tax pages.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub property_number: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub assessed_value: Option<f64>,
    #[serde(default)]
    pub tax_due: Option<f64>,
    #[serde(default)]
    pub assessed_at: Option<String>,
}

/// Citizen complaint. The backend model is sparse; everything defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ComplaintRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Row from `/property-tax/payment-history`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub property_id: u64,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Counters for the dashboard cards. Both the citizen and admin endpoints
/// return a subset of these; absent counters render as zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub pending_applications: u64,
    #[serde(default)]
    pub approved_applications: u64,
    #[serde(default)]
    pub total_complaints: u64,
    #[serde(default)]
    pub open_complaints: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_properties: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_record_decodes_sparse_json() {
        let record: ApplicationRecord =
            serde_json::from_str(r#"{"id":3,"type":"birth"}"#).expect("decode");
        assert_eq!(record.certificate_type, "birth");
        assert_eq!(record.status, "");
        assert!(record.applicant.is_none());
    }

    #[test]
    fn new_application_serializes_type_field() {
        let mut form_data = BTreeMap::new();
        form_data.insert("full_name".to_string(), "Asha Patil".to_string());
        let payload = NewApplication {
            certificate_type: "birth".into(),
            form_data,
        };
        let json = serde_json::to_string(&payload).expect("encode");
        assert!(json.contains(r#""type":"birth""#));
        assert!(json.contains(r#""full_name":"Asha Patil""#));
    }

    #[test]
    fn notice_display_date_prefers_published_at() {
        let notice = NoticeRecord {
            published_at: Some("2025-06-01".into()),
            created_at: "2025-05-28".into(),
            ..NoticeRecord::default()
        };
        assert_eq!(notice.display_date(), "2025-06-01");

        let unpublished = NoticeRecord {
            created_at: "2025-05-28".into(),
            ..NoticeRecord::default()
        };
        assert_eq!(unpublished.display_date(), "2025-05-28");
    }

    #[test]
    fn dashboard_stats_default_to_zero() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"total_applications":4}"#).expect("decode");
        assert_eq!(stats.total_applications, 4);
        assert_eq!(stats.open_complaints, 0);
    }
}
