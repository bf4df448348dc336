//! HTTP bridge to the Gram Panchayat REST backend.
//!
//! One generic JSON call over browser fetch, plus a thin async function per
//! endpoint. Every failure collapses into [`ApiError`] with a message fit for
//! an inline banner; transport errors and server-reported errors look the
//! same to the view layer.

use crate::storage;
use portal_types::{
    ApiEnvelope, ApplicationRecord, ComplaintRecord, DashboardStats, Identity, LoginResponse,
    NewApplication, NoticeRecord, PaymentRecord, ProfileUpdate, PropertyRecord, RegisterRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const API_BASE: &str = "/api";
const TRANSPORT_MESSAGE: &str = "Unable to reach the server. Please try again.";
const FAILURE_FALLBACK: &str = "Request failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Bad credentials or an expired session (401/403).
    #[error("{0}")]
    Auth(String),
    /// The server rejected field values (400/422).
    #[error("{0}")]
    Validation(String),
    /// The server was unreachable or the response never arrived.
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Auth(m)
            | ApiError::Validation(m)
            | ApiError::Transport(m)
            | ApiError::Unknown(m) => m,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }

    fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth(message),
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Unknown(message),
        }
    }
}

fn transport(context: &str) -> ApiError {
    ApiError::Transport(format!("{TRANSPORT_MESSAGE} ({context})"))
}

async fn call<R: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<ApiEnvelope<R>, ApiError> {
    let window = web_sys::window().ok_or_else(|| transport("no window"))?;

    let init = web_sys::RequestInit::new();
    init.set_method(method);
    let headers = web_sys::Headers::new().map_err(|_| transport("headers"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| transport("headers"))?;
    if let Some(token) = storage::auth_token() {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|_| transport("headers"))?;
    }
    init.set_headers(&headers);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = web_sys::Request::new_with_str_and_init(&format!("{API_BASE}{path}"), &init)
        .map_err(|_| transport("request"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Transport(TRANSPORT_MESSAGE.to_string()))?;
    let response: web_sys::Response = response.dyn_into().map_err(|_| transport("response"))?;
    let status = response.status();

    let json = JsFuture::from(response.json().map_err(|_| transport("body"))?)
        .await
        .map_err(|_| transport("body"))?;

    match serde_wasm_bindgen::from_value::<ApiEnvelope<R>>(json) {
        Ok(envelope) => {
            if status >= 400 || !envelope.success {
                let message = envelope
                    .failure_message()
                    .unwrap_or_else(|| FAILURE_FALLBACK.to_string());
                Err(ApiError::from_status(status, message))
            } else {
                Ok(envelope)
            }
        }
        // A proxy or crash page may hand back something that is not the
        // envelope at all; keep the status mapping if it was an error.
        Err(_) if status >= 400 => {
            Err(ApiError::from_status(status, FAILURE_FALLBACK.to_string()))
        }
        Err(err) => Err(ApiError::Unknown(format!("malformed response: {err}"))),
    }
}

fn data_of<R>(envelope: ApiEnvelope<R>) -> Result<R, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Unknown("empty response from server".to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Unknown(err.to_string()))
}

async fn get<R: DeserializeOwned>(path: &str) -> Result<R, ApiError> {
    data_of(call::<R>("GET", path, None).await?)
}

async fn post<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, ApiError> {
    data_of(call::<R>("POST", path, Some(encode(body)?)).await?)
}

async fn put<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, ApiError> {
    data_of(call::<R>("PUT", path, Some(encode(body)?)).await?)
}

/// POST where only the envelope's message matters (no data payload).
async fn post_for_message<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let envelope = call::<serde_json::Value>("POST", path, Some(encode(body)?)).await?;
    Ok(envelope.message)
}

pub mod auth {
    use super::*;

    pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        post(
            "/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn register(request: &RegisterRequest) -> Result<Identity, ApiError> {
        post("/auth/register", request).await
    }

    pub async fn forgot_password(email: &str) -> Result<String, ApiError> {
        post_for_message("/auth/forgot-password", &serde_json::json!({ "email": email })).await
    }

    pub async fn profile() -> Result<Identity, ApiError> {
        get("/auth/profile").await
    }

    pub async fn update_profile(update: &ProfileUpdate) -> Result<Identity, ApiError> {
        put("/auth/profile", update).await
    }
}

pub mod applications {
    use super::*;

    pub async fn create(application: &NewApplication) -> Result<ApplicationRecord, ApiError> {
        post("/services/apply", application).await
    }

    pub async fn mine() -> Result<Vec<ApplicationRecord>, ApiError> {
        get("/services/my-applications").await
    }

    /// Full list, admin only.
    pub async fn all() -> Result<Vec<ApplicationRecord>, ApiError> {
        get("/services/applications").await
    }

    pub async fn update_status(id: u64, status: &str) -> Result<ApplicationRecord, ApiError> {
        put(
            &format!("/admin/applications/{id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }
}

pub mod notices {
    use super::*;

    pub async fn list() -> Result<Vec<NoticeRecord>, ApiError> {
        get("/notices").await
    }
}

pub mod properties {
    use super::*;

    pub async fn list() -> Result<Vec<PropertyRecord>, ApiError> {
        get("/property-tax/properties").await
    }

    pub async fn payment_history() -> Result<Vec<PaymentRecord>, ApiError> {
        get("/property-tax/payment-history").await
    }
}

pub mod complaints {
    use super::*;

    pub async fn list() -> Result<Vec<ComplaintRecord>, ApiError> {
        get("/complaints").await
    }
}

pub mod admin {
    use super::*;

    pub async fn users() -> Result<Vec<Identity>, ApiError> {
        get("/admin/users").await
    }
}

pub mod dashboard {
    use super::*;

    pub async fn citizen() -> Result<DashboardStats, ApiError> {
        get("/dashboard/citizen").await
    }

    pub async fn admin() -> Result<DashboardStats, ApiError> {
        get("/dashboard/admin").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_the_error_taxonomy() {
        assert!(matches!(
            ApiError::from_status(401, "expired".into()),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(403, "forbidden".into()),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(422, "bad field".into()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Unknown(_)
        ));
    }

    #[test]
    fn message_passes_the_server_text_through_verbatim() {
        let err = ApiError::from_status(401, "invalid credentials".into());
        assert_eq!(err.message(), "invalid credentials");
        assert!(err.is_auth());
    }
}
