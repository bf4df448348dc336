use serde::{Deserialize, Serialize};

/// Account role. The backend stores this as a free string with
/// `citizen` as the default; decoding folds anything unrecognised into
/// [`Role::Citizen`] so downstream role matches stay exhaustive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Citizen,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Admin => "admin",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            _ => Role::Citizen,
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

/// The authenticated user's profile as returned by the backend.
/// Created on login, replaced wholesale on profile update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub aadhar_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Single letter shown in the avatar circle. Falls back to the first
    /// letter of the email when the first name is empty.
    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .next()
            .or_else(|| self.email.chars().next())
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// Payload of `POST /api/auth/login` on success.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

/// Registration form payload for `POST /api/auth/register`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub aadhar_number: String,
    pub address: String,
    pub village: String,
    pub pincode: String,
}

impl RegisterRequest {
    /// Mirror of the backend's binding rules, so obvious rejects surface
    /// before the round-trip. The server remains the authority.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("A valid email address is required".into());
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters".into());
        }
        for (value, label) in [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.phone_number, "Phone number"),
            (&self.address, "Address"),
            (&self.village, "Village"),
            (&self.pincode, "Pincode"),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{label} is required"));
            }
        }
        if self.aadhar_number.len() != 12 || !self.aadhar_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err("Aadhar number must be 12 digits".into());
        }
        Ok(())
    }
}

/// Server-confirmed profile edit for `PUT /api/auth/profile`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "asha@example.in".into(),
            password: "secret1".into(),
            first_name: "Asha".into(),
            last_name: "Patil".into(),
            phone_number: "9876543210".into(),
            aadhar_number: "123456789012".into(),
            address: "12 Main Road".into(),
            village: "Shirwal".into(),
            pincode: "412801".into(),
        }
    }

    #[test]
    fn role_decoding_is_total() {
        let admin: Role = serde_json::from_str(r#""admin""#).expect("admin");
        let citizen: Role = serde_json::from_str(r#""citizen""#).expect("citizen");
        let unknown: Role = serde_json::from_str(r#""clerk""#).expect("unknown");
        assert_eq!(admin, Role::Admin);
        assert_eq!(citizen, Role::Citizen);
        assert_eq!(unknown, Role::Citizen);
    }

    #[test]
    fn role_round_trips_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&Role::Admin).expect("encode"), r#""admin""#);
    }

    #[test]
    fn identity_decodes_with_missing_optional_fields() {
        let identity: Identity =
            serde_json::from_str(r#"{"id":7,"email":"asha@example.in","role":"admin"}"#)
                .expect("decode");
        assert_eq!(identity.role, Role::Admin);
        assert!(identity.phone_number.is_none());
        assert_eq!(identity.initial(), "A");
    }

    #[test]
    fn initial_falls_back_to_email() {
        let identity = Identity {
            email: "kiran@example.in".into(),
            ..Identity::default()
        };
        assert_eq!(identity.initial(), "K");
    }

    #[test]
    fn registration_validation_accepts_complete_input() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn registration_validation_rejects_short_password() {
        let mut req = register_request();
        req.password = "abc".into();
        assert_eq!(
            req.validate().expect_err("short password"),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn registration_validation_rejects_bad_aadhar() {
        let mut req = register_request();
        req.aadhar_number = "12345".into();
        assert!(req.validate().is_err());
        req.aadhar_number = "12345678901a".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn registration_validation_rejects_blank_required_field() {
        let mut req = register_request();
        req.village = "  ".into();
        assert_eq!(req.validate().expect_err("blank village"), "Village is required");
    }
}
