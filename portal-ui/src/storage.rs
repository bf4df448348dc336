//! Session persistence. The bearer token and identity JSON live in
//! localStorage so a page reload keeps the session; an auth failure from any
//! backend call clears both. All operations degrade to no-ops when storage
//! is unavailable.

use portal_types::Identity;

const TOKEN_KEY: &str = "gp_token";
const IDENTITY_KEY: &str = "gp_identity";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// Browser APIs are unavailable off-target; persistence becomes a no-op.
#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

fn encode_identity(identity: &Identity) -> Option<String> {
    serde_json::to_string(identity).ok()
}

/// Rebuild the session pair from what a previous page load stored. A corrupt
/// identity blob yields no session rather than a half-restored one.
fn decode_session(token: String, identity_json: &str) -> Option<(String, Identity)> {
    let identity = serde_json::from_str(identity_json).ok()?;
    Some((token, identity))
}

pub fn save_session(token: &str, identity: &Identity) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, token);
    write_identity(&storage, identity);
}

/// Rewrite only the identity, keeping the stored token. Used after a
/// server-confirmed profile update.
pub fn save_identity(identity: &Identity) {
    if let Some(storage) = local_storage() {
        write_identity(&storage, identity);
    }
}

fn write_identity(storage: &web_sys::Storage, identity: &Identity) {
    if let Some(json) = encode_identity(identity) {
        let _ = storage.set_item(IDENTITY_KEY, &json);
    }
}

pub fn load_session() -> Option<(String, Identity)> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let json = storage.get_item(IDENTITY_KEY).ok().flatten()?;
    decode_session(token, &json)
}

pub fn auth_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(IDENTITY_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::Role;

    #[test]
    fn session_round_trips_through_identity_json() {
        let identity = Identity {
            id: 7,
            email: "asha@example.in".into(),
            first_name: "Asha".into(),
            last_name: "Patil".into(),
            role: Role::Admin,
            phone_number: Some("9876543210".into()),
            ..Identity::default()
        };
        let json = encode_identity(&identity).expect("encode");
        let (token, restored) = decode_session("tok-1".into(), &json).expect("decode");
        assert_eq!(token, "tok-1");
        assert_eq!(restored, identity);
    }

    #[test]
    fn corrupt_identity_json_yields_no_session() {
        assert!(decode_session("tok-1".into(), "{not json").is_none());
        assert!(decode_session("tok-1".into(), "").is_none());
    }
}
