//! DTOs for the portal auth endpoints.
//!
//! DESIGN
//! ======
//! The user profile is treated as opaque: only `role` is typed, everything
//! else is kept as raw JSON in `fields` so any value shape decodes and a
//! profile written to storage reads back unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Email + password pair posted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Usually `"bearer"`; not inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Current user as returned by the `me` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The only field that drives behavior (landing route selection).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Every other field the backend sends, untyped.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Text value of `key`: strings as-is, numbers and booleans rendered.
    #[must_use]
    pub fn field_text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Name shown in the account bar: full name, else email, else `"Account"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = ["first_name", "last_name"]
            .into_iter()
            .filter_map(|key| self.field_text(key))
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.field_text("email").unwrap_or_else(|| "Account".to_owned())
    }
}
