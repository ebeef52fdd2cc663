//! Wire DTOs for the remote REST API and the persisted profile blob.
//!
//! DESIGN
//! ======
//! The remote schema is loose: optional fields are `#[serde(default)]` so a
//! sparse profile (e.g. `{"id":"2","role":"user"}`) still deserializes. Only
//! syntactically invalid JSON counts as a corrupt credential record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user profile as returned by the auth endpoints and persisted under the
/// `user` / `adminUser` storage keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier.
    pub id: String,
    /// Display name; may be absent in sparse server payloads.
    #[serde(default)]
    pub name: String,
    /// Contact email; may be absent in sparse server payloads.
    #[serde(default)]
    pub email: String,
    /// Role string; anything other than `"admin"` is a regular user.
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthUser {
    /// Whether this profile explicitly carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Response body of `POST /auth/signin` and `POST /auth/signup`.
///
/// A present `token` means success; `message` carries the inline error text
/// on failure (and is sometimes present on success too).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A catalog product as returned by `GET /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marketing description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Unit price in the shop currency.
    #[serde(default)]
    pub price: f64,
    /// Product image URL, if available.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Catalog category label, if assigned.
    #[serde(default)]
    pub category: Option<String>,
}

/// Format a price for display, e.g. `1299.5` -> `"$1299.50"`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
