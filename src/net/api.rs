//! REST API helpers for the remote shop backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with user-facing message strings instead of
//! panics, so auth and catalog failures degrade to inline messages without
//! crashing the page. The credential store is never touched from here;
//! persisting a session is the caller's decision.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, Product};

#[cfg(any(test, feature = "csr"))]
fn catalog_failed_message(status: u16) -> String {
    format!("catalog request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn auth_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Sign in with email and password via `POST /api/auth/signin`.
///
/// A non-OK status still tries to surface the server's `message` so the form
/// can show "Invalid credentials" rather than a bare status code.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or is rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        auth_request("/api/auth/signin", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or is rejected.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        auth_request("/api/auth/signup", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, password);
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(feature = "csr")]
async fn auth_request(url: &str, payload: &serde_json::Value) -> Result<AuthResponse, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = resp.status();
    let body = resp.json::<AuthResponse>().await.ok();
    if resp.ok() {
        body.ok_or_else(|| auth_failed_message(status))
    } else {
        Err(body
            .and_then(|b| b.message)
            .unwrap_or_else(|| auth_failed_message(status)))
    }
}

/// Fetch the product catalog via `GET /api/products`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/products")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(catalog_failed_message(resp.status()));
        }
        resp.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Send a contact-form message via `POST /api/contact`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails.
pub async fn send_contact(name: &str, email: &str, message: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "message": message });
        let resp = gloo_net::http::Request::post("/api/contact")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(contact_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, message);
        Err("not available outside the browser".to_owned())
    }
}
