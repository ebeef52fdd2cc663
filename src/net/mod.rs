//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls (auth, catalog, contact) and `types` defines the
//! shared wire schema. The server is an opaque collaborator: it issues the
//! bearer token and owns role truth; the client only stores and displays.

pub mod api;
pub mod types;
