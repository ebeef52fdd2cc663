//! Session-derived state shared by guards and session-aware components.
//!
//! ARCHITECTURE
//! ============
//! `session` derives an ephemeral snapshot from the credential store;
//! `guard` turns a snapshot into a synchronous allow/redirect decision.
//! Neither module caches: the store can change underneath a mounted surface
//! at any time, so every consumer re-derives on demand.

pub mod guard;
pub mod session;
