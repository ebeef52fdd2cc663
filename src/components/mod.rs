//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog pieces while reading the
//! credential store and session bus from Leptos context providers. The
//! session-aware surfaces (`navbar`, `admin_shell`) and the route guards
//! each re-derive session state independently; there is no central owner.

pub mod admin_shell;
pub mod footer;
pub mod navbar;
pub mod product_card;
pub mod route_guard;
