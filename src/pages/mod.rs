//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form flow) and
//! delegates rendering details to `components`. Admin pages render inside
//! the `AdminShell` outlet and are reachable only through `AdminRoute`.

pub mod account;
pub mod admin_dashboard;
pub mod admin_products;
pub mod contact;
pub mod home;
pub mod products;
pub mod signin;
pub mod signup;
