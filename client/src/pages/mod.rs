//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, submit spawns,
//! redirects) and delegates rendering details to `components`.

pub mod login;
pub mod profile;
pub mod signup;
