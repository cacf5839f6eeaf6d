//! Networking modules for the HTTP account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the shared wire schema.

pub mod api;
pub mod types;
