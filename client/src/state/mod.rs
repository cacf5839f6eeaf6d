//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the session holder shared via context; `form` is the transient
//! per-page input holder.

pub mod auth;
pub mod form;
