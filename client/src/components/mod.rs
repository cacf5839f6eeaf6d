//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and form controls while pages own the
//! submit orchestration and state wiring.

pub mod form_input;
pub mod layout;
