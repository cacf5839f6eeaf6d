//! Transient form field state for the auth and profile forms.
//!
//! DESIGN
//! ======
//! One plain struct per page, held in an `RwSignal` and mutated field-by-field
//! from input events. Values never outlive the page; views reset on switch or
//! successful submission.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Input values for whichever form is currently displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    /// Clear every field back to its initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
