//! Submit-time form checks shared by the section forms.
//!
//! Validation is intentionally shallow: required fields must be non-blank
//! and email addresses must contain `@`. Nothing else is checked.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Por favor, complete todos los campos obligatorios")]
    MissingRequired,
    #[error("Por favor, ingrese un email válido")]
    InvalidEmail,
    #[error("Complete los campos obligatorios para ver la vista previa")]
    PreviewIncomplete,
    #[error("{0}")]
    SaveFailed(&'static str),
}

/// Fail with [`FormError::MissingRequired`] if any value is blank.
///
/// # Errors
///
/// Returns [`FormError::MissingRequired`] when a value is empty after trimming.
pub fn require(values: &[&str]) -> Result<(), FormError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(FormError::MissingRequired);
    }
    Ok(())
}

/// The only email check the forms perform.
///
/// # Errors
///
/// Returns [`FormError::InvalidEmail`] when `email` has no `@`.
pub fn check_email(email: &str) -> Result<(), FormError> {
    if email.contains('@') { Ok(()) } else { Err(FormError::InvalidEmail) }
}

/// Empty or whitespace-only input becomes `None`.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(value.to_owned()) }
}
