use sea_orm::DbErr;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Failure outcomes of every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("A user with the email address {0} already exists")]
    DuplicateEmail(String),

    #[error("Authentication Failed")]
    AuthenticationFailed,

    #[error("{0}")]
    NotFound(String),

    #[error("Forbidden")]
    Forbidden,

    /// The store accepted the write but handed nothing back.
    #[error("{0}")]
    NotCreated(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(format_validation_errors(&errors))
    }
}

/// Flattens (possibly nested) validation errors into one `"; "`-joined line.
///
/// Field errors without a custom message fall back to `"<field> is invalid"`.
/// Output is sorted so the same input always renders the same text.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.sort();
    messages.dedup();
    messages.join("; ")
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => out.extend(errs.iter().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })),
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_messages(inner, out);
                }
            }
        }
    }
}
