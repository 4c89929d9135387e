pub mod project;
pub mod validate;

pub use project::{AddOnService, AduType, HvacSystem, ProjectSelection, UtilityMode, UtilitySelections};
pub use validate::{validate_selection, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}
