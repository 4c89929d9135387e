use serde::Serialize;

use crate::project::{AduType, ProjectSelection};

pub const MIN_SQUARE_FOOTAGE: f64 = 200.0;
pub const MAX_SQUARE_FOOTAGE: f64 = 1200.0;

/// Bathroom counts the intake form offers.
const BATHROOM_STEPS: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];

/// One form-field problem, suitable for display next to the field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Check a submitted selection against the intake bounds.
///
/// Returns every problem at once so the form can annotate all offending
/// fields in a single pass. Downstream pricing assumes these bounds hold.
pub fn validate_selection(selection: &ProjectSelection) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !(MIN_SQUARE_FOOTAGE..=MAX_SQUARE_FOOTAGE).contains(&selection.square_footage) {
        errors.push(FieldError::new(
            "squareFootage",
            format!(
                "Square footage must be between {} and {}",
                MIN_SQUARE_FOOTAGE, MAX_SQUARE_FOOTAGE
            ),
        ));
    }

    if !BATHROOM_STEPS.contains(&selection.bathrooms) {
        errors.push(FieldError::new(
            "bathrooms",
            "Bathroom count must be 1, 1.5, 2, 2.5 or 3",
        ));
    }

    // The price book can quote a JADU, but the intake form does not offer one.
    if selection.adu_type == AduType::Jadu {
        errors.push(FieldError::new(
            "aduType",
            "Junior ADU projects are not quoted through the intake form",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{HvacSystem, UtilitySelections};

    fn selection(square_footage: f64, bathrooms: f64) -> ProjectSelection {
        ProjectSelection {
            adu_type: AduType::Detached1Story,
            square_footage,
            bedrooms: 1,
            bathrooms,
            hvac_system: HvacSystem::CentralAc,
            utilities: UtilitySelections::default(),
            add_ons: Vec::new(),
            needs_design: false,
            friends_and_family_discount: false,
        }
    }

    #[test]
    fn test_valid_selection_passes() {
        assert!(validate_selection(&selection(600.0, 2.0)).is_ok());
        assert!(validate_selection(&selection(200.0, 1.0)).is_ok());
        assert!(validate_selection(&selection(1200.0, 3.0)).is_ok());
    }

    #[test]
    fn test_square_footage_bounds() {
        let errors = validate_selection(&selection(150.0, 1.0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "squareFootage");

        let errors = validate_selection(&selection(1500.0, 1.0)).unwrap_err();
        assert_eq!(errors[0].field, "squareFootage");
    }

    #[test]
    fn test_bathroom_steps() {
        let errors = validate_selection(&selection(600.0, 1.75)).unwrap_err();
        assert_eq!(errors[0].field, "bathrooms");

        let errors = validate_selection(&selection(600.0, 4.0)).unwrap_err();
        assert_eq!(errors[0].field, "bathrooms");
    }

    #[test]
    fn test_jadu_rejected_at_the_form() {
        let mut s = selection(600.0, 1.0);
        s.adu_type = AduType::Jadu;
        let errors = validate_selection(&s).unwrap_err();
        assert_eq!(errors[0].field, "aduType");
    }

    #[test]
    fn test_all_problems_reported_together() {
        let mut s = selection(100.0, 0.5);
        s.adu_type = AduType::Jadu;
        let errors = validate_selection(&s).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
