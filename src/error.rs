//! Error types for the entropy-oracle engine.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors produced by the generator engine.
///
/// The engine has no fatal failure modes: every refusal is representable
/// as data. The validator itself never errors (it returns a list of
/// [`ValidationError`]s); this type exists for the generation path, which
/// refuses to run when required fields failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Generation was refused because one or more parameters failed
    /// validation. Carries the full field-scoped report.
    #[error("invalid configuration: {}", format_errors(.0))]
    InvalidConfiguration(Vec<ValidationError>),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ParamField;

    #[test]
    fn test_display_joins_messages() {
        let err = EngineError::InvalidConfiguration(vec![
            ValidationError {
                field: ParamField::M,
                message: "Modulus (m) must be > 0.".into(),
            },
            ValidationError {
                field: ParamField::Seed,
                message: "LFSR seed cannot be 0.".into(),
            },
        ]);
        assert_eq!(
            format!("{}", err),
            "invalid configuration: Modulus (m) must be > 0.; LFSR seed cannot be 0."
        );
    }

    #[test]
    fn test_error_equality() {
        let a = EngineError::InvalidConfiguration(vec![]);
        let b = EngineError::InvalidConfiguration(vec![]);
        assert_eq!(a, b);
    }
}
