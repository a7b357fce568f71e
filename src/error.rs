//! Error types for field construction and stepping

/// Errors raised by field construction, parameter updates and stepping.
///
/// Any error aborts the call that raised it. The field keeps its last
/// valid state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Unrecognized kernel family name.
    #[error(
        "Unrecognized weight kernel '{name}', options are: \
         dog (difference of gaussians), \
         doe (difference of exponentials), \
         dol (difference of linear functions), \
         step (step wise function), \
         optim_step (step wise function with a linear complexity)"
    )]
    Configuration { name: String },

    /// Input vector passed to `step` does not match the field size.
    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    /// Parameter vector passed to `set_params` has the wrong length.
    #[error(
        "Invalid parameter count: expected {expected} values \
         [dt_tau, h, Ae, ke, ki, si], got {actual}"
    )]
    InvalidParameterCount { expected: usize, actual: usize },

    /// A ring needs at least one unit.
    #[error("Field size must be > 0")]
    InvalidSize,
}

pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_lists_families() {
        let err = FieldError::Configuration {
            name: "unknown".into(),
        };
        let msg = err.to_string();
        for name in ["dog", "doe", "dol", "step", "optim_step"] {
            assert!(msg.contains(name), "missing '{}' in: {}", name, msg);
        }
        assert!(msg.contains("'unknown'"));
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = FieldError::InputSizeMismatch {
            expected: 10,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Input size mismatch: expected 10, got 3");
    }
}
