//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while building a cave.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaveError {
    /// The supplied layout is not a non-empty square of regions.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A constructor was called with a size or probability it cannot honour.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while reading run parameters from the console.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed while waiting for {expected}")]
    EndOfInput { expected: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SpeleoError {
    #[error(transparent)]
    Cave(#[from] CaveError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cave_error_messages_name_the_class() {
        let input = CaveError::InvalidInput("row 1 has 2 regions, expected 3".to_string());
        let argument = CaveError::InvalidArgument("cave size must be positive".to_string());

        assert_eq!(
            input.to_string(),
            "invalid input: row 1 has 2 regions, expected 3"
        );
        assert_eq!(
            argument.to_string(),
            "invalid argument: cave size must be positive"
        );
    }

    #[test]
    fn test_speleo_error_is_transparent_over_cave_error() {
        let err: SpeleoError = CaveError::InvalidArgument("x".to_string()).into();
        assert_eq!(err.to_string(), "invalid argument: x");
    }

    #[test]
    fn test_end_of_input_names_expected_value() {
        let err = PromptError::EndOfInput {
            expected: "sample size".to_string(),
        };
        assert_eq!(err.to_string(), "input closed while waiting for sample size");
    }
}
