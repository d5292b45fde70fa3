use thiserror::Error;

use super::state::SessionState;

/// Reasons a submission is refused before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please set your OpenAI API key first!")]
    MissingCredential,

    #[error("Please provide input text!")]
    EmptyInput,
}

/// Check submit preconditions and return the trimmed input to send.
///
/// The credential is checked first, matching the order the user has to fix
/// things in.
pub fn validate_submission(
    state: &SessionState,
    has_credential: bool,
) -> Result<String, ValidationError> {
    if !has_credential {
        return Err(ValidationError::MissingCredential);
    }

    let input = state.input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_input(input: &str) -> SessionState {
        SessionState {
            input: input.to_string(),
            ..SessionState::default()
        }
    }

    #[test]
    fn trims_accepted_input() {
        assert_eq!(
            validate_submission(&with_input("  =A1+B1 \n"), true),
            Ok("=A1+B1".to_string())
        );
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(
            validate_submission(&with_input(" \n\t "), true),
            Err(ValidationError::EmptyInput)
        );
    }

    #[test]
    fn missing_credential_wins() {
        assert_eq!(
            validate_submission(&with_input(""), false),
            Err(ValidationError::MissingCredential)
        );
    }
}
