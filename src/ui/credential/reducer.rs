use crate::ui::mvi::Reducer;

use super::intent::CredentialIntent;
use super::state::CredentialDialogState;

pub struct CredentialReducer;

impl Reducer for CredentialReducer {
    type State = CredentialDialogState;
    type Intent = CredentialIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CredentialIntent::Open { error } => CredentialDialogState::Prompting {
                input: String::new(),
                error,
            },
            CredentialIntent::InsertChar(ch) => match state {
                CredentialDialogState::Prompting { mut input, .. } => {
                    input.push(ch);
                    CredentialDialogState::Prompting { input, error: None }
                }
                other => other,
            },
            CredentialIntent::InsertText(text) => match state {
                CredentialDialogState::Prompting { mut input, .. } => {
                    // Keys are single-line; drop anything a paste drags along.
                    input.extend(text.chars().filter(|c| !c.is_control()));
                    CredentialDialogState::Prompting { input, error: None }
                }
                other => other,
            },
            CredentialIntent::DeleteBackward => match state {
                CredentialDialogState::Prompting { mut input, error } => {
                    input.pop();
                    CredentialDialogState::Prompting { input, error }
                }
                other => other,
            },
            CredentialIntent::Rejected { message } => match state {
                CredentialDialogState::Prompting { input, .. } => CredentialDialogState::Prompting {
                    input,
                    error: Some(message),
                },
                other => other,
            },
            CredentialIntent::Accepted => CredentialDialogState::Hidden,
            CredentialIntent::Cancel => match state {
                CredentialDialogState::Prompting { input, .. } => {
                    CredentialDialogState::ConfirmExit { input }
                }
                CredentialDialogState::ConfirmExit { input } => {
                    CredentialDialogState::Prompting { input, error: None }
                }
                CredentialDialogState::Hidden => CredentialDialogState::Hidden,
            },
            CredentialIntent::DeclineExit => match state {
                CredentialDialogState::ConfirmExit { input } => {
                    CredentialDialogState::Prompting { input, error: None }
                }
                other => other,
            },
        }
    }
}
