use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CredentialDialogState {
    #[default]
    Hidden,
    /// Waiting for the user to type a key.
    Prompting {
        input: String,
        error: Option<String>,
    },
    /// User tried to leave the prompt; asking whether to quit instead.
    ConfirmExit {
        /// Kept so "No" returns to what was typed.
        input: String,
    },
}

impl UiState for CredentialDialogState {}

impl CredentialDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Prompting { input, .. } | Self::ConfirmExit { input } => Some(input),
            Self::Hidden => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Prompting { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
