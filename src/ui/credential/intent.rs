use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the API key dialog.
#[derive(Debug, Clone)]
pub enum CredentialIntent {
    /// Show the prompt, optionally explaining why the key is needed again.
    Open { error: Option<String> },
    InsertChar(char),
    InsertText(String),
    DeleteBackward,
    /// The entered key could not be used.
    Rejected { message: String },
    /// The key was stored and a client built.
    Accepted,
    /// Esc: from the prompt, ask whether to exit; from the question, go back.
    Cancel,
    /// User answered "No" to the exit question.
    DeclineExit,
}

impl Intent for CredentialIntent {}
