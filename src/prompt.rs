//! Prompt templates for the two assistant modes.

use crate::completion::ChatMessage;

const GENERATE_SYSTEM_PROMPT: &str = "You are an Excel formula expert. When asked to generate a formula, provide ONLY the Excel formula without any explanation. The formula should be on a single line and start with '='.";

const EXPLAIN_SYSTEM_PROMPT: &str = "You are an Excel formula expert. Provide a detailed explanation of how the given Excel formula works, breaking down each component and function used.";

/// What the assistant is asked to do with the user's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Turn a plain-language requirement into a formula.
    #[default]
    GenerateFormula,
    /// Break an existing formula down into its parts.
    ExplainFormula,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::GenerateFormula, Mode::ExplainFormula];

    pub fn label(self) -> &'static str {
        match self {
            Mode::GenerateFormula => "Generate Formula",
            Mode::ExplainFormula => "Explain Formula",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::GenerateFormula => Mode::ExplainFormula,
            Mode::ExplainFormula => Mode::GenerateFormula,
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Mode::GenerateFormula => GENERATE_SYSTEM_PROMPT,
            Mode::ExplainFormula => EXPLAIN_SYSTEM_PROMPT,
        }
    }

    pub fn user_prompt(self, input: &str) -> String {
        match self {
            Mode::GenerateFormula => {
                format!("Generate a formula for the following requirement: {}", input)
            }
            Mode::ExplainFormula => format!("Explain how this formula works in detail: {}", input),
        }
    }
}

/// Build the system + user message pair for one submission.
pub fn build_messages(mode: Mode, input: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(mode.system_prompt()),
        ChatMessage::user(mode.user_prompt(input)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::Role;

    #[test]
    fn generate_is_default() {
        assert_eq!(Mode::default(), Mode::GenerateFormula);
    }

    #[test]
    fn toggle_cycles_between_modes() {
        assert_eq!(Mode::GenerateFormula.toggle(), Mode::ExplainFormula);
        assert_eq!(Mode::ExplainFormula.toggle(), Mode::GenerateFormula);
    }

    #[test]
    fn generate_messages_match_template() {
        let messages = build_messages(Mode::GenerateFormula, "Count unique values in a range");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, GENERATE_SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(
            messages[1].content,
            "Generate a formula for the following requirement: Count unique values in a range"
        );
    }

    #[test]
    fn explain_messages_match_template() {
        let messages = build_messages(Mode::ExplainFormula, "=SUM(A1:A3)");
        assert_eq!(messages[0].content, EXPLAIN_SYSTEM_PROMPT);
        assert_eq!(
            messages[1].content,
            "Explain how this formula works in detail: =SUM(A1:A3)"
        );
    }

    #[test]
    fn generate_prompt_demands_bare_formula() {
        let system = Mode::GenerateFormula.system_prompt();
        assert!(system.contains("ONLY the Excel formula"));
        assert!(system.contains("start with '='"));
    }
}
