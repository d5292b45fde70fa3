use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_TEXT, PLACEHOLDER, POPUP_BORDER, PRIMARY, STATUS_ERROR};

use super::state::CredentialDialogState;

const DIALOG_WIDTH: u16 = 64;

const KEYS_URL: &str = "https://platform.openai.com/api-keys";

/// Render the API key dialog overlay, if visible.
pub fn render_credential_dialog(frame: &mut Frame, state: &CredentialDialogState) {
    let (title, lines) = match state {
        CredentialDialogState::Hidden => return,
        CredentialDialogState::Prompting { input, error } => {
            (" OpenAI API Key Required ", prompt_lines(input, error.as_deref()))
        }
        CredentialDialogState::ConfirmExit { .. } => (" Exit Confirmation ", confirm_lines()),
    };

    let height = lines.len() as u16 + 2;
    let area = centered_rect(DIALOG_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn prompt_lines(input: &str, error: Option<&str>) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(""),
        Line::styled("  Please enter your OpenAI API Key:", text),
        Line::from(vec![
            Span::styled("  You can get it from: ", Style::default().fg(PLACEHOLDER)),
            Span::styled(KEYS_URL, Style::default().fg(PRIMARY)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(PRIMARY)),
            Span::styled(mask(input), text.add_modifier(Modifier::BOLD)),
            Span::styled("█", Style::default().fg(PRIMARY)),
        ]),
        Line::from(""),
    ];

    if let Some(error) = error {
        lines.push(Line::styled(
            format!("  {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
        lines.push(Line::from(""));
    }

    lines.push(Line::styled(
        "  Enter: Save   Esc: Cancel",
        Style::default().fg(PLACEHOLDER),
    ));
    lines
}

fn confirm_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled(
            "  The application requires an API key to function.",
            Style::default().fg(HEADER_TEXT),
        ),
        Line::styled("  Do you want to exit?", Style::default().fg(HEADER_TEXT)),
        Line::from(""),
        Line::styled("  y: Exit   n: Back", Style::default().fg(PLACEHOLDER)),
    ]
}

/// One bullet per typed character.
fn mask(input: &str) -> String {
    "•".repeat(input.chars().count())
}
