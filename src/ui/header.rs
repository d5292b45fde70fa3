use crate::prompt::Mode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PLACEHOLDER, PRIMARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Excel Formula Assistant";

/// Title bar with the mode selector.
pub struct Header {
    mode: Mode,
}

impl Header {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(TITLE, Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
        ];
        spans.extend(mode_spans(self.mode));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Radio-style selector, one entry per mode.
fn mode_spans(active: Mode) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (index, mode) in Mode::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        let (marker, style) = if *mode == active {
            (
                "(●) ",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )
        } else {
            ("( ) ", Style::default().fg(PLACEHOLDER))
        };
        spans.push(Span::styled(marker, style));
        spans.push(Span::styled(mode.label(), style));
    }
    spans
}
