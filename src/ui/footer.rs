use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_WARN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Ctrl+S: Process │ Tab: Mode │ Ctrl+R: Random │ Ctrl+L/K: Clear │ Ctrl+N: Start Fresh │ Ctrl+Y/O: Copy │ Ctrl+Q: Quit";

/// Key hints, the last status message and the version.
pub struct Footer<'a> {
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a str>) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let status = self.status.map(|s| format!(" {} ", s)).unwrap_or_default();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing characters.
        let used = HINTS.chars().count() + status.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, Style::default().fg(STATUS_WARN)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
