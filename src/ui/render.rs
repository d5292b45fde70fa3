use crate::ui::app::App;
use crate::ui::credential::render_credential_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, form_regions};
use crate::ui::markdown::markdown_to_lines;
use crate::ui::session::{Notice, NoticeLevel, SessionState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER, POPUP_BORDER, PRIMARY,
    PRIMARY_DIM, SECONDARY, STATUS_ERROR, STATUS_WARN,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

const INPUT_PLACEHOLDER: &str = "Describe the formula you need, or paste a formula to explain...";
const OUTPUT_PLACEHOLDER: &str = "Results will appear here.";
const BUTTON_WIDTH: u16 = 24;
const NOTICE_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let session = app.session();
    let regions = form_regions(frame.area());

    frame.render_widget(Header::new(session.mode).widget(), regions.header);
    draw_input(frame, session, regions.input, !app.credential_dialog().is_visible());
    draw_process_row(frame, session, regions.process);
    draw_output(frame, session, regions.output);
    frame.render_widget(
        Footer::new(session.status.as_deref()).widget(regions.footer),
        regions.footer,
    );

    if let Some(notice) = &session.notice {
        draw_notice(frame, notice);
    }
    render_credential_dialog(frame, app.credential_dialog());
}

fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_input(frame: &mut Frame<'_>, session: &SessionState, area: Rect, focused: bool) {
    let block = titled_block("Input");
    let text = if session.input.is_empty() {
        let mut lines = vec![Line::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(PLACEHOLDER),
        )];
        if focused {
            lines.insert(0, Line::styled("█", Style::default().fg(PRIMARY)));
        }
        Text::from(lines)
    } else {
        let mut lines: Vec<Line<'static>> = session
            .input
            .split('\n')
            .map(|line| Line::styled(line.to_string(), Style::default().fg(HEADER_TEXT)))
            .collect();
        if focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("█", Style::default().fg(PRIMARY)));
            }
        }
        Text::from(lines)
    };

    // Keep the cursor line visible once input outgrows the box.
    let inner_height = area.height.saturating_sub(2);
    let overflow = (text.lines.len() as u16).saturating_sub(inner_height);

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((overflow, 0)),
        area,
    );
}

fn draw_process_row(frame: &mut Frame<'_>, session: &SessionState, area: Rect) {
    let [button_area, gauge_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BUTTON_WIDTH), Constraint::Min(1)])
        .areas(area);

    let waiting = !session.can_submit();
    let (label, style) = if waiting {
        (
            "Processing...",
            Style::default().fg(PLACEHOLDER).bg(SECONDARY),
        )
    } else {
        (
            "Process  (Ctrl+S)",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(
                Style::default().fg(if waiting { SECONDARY } else { PRIMARY_DIM }),
            )),
        button_area,
    );

    if session.is_busy() {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .gauge_style(Style::default().fg(PRIMARY).bg(ACTIVE_HIGHLIGHT))
            .percent(u16::from(session.busy.value));
        frame.render_widget(gauge, gauge_area);
    } else {
        frame.render_widget(Clear, gauge_area);
    }
}

fn draw_output(frame: &mut Frame<'_>, session: &SessionState, area: Rect) {
    let block = titled_block("Output");
    let lines = if session.output.is_empty() {
        vec![Line::styled(
            OUTPUT_PLACEHOLDER,
            Style::default().fg(PLACEHOLDER),
        )]
    } else {
        markdown_to_lines(&session.output)
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((session.output_scroll, 0)),
        area,
    );
}

fn draw_notice(frame: &mut Frame<'_>, notice: &Notice) {
    let accent = match notice.level {
        NoticeLevel::Warning => STATUS_WARN,
        NoticeLevel::Error => STATUS_ERROR,
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", notice.message),
            Style::default().fg(HEADER_TEXT),
        ),
        Line::from(""),
        Line::styled("  Enter/Esc: OK", Style::default().fg(PLACEHOLDER)),
    ];

    // Long error messages wrap; leave room for them.
    let inner_width = NOTICE_WIDTH.saturating_sub(4).max(1) as usize;
    let wrapped = notice.message.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = lines.len() as u16 + wrapped + 1;
    let area = centered_rect(NOTICE_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
