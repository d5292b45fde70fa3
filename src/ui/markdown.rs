//! Markdown → styled ratatui lines for the output area.
//!
//! Explanations come back with headings, bullet lists and inline code; the
//! formula itself is often fenced. Everything else is shown as plain text.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{CODE_BG, HEADER_SEPARATOR, HEADER_TEXT, PLACEHOLDER, PRIMARY, STATUS_OK};

/// Convert markdown text to lines ready for a `Paragraph`.
pub fn markdown_to_lines(md: &str) -> Vec<Line<'static>> {
    let mut renderer = LineBuilder::default();
    for event in Parser::new(md) {
        renderer.handle(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// One entry per open list: next number for ordered lists.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
    quote_depth: usize,
}

impl LineBuilder {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush();
                self.styles.push(heading_style(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.styles.pop();
                self.flush();
            }

            Event::Start(Tag::Strong) => self.push_modifier(Modifier::BOLD),
            Event::Start(Tag::Emphasis) => self.push_modifier(Modifier::ITALIC),
            Event::Start(Tag::Strikethrough) => self.push_modifier(Modifier::CROSSED_OUT),
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough) => {
                self.styles.pop();
            }

            Event::Start(Tag::Link { .. }) => {
                let style = self
                    .current_style()
                    .fg(PRIMARY)
                    .add_modifier(Modifier::UNDERLINED);
                self.styles.push(style);
            }
            Event::End(TagEnd::Link) => {
                self.styles.pop();
            }

            Event::Code(code) => {
                self.spans.push(Span::styled(
                    code.into_string(),
                    Style::default().fg(STATUS_OK).bg(CODE_BG),
                ));
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.lines.push(Line::raw(""));
            }

            Event::Start(Tag::List(start)) => {
                self.flush();
                self.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.lines.push(Line::raw(""));
                }
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.spans
                    .push(Span::styled(marker, Style::default().fg(PRIMARY)));
            }
            Event::End(TagEnd::Item) => self.flush(),

            Event::Start(Tag::BlockQuote) => {
                self.flush();
                self.quote_depth += 1;
                let style = self.current_style().fg(PLACEHOLDER).add_modifier(Modifier::ITALIC);
                self.styles.push(style);
            }
            Event::End(TagEnd::BlockQuote) => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.styles.pop();
            }

            Event::End(TagEnd::Paragraph) => {
                self.flush();
                if self.lists.is_empty() {
                    self.lines.push(Line::raw(""));
                }
            }

            Event::Text(text) => {
                if self.in_code_block {
                    self.push_code_block(&text);
                } else {
                    let style = self.current_style();
                    self.spans.push(Span::styled(text.into_string(), style));
                }
            }
            Event::SoftBreak => self.spans.push(Span::raw(" ")),
            Event::HardBreak => self.flush(),

            Event::Rule => {
                self.flush();
                self.lines.push(Line::styled(
                    "─".repeat(40),
                    Style::default().fg(HEADER_SEPARATOR),
                ));
            }

            _ => {}
        }
    }

    fn push_code_block(&mut self, text: &str) {
        let style = Style::default().fg(STATUS_OK).bg(CODE_BG);
        for line in text.lines() {
            self.lines
                .push(Line::from(Span::styled(format!("  {line}  "), style)));
        }
    }

    fn push_modifier(&mut self, modifier: Modifier) {
        let style = self.current_style().add_modifier(modifier);
        self.styles.push(style);
    }

    fn current_style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(HEADER_TEXT))
    }

    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(HEADER_SEPARATOR),
            ));
        }
        spans.append(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 | HeadingLevel::H2 => style.fg(PRIMARY),
        _ => style.fg(HEADER_TEXT),
    }
}
