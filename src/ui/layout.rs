use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub header: Rect,
    pub input: Rect,
    pub process: Rect,
    pub output: Rect,
    pub footer: Rect,
}

const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 7;
const PROCESS_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

pub fn form_regions(area: Rect) -> FormRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(PROCESS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    FormRegions {
        header: chunks[0],
        input: chunks[1],
        process: chunks[2],
        output: chunks[3],
        footer: chunks[4],
    }
}

/// Text area inside the bordered output block for a terminal of
/// `cols` x `rows`, as `(width, height)`.
pub fn output_viewport(cols: u16, rows: u16) -> (u16, u16) {
    let output = form_regions(Rect::new(0, 0, cols, rows)).output;
    (output.width.saturating_sub(2), output.height.saturating_sub(2))
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
