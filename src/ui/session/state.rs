use crate::prompt::Mode;
use crate::ui::mvi::UiState;

/// Progress bar animation shown while a request is in flight.
///
/// The value carries no meaning beyond "still working".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusyIndicator {
    pub active: bool,
    /// 0..=100, advanced by [`BusyIndicator::STEP`] per tick.
    pub value: u8,
}

impl BusyIndicator {
    pub const STEP: u8 = 5;
    pub const MAX: u8 = 100;

    pub fn started() -> Self {
        Self {
            active: true,
            value: 0,
        }
    }

    /// Next animation frame; wraps to 0 after reaching 100.
    pub fn advance(self) -> Self {
        if !self.active {
            return self;
        }
        let value = if self.value >= Self::MAX {
            0
        } else {
            (self.value + Self::STEP).min(Self::MAX)
        };
        Self { value, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Submission refused before any network call.
    Warning,
    /// The request itself failed.
    Error,
}

/// Modal message shown on top of the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            NoticeLevel::Warning => "Warning",
            NoticeLevel::Error => "Error",
        }
    }
}

/// State of the formula form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub mode: Mode,
    pub input: String,
    /// Raw model output (markdown); rendered to styled lines by the view.
    pub output: String,
    pub busy: BusyIndicator,
    pub notice: Option<Notice>,
    /// One-line feedback in the footer (e.g. clipboard results).
    pub status: Option<String>,
    pub output_scroll: u16,
    /// Tag of the request whose outcome is awaited. Bumped by a reset so
    /// late results from before the reset are dropped.
    pub generation: u64,
    /// Generation of the request still running in the background, if any.
    /// Survives a reset: the form looks idle but no second request may start
    /// until this one has reported back.
    pub in_flight: Option<u64>,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_busy(&self) -> bool {
        self.busy.active
    }

    /// Submit is available only while idle and nothing is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.busy.active && self.in_flight.is_none()
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }
}
