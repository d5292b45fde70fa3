use crate::prompt::Mode;
use crate::ui::mvi::Intent;

use super::state::Notice;

/// Intents that can be dispatched to the formula form.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    SelectMode(Mode),
    ToggleMode,

    InsertChar(char),
    /// Pasted text, inserted verbatim.
    InsertText(String),
    DeleteBackward,
    ClearInput,
    ClearOutput,

    /// A request was handed to the mediator (Idle → Busy).
    Submitted,
    /// Animation timer fired.
    Tick,
    /// The request tagged `generation` returned text (Busy → Idle).
    Completed { generation: u64, text: String },
    /// The request tagged `generation` failed (Busy → Idle).
    Failed { generation: u64, message: String },

    ShowNotice(Notice),
    DismissNotice,
    SetStatus(String),

    /// Replace the input with an example requirement.
    RandomTask { task: String },
    /// "Start Fresh": clear everything and return to the defaults.
    Reset,

    /// Scroll the output by a signed number of lines.
    ScrollOutput(i32),
}

impl Intent for SessionIntent {}
