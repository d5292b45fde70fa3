use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{BusyIndicator, Notice, SessionState};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SelectMode(mode) => SessionState { mode, ..state },
            SessionIntent::ToggleMode => SessionState {
                mode: state.mode.toggle(),
                ..state
            },

            SessionIntent::InsertChar(ch) => {
                let mut input = state.input;
                input.push(ch);
                SessionState { input, ..state }
            }
            SessionIntent::InsertText(text) => {
                let mut input = state.input;
                input.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                SessionState { input, ..state }
            }
            SessionIntent::DeleteBackward => {
                let mut input = state.input;
                input.pop();
                SessionState { input, ..state }
            }
            SessionIntent::ClearInput => SessionState {
                input: String::new(),
                ..state
            },
            SessionIntent::ClearOutput => SessionState {
                output: String::new(),
                output_scroll: 0,
                ..state
            },

            SessionIntent::Submitted => {
                if !state.can_submit() {
                    return state;
                }
                let generation = state.generation.wrapping_add(1);
                SessionState {
                    busy: BusyIndicator::started(),
                    notice: None,
                    status: None,
                    generation,
                    in_flight: Some(generation),
                    ..state
                }
            }
            SessionIntent::Tick => SessionState {
                busy: state.busy.advance(),
                ..state
            },
            SessionIntent::Completed { generation, text } => {
                let state = settle(state, generation);
                if !awaits(&state, generation) {
                    return state;
                }
                SessionState {
                    output: text,
                    output_scroll: 0,
                    busy: BusyIndicator::default(),
                    ..state
                }
            }
            SessionIntent::Failed {
                generation,
                message,
            } => {
                let state = settle(state, generation);
                if !awaits(&state, generation) {
                    return state;
                }
                SessionState {
                    notice: Some(Notice::error(format!("An error occurred: {}", message))),
                    busy: BusyIndicator::default(),
                    ..state
                }
            }

            SessionIntent::ShowNotice(notice) => SessionState {
                notice: Some(notice),
                ..state
            },
            SessionIntent::DismissNotice => SessionState {
                notice: None,
                ..state
            },
            SessionIntent::SetStatus(status) => SessionState {
                status: Some(status),
                ..state
            },

            SessionIntent::RandomTask { task } => SessionState {
                input: task,
                mode: Default::default(),
                ..state
            },
            SessionIntent::Reset => SessionState {
                generation: state.generation.wrapping_add(1),
                in_flight: state.in_flight,
                ..SessionState::default()
            },

            SessionIntent::ScrollOutput(delta) => {
                let scroll = (i64::from(state.output_scroll) + i64::from(delta))
                    .clamp(0, i64::from(u16::MAX)) as u16;
                SessionState {
                    output_scroll: scroll,
                    ..state
                }
            }
        }
    }
}

/// The background request tagged `generation` has finished, whether or not
/// the form still cares about its result.
fn settle(state: SessionState, generation: u64) -> SessionState {
    if state.in_flight == Some(generation) {
        SessionState {
            in_flight: None,
            ..state
        }
    } else {
        state
    }
}

/// True when `generation` is the request the form is currently waiting on.
fn awaits(state: &SessionState, generation: u64) -> bool {
    state.busy.active && state.generation == generation
}
