//! Formula form: mode, input, output and the Idle/Busy request cycle.
//!
//! Uses the MVI pattern:
//! - `state.rs` - form state and busy indicator
//! - `intent.rs` - user and system actions
//! - `reducer.rs` - state transitions
//! - `validation.rs` - submit preconditions
//! - `tasks.rs` - example requirements for "Random Task"

mod intent;
mod reducer;
mod state;
mod tasks;
mod validation;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{BusyIndicator, Notice, NoticeLevel, SessionState};
pub use tasks::{random_task, EXAMPLE_TASKS};
pub use validation::{validate_submission, ValidationError};
