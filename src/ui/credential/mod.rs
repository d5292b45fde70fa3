//! API key prompt shown when no usable key is stored.
//!
//! Uses MVI pattern:
//! - `state.rs` - dialog state enum
//! - `intent.rs` - user actions
//! - `reducer.rs` - state transitions
//! - `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_credential_dialog;
pub use intent::CredentialIntent;
pub use reducer::CredentialReducer;
pub use state::CredentialDialogState;
