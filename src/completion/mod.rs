//! Chat-completion client and the background request mediator.
//!
//! ```text
//! App ──dispatch──→ RequestMediator ──spawn──→ tokio task ──→ CompletionClient
//!  ↑                                                 │
//!  └──────────── CompletionOutcome (exactly once) ───┘
//! ```

mod client;
mod error;
mod mediator;
mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use error::CompletionError;
pub use mediator::{CompletionOutcome, RequestMediator};
pub use types::{ChatMessage, Role};
