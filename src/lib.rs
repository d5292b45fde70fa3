//! Terminal assistant that generates or explains Excel formulas by asking an
//! OpenAI-compatible chat-completion endpoint.

pub mod clipboard;
pub mod completion;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod ui;
