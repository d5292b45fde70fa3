//! Terminal front end: event loop, controller, reducers and widgets.

pub mod app;
pub mod credential;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod session;
pub mod terminal_guard;
pub mod theme;
