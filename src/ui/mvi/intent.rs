/// Marker trait for intent objects.
///
/// Intents cover user actions (typing, shortcuts) as well as system
/// events (animation ticks, completion outcomes).
pub trait Intent: Send + 'static {}
