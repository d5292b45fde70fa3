/// Marker trait for UI state objects.
///
/// States are plain values: `Default` gives the initial screen and
/// `PartialEq` lets tests compare whole snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
