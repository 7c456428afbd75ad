/// Marker trait for state snapshots fed to the view.
///
/// `Default` is the reset baseline, `PartialEq` lets callers skip repaints.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
