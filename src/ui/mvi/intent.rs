/// Marker trait for intents.
///
/// An intent is a decoded cause of change: a host message that survived
/// routing, a key press that resolved to an action, or a reveal step.
pub trait Intent: Send + 'static {}
