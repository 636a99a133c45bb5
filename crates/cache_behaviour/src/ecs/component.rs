//! Component trait and implementations

/// Marker trait for components
///
/// Anything attached to an entity must implement this. The `Send + Sync`
/// bounds let worlds move between threads across update boundaries; within
/// an update, access is single-threaded.
pub trait Component: 'static + Send + Sync {}
