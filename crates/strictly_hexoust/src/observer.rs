//! Change notification for presentation layers.

/// Notified once after every accepted move.
///
/// Carries no payload; observers re-query the engine for occupancy and turn
/// state. Through a [`SharedEngine`](crate::SharedEngine) they run after the
/// lock is released, so re-querying the same handle is safe. Closures
/// implement this trait directly.
pub trait BoardObserver: Send + Sync {
    /// Called after the board and turn state have been updated.
    fn on_board_updated(&self);
}

impl<F> BoardObserver for F
where
    F: Fn() + Send + Sync,
{
    fn on_board_updated(&self) {
        self()
    }
}
