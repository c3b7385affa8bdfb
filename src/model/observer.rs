use super::wall::Wall;

/// Reaction to a wall geometry change.
///
/// A wall does not know its owner. Whoever mutates wall geometry passes the
/// observer into the call, and every area assignment notifies it exactly
/// once, whether or not the value differs from before. Emission is
/// synchronous, on the caller's stack, and infallible by signature: a
/// reaction on a half-populated model is a no-op, not an error.
pub trait WallObserver {
    /// Called after `wall`'s area has been assigned.
    fn wall_area_changed(&mut self, wall: &mut Wall);
}
