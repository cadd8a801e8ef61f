//! Debug observation hooks for path simplification.

use crate::collision::Box2D;

/// Receives the geometry built while simplifying a path, for visualization.
///
/// Both hooks are fire-and-forget: implementations cannot influence the
/// simplification result. All methods have no-op defaults.
pub trait PathObserver {
    /// Called once per swept corridor box built between two waypoints.
    fn swept_box(&mut self, _swept: &Box2D) {}

    /// Called once per candidate tile footprint tested against a corridor.
    fn candidate_tile_box(&mut self, _tile_box: &Box2D) {}
}

/// The default observer; ignores everything.
pub struct NoopObserver;

impl PathObserver for NoopObserver {}
