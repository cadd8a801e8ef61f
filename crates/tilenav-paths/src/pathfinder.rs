use tilenav_core::Point;

use crate::observer::{NoopObserver, PathObserver};

/// Cost of one orthogonal step between adjacent tiles.
pub const ORTHO_MOVE_COST: i32 = 10;

/// Cost of one diagonal step. Part of the move-cost table even though the
/// search expands cardinal neighbours only; see [`move_cost`].
pub const DIAG_MOVE_COST: i32 = 14;

/// Sentinel accumulated cost meaning "not yet reached from the start".
pub const UNREACHABLE: i32 = i32::MAX;

/// Move cost for a unit step between adjacent tiles.
///
/// The search itself is 4-directional, so only the orthogonal entry of the
/// table is ever reached from [`PathFinder::find_path`].
#[inline]
pub fn move_cost(step: Point) -> i32 {
    if step.x != 0 && step.y != 0 {
        DIAG_MOVE_COST
    } else {
        ORTHO_MOVE_COST
    }
}

// ---------------------------------------------------------------------------
// Internal search node
// ---------------------------------------------------------------------------

/// Per-tile search state, recycled across searches via generation stamps.
///
/// Predecessors are stored as flat indices into the owning arena, never as
/// references, so a stale link can only point at a node the next search will
/// overwrite before reading.
#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated cost from the start; [`UNREACHABLE`] until first improved.
    pub(crate) g: i32,
    /// Heuristic cost to the goal, fixed when the node is touched.
    pub(crate) h: i32,
    /// Total cost; kept equal to `g + h` by [`Node::set_g`].
    pub(crate) f: i32,
    /// Arena index of the predecessor, `usize::MAX` for none.
    pub(crate) parent: usize,
    /// Search generation this node's state belongs to.
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
            closed: false,
        }
    }
}

impl Node {
    /// Reset for a fresh search: no predecessor, `g` at the sentinel,
    /// `f = h`, neither open nor closed.
    pub(crate) fn reset(&mut self, h: i32, generation: u32) {
        self.g = UNREACHABLE;
        self.h = h;
        self.f = h;
        self.parent = usize::MAX;
        self.generation = generation;
        self.open = false;
        self.closed = false;
    }

    /// Update the accumulated cost, maintaining `f = g + h`.
    pub(crate) fn set_g(&mut self, g: i32) {
        self.g = g;
        self.f = g + self.h;
    }
}

/// Open-set entry ordered by total cost, then insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first.
        // Equal f: earliest insertion wins, for deterministic paths.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Pathfinding coordinator over blocked-tile maps.
///
/// Owns the node arena reused by every search, so repeated queries incur no
/// allocations once the arena covers the queried map. A `PathFinder` is not
/// shareable mid-search; both `find_path` methods take `&mut self`, which
/// makes concurrent use of one instance a compile error rather than a
/// runtime hazard. Maps themselves are read-only and freely shareable.
pub struct PathFinder {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) width: usize,
    pub(crate) observer: Box<dyn PathObserver>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a path finder with no observer attached.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            width: 0,
            observer: Box::new(NoopObserver),
        }
    }

    /// Create a path finder that reports debug geometry to `observer`.
    pub fn with_observer(observer: Box<dyn PathObserver>) -> Self {
        Self {
            observer,
            ..Self::new()
        }
    }

    /// Replace the debug observer.
    pub fn set_observer(&mut self, observer: Box<dyn PathObserver>) {
        self.observer = observer;
    }

    /// Ensure the node arena covers a map of the given tile-count extents.
    ///
    /// If the map fits within existing capacity only the row width is
    /// updated; the per-search generation bump invalidates stale entries.
    /// Otherwise the arena is reallocated and generations start over.
    pub(crate) fn ensure_arena(&mut self, size: Point) {
        self.width = size.x.max(0) as usize;
        let len = self.width * size.y.max(0) as usize;
        if len <= self.nodes.len() {
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
    }

    /// Convert an in-bounds point to a flat arena index.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Convert a flat arena index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
