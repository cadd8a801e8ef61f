//! Pathfinding and path simplification for tile-grid games.
//!
//! This crate computes movement paths across a uniform 2D grid of
//! blocked/walkable tiles and simplifies them into a minimal set of
//! collision-free waypoints for an agent with a physical radius:
//!
//! - **A\*** index-space search ([`PathFinder::find_path`]), 4-directional,
//!   Manhattan heuristic.
//! - **String pulling** in continuous space ([`PathFinder::find_path_world`]),
//!   which prunes the raw tile-center path using swept oriented-box collision
//!   tests ([`check_obb`]) against blocked tiles.
//!
//! [`PathFinder`] owns a recyclable node arena, so repeated searches incur no
//! allocations after warm-up. Grids are queried through the [`TileMap`] trait,
//! implemented out of the box for [`tilenav_core::TileGrid`].
//!
//! # Example
//!
//! ```
//! use tilenav_core::{Point, TileGrid};
//! use tilenav_paths::PathFinder;
//!
//! let grid = TileGrid::from_ascii(
//!     ".....\n\
//!      .###.\n\
//!      .....",
//! );
//! let mut finder = PathFinder::new();
//! let path = finder.find_path(&grid, Point::new(0, 1), Point::new(4, 1));
//! assert_eq!(path.first(), Some(&Point::new(0, 1)));
//! assert_eq!(path.last(), Some(&Point::new(4, 1)));
//! ```

mod astar;
mod collision;
mod distance;
mod observer;
mod pathfinder;
mod simplify;
mod traits;

pub use collision::{Box2D, check_obb};
pub use distance::manhattan;
pub use observer::{NoopObserver, PathObserver};
pub use pathfinder::{DIAG_MOVE_COST, ORTHO_MOVE_COST, PathFinder, UNREACHABLE, move_cost};
pub use traits::TileMap;
