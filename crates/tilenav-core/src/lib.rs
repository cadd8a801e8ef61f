//! **tilenav-core** — Tile-grid navigation for 2D games (core types).
//!
//! This crate provides the foundational types used by the *tilenav*
//! pathfinding layer: integer and floating-point geometry primitives and the
//! blocked-tile grid that the search engine queries.

pub mod geom;
pub mod grid;

pub use geom::{Point, Vec2};
pub use grid::{Tile, TileGrid};
