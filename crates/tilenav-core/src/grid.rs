//! The [`TileGrid`] type — a rectangular field of blocked/walkable [`Tile`]s.
//!
//! The grid is authored by the caller (via [`TileGrid::set_blocked`] or
//! [`TileGrid::from_ascii`]) and is read-only from the point of view of the
//! search engine, which only performs bounds-checked lookups.

use crate::geom::Point;

/// A single cell of a [`TileGrid`]. Immutable once the grid is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// This tile's own 2D index within its grid.
    pub index: Point,
    /// Whether the tile blocks movement.
    pub blocked: bool,
}

/// A 2D grid of [`Tile`]s stored row-major: `tiles[y * width + x]` holds the
/// tile with index `(x, y)`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of the given tile-count extents with every tile walkable.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut tiles = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                tiles.push(Tile {
                    index: Point::new(x, y),
                    blocked: false,
                });
            }
        }
        Self {
            width: w,
            height: h,
            tiles,
        }
    }

    /// Build a grid from an ASCII map: `#` is blocked, anything else walkable.
    ///
    /// Rows are lines, the first line is y = 0. Width is taken from the
    /// longest line; shorter lines are padded with walkable tiles.
    ///
    /// ```
    /// use tilenav_core::TileGrid;
    ///
    /// let grid = TileGrid::from_ascii(
    ///     "...#.\n\
    ///      ...#.\n\
    ///      .....",
    /// );
    /// assert_eq!(grid.width(), 5);
    /// assert_eq!(grid.height(), 3);
    /// assert!(grid.tile(3, 1).unwrap().blocked);
    /// assert!(!grid.tile(3, 2).unwrap().blocked);
    /// ```
    pub fn from_ascii(map: &str) -> Self {
        let lines: Vec<&str> = map.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.set_blocked(Point::new(x as i32, y as i32), true);
                }
            }
        }
        grid
    }

    /// Tile-count extent along x.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Tile-count extent along y.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The tile at `(x, y)`, or `None` outside the grid.
    ///
    /// Also returns `None` if the computed linear index falls outside the
    /// stored tile list, even when `(x, y)` is within the declared extents.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || self.width <= x {
            return None;
        }
        if y < 0 || self.height <= y {
            return None;
        }
        self.tiles.get((y * self.width + x) as usize)
    }

    /// The tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn tile_at(&self, p: Point) -> Option<&Tile> {
        self.tile(p.x, p.y)
    }

    /// Set the blocked flag of the tile at `p`. Out-of-range points are
    /// ignored.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if p.x < 0 || self.width <= p.x || p.y < 0 || self.height <= p.y {
            return;
        }
        let idx = (p.y * self.width + p.x) as usize;
        if let Some(tile) = self.tiles.get_mut(idx) {
            tile.blocked = blocked;
        }
    }
}
