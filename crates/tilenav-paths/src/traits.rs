use tilenav_core::{Point, Tile, TileGrid};

/// Read-only tile lookup used by the search and simplification passes.
///
/// The engine never mutates a map; a single map may be shared by any number
/// of [`PathFinder`](crate::PathFinder) instances.
pub trait TileMap {
    /// Tile-count extents as `(width, height)`.
    fn size(&self) -> Point;

    /// The tile at `p`, or `None` outside the map.
    fn tile(&self, p: Point) -> Option<&Tile>;
}

impl TileMap for TileGrid {
    fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    fn tile(&self, p: Point) -> Option<&Tile> {
        self.tile_at(p)
    }
}
