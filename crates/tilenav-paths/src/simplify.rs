//! Continuous-space pathfinding: world/tile conversion and greedy
//! string-pulling over the raw tile-center path.

use tilenav_core::{Point, Vec2};

use crate::collision::{Box2D, check_obb};
use crate::pathfinder::PathFinder;
use crate::traits::TileMap;

/// Index of the tile containing a world position.
#[inline]
fn index_at(origin: Vec2, tile_size: f32, pos: Vec2) -> Point {
    let rel = pos - origin;
    Point::new(
        (rel.x / tile_size).floor() as i32,
        (rel.y / tile_size).floor() as i32,
    )
}

/// World position of a tile's minimum corner.
#[inline]
fn corner_at(origin: Vec2, tile_size: f32, index: Point) -> Vec2 {
    origin + Vec2::new(tile_size * index.x as f32, tile_size * index.y as f32)
}

/// World position of a tile's center.
#[inline]
fn center_at(origin: Vec2, tile_size: f32, index: Point) -> Vec2 {
    corner_at(origin, tile_size, index) + Vec2::new(tile_size * 0.5, tile_size * 0.5)
}

impl PathFinder {
    /// Find a smoothed waypoint path between two world positions.
    ///
    /// `origin` is the world position of tile (0,0)'s minimum corner,
    /// `tile_size` the edge length of a tile and `radius` the agent's
    /// half-width, used to sweep a corridor between waypoints during
    /// simplification.
    ///
    /// The result starts at exactly `start` and ends at exactly `end`; tile
    /// centers only appear where a turn is required. When both positions
    /// fall on the same tile the search is skipped entirely and the single
    /// point `[end]` is returned. An empty result means no path exists.
    pub fn find_path_world<M: TileMap>(
        &mut self,
        origin: Vec2,
        tile_size: f32,
        map: &M,
        start: Vec2,
        end: Vec2,
        radius: f32,
    ) -> Vec<Vec2> {
        let start_index = index_at(origin, tile_size, start);
        let end_index = index_at(origin, tile_size, end);

        // Same tile: steer straight to the requested end position.
        if start_index == end_index {
            return vec![end];
        }

        let index_path = self.find_path(map, start_index, end_index);
        if index_path.is_empty() {
            return Vec::new();
        }

        // Tile centers, with the final point snapped to the exact target so
        // the path terminates precisely.
        let mut centers: Vec<Vec2> = index_path
            .iter()
            .map(|&index| center_at(origin, tile_size, index))
            .collect();
        if let Some(last) = centers.last_mut() {
            *last = end;
        }

        // Greedy string pulling: from each anchor, take the farthest point
        // whose swept corridor is free of blocked tiles. If even the
        // immediate next point is obstructed, take it anyway so the loop
        // always makes progress.
        let last = centers.len() - 1;
        let mut waypoints = Vec::with_capacity(centers.len() + 1);
        waypoints.push(start);

        let mut anchor = 0;
        while anchor != last {
            let mut advanced = false;

            for i in (anchor + 1..=last).rev() {
                if !self.corridor_blocked(origin, tile_size, map, centers[anchor], centers[i], radius)
                {
                    anchor = i;
                    waypoints.push(centers[i]);
                    advanced = true;
                    break;
                }
            }

            if !advanced {
                anchor += 1;
                waypoints.push(centers[anchor]);
            }
        }

        log::trace!(
            "simplified {} tile centers to {} waypoints",
            centers.len(),
            waypoints.len()
        );
        waypoints
    }

    /// Whether the corridor swept between `from` and `to` with the given
    /// half-width touches any blocked tile.
    ///
    /// Tests every tile in the index rectangle spanned by the two endpoints
    /// with the separating-axis check; tiles outside the map never block.
    fn corridor_blocked<M: TileMap>(
        &mut self,
        origin: Vec2,
        tile_size: f32,
        map: &M,
        from: Vec2,
        to: Vec2,
        radius: f32,
    ) -> bool {
        let swept = Box2D::from_segment(from, to, radius);
        self.observer.swept_box(&swept);

        let a = index_at(origin, tile_size, from);
        let b = index_at(origin, tile_size, to);
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

        for x in min_x..=max_x {
            for y in min_y..=max_y {
                let corner = corner_at(origin, tile_size, Point::new(x, y));
                let footprint = Box2D::from_corners(
                    corner,
                    corner + Vec2::new(tile_size, 0.0),
                    corner + Vec2::new(0.0, tile_size),
                    corner + Vec2::new(tile_size, tile_size),
                );
                self.observer.candidate_tile_box(&footprint);

                if check_obb(&swept, &footprint)
                    && map.tile(Point::new(x, y)).is_some_and(|tile| tile.blocked)
                {
                    return true;
                }
            }
        }
        false
    }
}
