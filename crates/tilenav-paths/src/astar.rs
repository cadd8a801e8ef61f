use std::collections::BinaryHeap;

use tilenav_core::Point;

use crate::distance::manhattan;
use crate::pathfinder::{ORTHO_MOVE_COST, OpenRef, PathFinder, move_cost};
use crate::traits::TileMap;

/// Heuristic cost estimate: Manhattan distance at orthogonal step cost.
#[inline]
fn heuristic(a: Point, b: Point) -> i32 {
    ORTHO_MOVE_COST * manhattan(a, b)
}

impl PathFinder {
    /// Compute a 4-connected shortest path from `start` to `goal` using A*.
    ///
    /// Returns the full index path including both endpoints. Failure is
    /// signalled by shape alone: the result is empty when either endpoint
    /// does not resolve to an existing tile or when no path exists. A
    /// rejected endpoint returns before the node arena is touched.
    pub fn find_path<M: TileMap>(&mut self, map: &M, start: Point, goal: Point) -> Vec<Point> {
        // Both endpoints must resolve to existing tiles.
        if map.tile(start).is_none() || map.tile(goal).is_none() {
            return Vec::new();
        }

        self.ensure_arena(map.size());

        // Bump generation to lazily invalidate nodes from earlier searches.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        let mut seq: u32 = 0;

        let start_idx = self.idx(start);
        let goal_idx = self.idx(goal);

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();

        // Initialise the start node: g = 0, so f collapses to the heuristic.
        {
            let node = &mut self.nodes[start_idx];
            node.reset(heuristic(start, goal), cur_gen);
            node.set_g(0);
            node.open = true;
            open.push(OpenRef {
                idx: start_idx,
                f: node.f,
                seq,
            });
            seq += 1;
        }

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a later cost improvement or left
            // over from an earlier search.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            // The goal is never expanded.
            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.nodes[ci].closed = true;
            let base_g = self.nodes[ci].g;
            let base_point = self.point(ci);

            for np in base_point.neighbors_4() {
                let Some(tile) = map.tile(np) else {
                    continue;
                };
                if tile.blocked {
                    continue;
                }

                let ni = self.idx(np);
                let h = heuristic(np, goal);
                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    n.reset(h, cur_gen);
                }

                // Once closed, a node is never reopened.
                if n.closed {
                    continue;
                }

                let tentative = base_g + move_cost(np - base_point);
                if tentative < n.g {
                    n.set_g(tentative);
                    n.parent = ci;
                    n.open = true;
                    open.push(OpenRef {
                        idx: ni,
                        f: n.f,
                        seq,
                    });
                    seq += 1;
                }
            }
        };

        if !found {
            log::trace!("astar {start} -> {goal}: no path");
            return Vec::new();
        }

        // Walk predecessor links backward from the goal, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        log::trace!("astar {start} -> {goal}: {} steps", path.len() - 1);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilenav_core::TileGrid;

    fn assert_valid_path(grid: &TileGrid, path: &[Point], start: Point, goal: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for p in path {
            assert!(!grid.tile_at(*p).unwrap().blocked, "path crosses {p}");
        }
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "non-adjacent step");
        }
    }

    #[test]
    fn open_grid_path_has_manhattan_length() {
        let grid = TileGrid::new(10, 10);
        let mut pf = PathFinder::new();
        let start = Point::new(1, 2);
        let goal = Point::new(7, 8);

        let path = pf.find_path(&grid, start, goal);
        assert_valid_path(&grid, &path, start, goal);
        assert_eq!(path.len() as i32, manhattan(start, goal) + 1);
    }

    #[test]
    fn path_detours_around_wall() {
        let grid = TileGrid::from_ascii(
            ".....\n\
             .....\n\
             ####.\n\
             .....\n\
             .....",
        );
        let start = Point::new(0, 0);
        let goal = Point::new(0, 4);
        let mut pf = PathFinder::new();

        let path = pf.find_path(&grid, start, goal);
        assert_valid_path(&grid, &path, start, goal);
        // Must swing right past the wall's open end: 4 across, 4 down,
        // 4 back, plus the endpoints' rows.
        assert!(path.len() as i32 > manhattan(start, goal) + 1);
    }

    #[test]
    fn enclosed_start_is_unreachable() {
        let grid = TileGrid::from_ascii(
            ".#...\n\
             #.#..\n\
             .#...\n\
             .....",
        );
        // (1, 1) is walled in on all four sides.
        let mut pf = PathFinder::new();
        let path = pf.find_path(&grid, Point::new(1, 1), Point::new(4, 3));
        assert!(path.is_empty());
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let mut grid = TileGrid::new(5, 5);
        let goal = Point::new(3, 3);
        grid.set_blocked(goal, true);
        let mut pf = PathFinder::new();
        // The goal tile exists but can never be entered.
        let path = pf.find_path(&grid, Point::new(0, 0), goal);
        assert!(path.is_empty());
    }

    #[test]
    fn out_of_range_endpoints_reject_without_arena_growth() {
        let grid = TileGrid::new(5, 5);
        let mut pf = PathFinder::new();

        assert!(pf.find_path(&grid, Point::new(-1, 0), Point::new(4, 4)).is_empty());
        assert!(pf.find_path(&grid, Point::new(0, 0), Point::new(5, 0)).is_empty());
        // Rejected calls never touched the arena.
        assert_eq!(pf.nodes.len(), 0);
        assert_eq!(pf.generation, 0);
    }

    #[test]
    fn same_start_and_goal_yields_single_point() {
        let grid = TileGrid::new(5, 5);
        let mut pf = PathFinder::new();
        let p = Point::new(2, 3);
        assert_eq!(pf.find_path(&grid, p, p), vec![p]);
    }

    #[test]
    fn goal_cost_matches_step_count() {
        let grid = TileGrid::from_ascii(
            "......\n\
             .####.\n\
             ......",
        );
        let start = Point::new(0, 1);
        let goal = Point::new(5, 1);
        let mut pf = PathFinder::new();

        let path = pf.find_path(&grid, start, goal);
        assert_valid_path(&grid, &path, start, goal);

        let goal_node = &pf.nodes[pf.idx(goal)];
        assert_eq!(goal_node.generation, pf.generation);
        assert_eq!(goal_node.g, (path.len() as i32 - 1) * ORTHO_MOVE_COST);
        assert_eq!(goal_node.f, goal_node.g + goal_node.h);
    }

    #[test]
    fn repeated_searches_are_idempotent() {
        let grid = TileGrid::from_ascii(
            ".......\n\
             ..###..\n\
             ..#....\n\
             .......",
        );
        let start = Point::new(0, 0);
        let goal = Point::new(6, 3);
        let mut pf = PathFinder::new();

        let first = pf.find_path(&grid, start, goal);
        let second = pf.find_path(&grid, start, goal);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn arena_is_conserved_across_searches() {
        let grid = TileGrid::new(8, 8);
        let mut pf = PathFinder::new();

        pf.find_path(&grid, Point::new(0, 0), Point::new(7, 7));
        let len = pf.nodes.len();
        assert_eq!(len, 64);

        pf.find_path(&grid, Point::new(7, 0), Point::new(0, 7));
        assert_eq!(pf.nodes.len(), len);

        // A failed search conserves the arena too.
        let mut sealed = TileGrid::new(8, 8);
        for y in 0..8 {
            sealed.set_blocked(Point::new(4, y), true);
        }
        assert!(pf.find_path(&sealed, Point::new(0, 0), Point::new(7, 0)).is_empty());
        assert_eq!(pf.nodes.len(), len);
    }

    #[test]
    fn finder_is_reusable_across_different_grids() {
        let mut pf = PathFinder::new();

        let big = TileGrid::new(12, 12);
        let path = pf.find_path(&big, Point::new(0, 0), Point::new(11, 11));
        assert_eq!(path.len() as i32, 23);

        // A smaller grid afterwards must not see stale state.
        let small = TileGrid::from_ascii(
            "...\n\
             ##.\n\
             ...",
        );
        let start = Point::new(0, 0);
        let goal = Point::new(0, 2);
        let path = pf.find_path(&small, start, goal);
        assert_valid_path(&small, &path, start, goal);
        assert_eq!(path.len(), 7);
    }
}
