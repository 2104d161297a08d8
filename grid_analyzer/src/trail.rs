use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::Error,
    map::Map,
    position::{Direction, Position},
};

pub const TRAILHEAD_HEIGHT: u8 = 0;
pub const SUMMIT_HEIGHT: u8 = 9;

/// Height map of single-digit tiles.
#[derive(Debug, Clone)]
pub struct TopoMap {
    heights: Map<u8>,
}

impl TopoMap {
    pub fn new(heights: Map<u8>) -> Self {
        Self { heights }
    }

    pub fn parse_tile(pos: &Position, c: char) -> Result<u8, Error> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or(Error::InvalidChar(c, pos.clone()))
    }

    pub fn trailheads(&self) -> Vec<Position> {
        let trailheads = self
            .heights
            .iter()
            .filter(|(_, height)| **height == TRAILHEAD_HEIGHT)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        debug!(trailhead_n = trailheads.len(), "found trailheads");

        trailheads
    }

    /// Number of distinct summits reachable from `pos`.
    pub fn score_from(&self, pos: &Position) -> usize {
        self.summit_paths_from(pos).len()
    }

    /// Number of distinct uphill paths from `pos` to any summit.
    pub fn rating_from(&self, pos: &Position) -> usize {
        self.summit_paths_from(pos).values().sum()
    }

    pub fn score_sum(&self) -> usize {
        self.trailheads().iter().map(|pos| self.score_from(pos)).sum()
    }

    pub fn rating_sum(&self) -> usize {
        self.trailheads().iter().map(|pos| self.rating_from(pos)).sum()
    }

    // Climb one height level at a time, carrying how many distinct paths end
    // at each position of the current level. Returns path counts per summit.
    fn summit_paths_from(&self, pos: &Position) -> HashMap<Position, usize> {
        if self.heights.tile(pos) != Some(&TRAILHEAD_HEIGHT) {
            return HashMap::new();
        }

        let mut level_paths = HashMap::from([(pos.clone(), 1usize)]);
        for next_height in (TRAILHEAD_HEIGHT + 1)..=SUMMIT_HEIGHT {
            let mut next_paths = HashMap::<Position, usize>::new();
            for (cur_pos, path_n) in &level_paths {
                for dir in Direction::all_dirs().iter().copied() {
                    let Some(neighbor) = self.heights.neighbor(cur_pos, dir) else {
                        continue;
                    };
                    if self.heights.tile(&neighbor) == Some(&next_height) {
                        *next_paths.entry(neighbor).or_insert(0) += *path_n;
                    }
                }
            }

            if next_paths.is_empty() {
                return HashMap::new();
            }
            level_paths = next_paths;
        }

        level_paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parse_map;

    fn topo_map(text: &str) -> TopoMap {
        TopoMap::new(parse_map(text, TopoMap::parse_tile).unwrap())
    }

    const SAMPLE: &str = "89010123\n\
                          78121874\n\
                          87430965\n\
                          96549874\n\
                          45678903\n\
                          32019012\n\
                          01329801\n\
                          10456732";

    #[test]
    fn sample_scores_and_ratings() {
        let map = topo_map(SAMPLE);
        assert_eq!(map.trailheads().len(), 9);
        assert_eq!(map.score_sum(), 36);
        assert_eq!(map.rating_sum(), 81);
    }

    #[test]
    fn first_sample_trailhead() {
        let map = topo_map(SAMPLE);
        let first = Position::new(0, 2);
        assert_eq!(map.score_from(&first), 5);
        assert_eq!(map.rating_from(&first), 20);
    }

    #[test]
    fn two_directions_reach_two_summits() {
        let map = topo_map("9876543210123456789");
        let start = Position::new(0, 9);
        assert_eq!(map.score_from(&start), 2);
        assert_eq!(map.rating_from(&start), 2);
    }

    #[test]
    fn two_routes_to_one_summit() {
        let map = topo_map(
            "012345\n\
             100006\n\
             200007\n\
             300008\n\
             456789",
        );
        let start = Position::new(0, 0);
        assert_eq!(map.score_from(&start), 1);
        assert_eq!(map.rating_from(&start), 2);
    }

    #[test]
    fn non_trailhead_scores_nothing() {
        let map = topo_map("0123456789");
        assert_eq!(map.score_from(&Position::new(0, 1)), 0);
        assert_eq!(map.rating_from(&Position::new(0, 1)), 0);
        assert_eq!(map.score_from(&Position::new(3, 3)), 0);
        assert_eq!(map.score_from(&Position::new(0, 0)), 1);
    }

    #[test]
    fn dead_end_trail_scores_nothing() {
        let map = topo_map("01234567\n00000000");
        assert_eq!(map.score_sum(), 0);
        assert_eq!(map.rating_sum(), 0);
    }

    #[test]
    fn rejects_non_digit_tiles() {
        let err = parse_map("01\n.2", TopoMap::parse_tile).unwrap_err();
        assert!(matches!(err, Error::InvalidChar('.', ref pos) if *pos == Position::new(1, 0)));
    }
}
