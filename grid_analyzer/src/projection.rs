use std::{
    collections::{BTreeMap, HashSet},
    iter,
};

use tracing::debug;

use crate::{error::Error, map::Map, position::Position};

/// How far antinodes reach along the line through two antennas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// One step past the second antenna.
    Bounded,
    /// Every step from the second antenna on, the antenna itself included,
    /// until the map edge.
    Unbounded,
}

/// Antenna positions grouped by frequency.
#[derive(Debug, Clone)]
pub struct Antennas {
    signals: BTreeMap<char, Vec<Position>>,
    area: Map<()>,
}

impl Antennas {
    pub const EMPTY: char = '.';

    /// Tile parser for signal maps: `.` is empty, letters and digits are antennas.
    pub fn parse_tile(pos: &Position, c: char) -> Result<Option<char>, Error> {
        match c {
            Self::EMPTY => Ok(None),
            c if c.is_ascii_alphanumeric() => Ok(Some(c)),
            other => Err(Error::InvalidChar(other, pos.clone())),
        }
    }

    pub fn from_map(map: &Map<Option<char>>) -> Self {
        let mut signals = BTreeMap::new();
        for (pos, tile) in map.iter() {
            if let Some(frequency) = tile {
                signals
                    .entry(*frequency)
                    .or_insert_with(Vec::new)
                    .push(pos);
            }
        }

        Self {
            signals,
            area: map.map_tiles(|_| ()),
        }
    }

    pub fn positions_of(&self, frequency: char) -> &[Position] {
        self.signals
            .get(&frequency)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
    }

    pub fn frequency_n(&self) -> usize {
        self.signals.len()
    }

    /// Collect antinodes of every ordered pair of same-frequency antennas.
    pub fn antinode_positions(&self, projection: Projection) -> HashSet<Position> {
        let mut res_positions = HashSet::new();
        for positions in self.signals.values() {
            for from in positions {
                for to in positions {
                    self.project(from, to, projection, &mut res_positions);
                }
            }
        }
        debug!(
            antinode_n = res_positions.len(),
            ?projection,
            "collected antinodes"
        );

        res_positions
    }

    fn project(
        &self,
        from: &Position,
        to: &Position,
        projection: Projection,
        res_positions: &mut HashSet<Position>,
    ) {
        let offset = to - from;
        if offset.is_zero() {
            return;
        }

        let line = iter::successors(Some(to.clone()), |pos| pos + &offset)
            .take_while(|pos| self.area.is_inside(pos));
        match projection {
            Projection::Bounded => res_positions.extend(line.skip(1).take(1)),
            Projection::Unbounded => res_positions.extend(line),
        }
    }
}
