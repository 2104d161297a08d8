use std::{collections::HashSet, fmt::Display};

use tracing::{debug, trace};

use crate::{
    error::Error,
    map::Map,
    position::{Direction, Position},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabTile {
    Open,
    Obstruction,
    Guard(Direction),
}

impl LabTile {
    pub fn parse_tile(pos: &Position, c: char) -> Result<LabTile, Error> {
        match c {
            '.' => Ok(LabTile::Open),
            '#' => Ok(LabTile::Obstruction),
            other => Direction::from_symbol(other)
                .map(LabTile::Guard)
                .ok_or(Error::InvalidChar(other, pos.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guard {
    pos: Position,
    dir: Direction,
}

impl Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.dir, self.pos)
    }
}

impl Guard {
    pub fn new(pos: &Position, dir: Direction) -> Self {
        Self {
            pos: pos.clone(),
            dir,
        }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    fn turn_right(&mut self) {
        self.dir = self.dir.turn_right();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolEnd {
    /// The guard walked off the map.
    Exited,
    /// The guard came back to a position with the same facing.
    Looped,
}

#[derive(Debug, Clone)]
pub struct PatrolRecord {
    end: PatrolEnd,
    steps: usize,
    visited: HashSet<Position>,
    states: HashSet<Guard>,
}

impl PatrolRecord {
    pub fn end(&self) -> PatrolEnd {
        self.end
    }

    pub fn is_loop(&self) -> bool {
        self.end == PatrolEnd::Looped
    }

    /// Turns and moves taken, the final move off the map included.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    /// Visited positions together with the facing held there.
    pub fn states(&self) -> &HashSet<Guard> {
        &self.states
    }
}

#[derive(Debug, Clone)]
pub struct Lab {
    obstructions: Map<bool>,
    guard: Guard,
}

impl Lab {
    pub fn new(obstructions: Map<bool>, guard: Guard) -> Result<Self, Error> {
        match obstructions.tile(guard.pos()) {
            None => Err(Error::GuardOutside(guard)),
            Some(true) => Err(Error::GuardOnObstruction(guard)),
            Some(false) => Ok(Self {
                obstructions,
                guard,
            }),
        }
    }

    pub fn from_tiles(tiles: &Map<LabTile>) -> Result<Self, Error> {
        let mut guard: Option<Guard> = None;
        for (pos, tile) in tiles.iter() {
            if let LabTile::Guard(dir) = tile {
                let this_guard = Guard::new(&pos, *dir);
                if let Some(first_guard) = guard.take() {
                    return Err(Error::MultipleGuards(first_guard, this_guard));
                }
                guard = Some(this_guard);
            }
        }

        let guard = guard.ok_or(Error::NoGuard)?;
        Self::new(
            tiles.map_tiles(|tile| *tile == LabTile::Obstruction),
            guard,
        )
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    pub fn patrol(&self) -> PatrolRecord {
        self.patrol_with(None)
    }

    /// Walk the guard until it leaves the map or repeats a state.
    ///
    /// `extra` is treated as one more obstruction for this walk only.
    pub fn patrol_with(&self, extra: Option<&Position>) -> PatrolRecord {
        let mut cur_guard = self.guard.clone();
        let mut visited = HashSet::from([cur_guard.pos().clone()]);
        let mut states = HashSet::from([cur_guard.clone()]);
        let mut steps = 0;
        let end = loop {
            steps += 1;
            let Some(ahead_pos) = self.obstructions.neighbor(cur_guard.pos(), cur_guard.dir())
            else {
                break PatrolEnd::Exited;
            };

            if self.is_blocked(&ahead_pos, extra) {
                cur_guard.turn_right();
            } else {
                visited.insert(ahead_pos.clone());
                cur_guard.pos = ahead_pos;
            }

            if !states.insert(cur_guard.clone()) {
                break PatrolEnd::Looped;
            }
        };

        PatrolRecord {
            end,
            steps,
            visited,
            states,
        }
    }

    /// Positions where one extra obstruction traps the guard in a loop.
    ///
    /// Only cells on the original route can change it, and the guard's own
    /// starting cell is excluded.
    pub fn loop_obstructions(&self) -> HashSet<Position> {
        let record = self.patrol();
        debug!(
            steps = record.steps(),
            visited_n = record.visited().len(),
            end = ?record.end(),
            "guard patrol finished"
        );

        let res_positions = record
            .visited()
            .iter()
            .filter(|pos| *pos != self.guard.pos())
            .filter(|pos| {
                let is_loop = self.patrol_with(Some(*pos)).is_loop();
                trace!(%pos, is_loop, "tried extra obstruction");
                is_loop
            })
            .cloned()
            .collect::<HashSet<_>>();
        debug!(
            loop_obstruction_n = res_positions.len(),
            "found loop obstructions"
        );

        res_positions
    }

    fn is_blocked(&self, pos: &Position, extra: Option<&Position>) -> bool {
        extra.is_some_and(|p| p == pos) || self.obstructions.tile(pos).is_some_and(|t| *t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parse_map;

    const SAMPLE: &str = "....#.....\n\
                          .........#\n\
                          ..........\n\
                          ..#.......\n\
                          .......#..\n\
                          ..........\n\
                          .#..^.....\n\
                          ........#.\n\
                          #.........\n\
                          ......#...";

    fn lab(text: &str) -> Result<Lab, Error> {
        Lab::from_tiles(&parse_map(text, LabTile::parse_tile)?)
    }

    #[test]
    fn sample_patrol() {
        let lab = lab(SAMPLE).unwrap();
        assert_eq!(lab.guard(), &Guard::new(&Position::new(6, 4), Direction::Up));

        let record = lab.patrol();
        assert_eq!(record.end(), PatrolEnd::Exited);
        assert_eq!(record.visited().len(), 41);
    }

    #[test]
    fn sample_loop_obstructions() {
        let lab = lab(SAMPLE).unwrap();
        assert_eq!(
            lab.loop_obstructions(),
            HashSet::from([
                Position::new(6, 3),
                Position::new(7, 6),
                Position::new(7, 7),
                Position::new(8, 1),
                Position::new(8, 3),
                Position::new(9, 7),
            ])
        );
        // The overlay never leaks into the lab itself.
        assert_eq!(lab.patrol().visited().len(), 41);
    }

    #[test]
    fn open_floor_walk_leaves_after_crossing() {
        let floor = Map::from_fn(5, 5, |_| false);
        let lab = Lab::new(floor, Guard::new(&Position::new(0, 0), Direction::Right)).unwrap();
        let record = lab.patrol();
        assert_eq!(record.end(), PatrolEnd::Exited);
        assert_eq!(record.steps(), 5);
        assert_eq!(record.visited().len(), 5);
        assert!(record
            .states()
            .iter()
            .all(|guard| guard.dir() == Direction::Right));
    }

    #[test]
    fn turning_does_not_move() {
        let lab = lab(".#.\n.^#\n...").unwrap();
        let record = lab.patrol();
        // Up is blocked, right is blocked, then walk down and out.
        assert_eq!(record.steps(), 4);
        assert_eq!(
            record.visited(),
            &HashSet::from([Position::new(1, 1), Position::new(2, 1)])
        );
    }

    #[test]
    fn boxed_guard_loops_in_place() {
        let lab = lab(".#.\n#>#\n.#.").unwrap();
        let record = lab.patrol();
        assert!(record.is_loop());
        assert_eq!(record.visited().len(), 1);
        assert_eq!(record.states().len(), 4);
    }

    #[test]
    fn rectangle_of_obstructions_loops() {
        let lab = lab(".#...\n....#\n#^...\n...#.").unwrap();
        assert!(lab.patrol().is_loop());
    }

    #[test]
    fn missing_guard() {
        assert!(matches!(lab("..\n.#"), Err(Error::NoGuard)));
    }

    #[test]
    fn multiple_guards() {
        let err = lab("^.\n.<").unwrap_err();
        assert!(matches!(err, Error::MultipleGuards(_, _)));
        assert_eq!(
            err.to_string(),
            "Found multiple guards(^(0, 0), <(1, 1)) in given laboratory, expect one only."
        );
    }

    #[test]
    fn guard_must_stand_on_open_floor() {
        let floor = Map::from_fn(2, 2, |pos| *pos == Position::new(1, 1));
        let on_block = Lab::new(
            floor.clone(),
            Guard::new(&Position::new(1, 1), Direction::Up),
        );
        assert!(matches!(on_block, Err(Error::GuardOnObstruction(_))));

        let outside = Lab::new(floor, Guard::new(&Position::new(2, 0), Direction::Up));
        assert!(matches!(outside, Err(Error::GuardOutside(_))));
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(matches!(lab("^.\n.O"), Err(Error::InvalidChar('O', _))));
    }
}
