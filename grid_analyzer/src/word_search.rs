use std::iter;

use tracing::debug;

use crate::{
    error::Error,
    map::Map,
    position::{Position, Vector},
};

// Row and column steps of the eight rays: horizontal, vertical and both
// diagonals, each in both senses.
static RAY_STEPS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

// The two diagonals crossing at a center letter.
static CROSS_STEPS: [(isize, isize); 2] = [(1, 1), (1, -1)];

/// Letter grid for word search puzzles. Letters are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct WordSearch {
    letters: Map<char>,
}

impl WordSearch {
    pub fn new(letters: Map<char>) -> Self {
        Self {
            letters: letters.map_tiles(|c| c.to_ascii_uppercase()),
        }
    }

    pub fn parse_tile(pos: &Position, c: char) -> Result<char, Error> {
        if c.is_ascii_alphabetic() {
            Ok(c.to_ascii_uppercase())
        } else {
            Err(Error::InvalidChar(c, pos.clone()))
        }
    }

    /// Occurrences of `word` along any of the eight rays, read forwards.
    ///
    /// A word read backwards is found on the opposite ray, so reversed
    /// occurrences are counted too.
    pub fn count_word(&self, word: &str) -> usize {
        let word = word.to_ascii_uppercase();
        let Some(first) = word.chars().next() else {
            return 0;
        };

        let count = self
            .letters
            .iter()
            .filter(|(_, letter)| **letter == first)
            .map(|(pos, _)| {
                RAY_STEPS
                    .iter()
                    .filter(|(r, c)| self.reads_along(&pos, &Vector::new(*r, *c), &word))
                    .count()
            })
            .sum::<usize>();
        debug!(word = %word, count, "counted word occurrences");

        count
    }

    /// Centers where `word` is read on both diagonals crossing there, each
    /// diagonal either forwards or backwards.
    ///
    /// Only words of odd length have a center letter; others never cross.
    pub fn count_crossed(&self, word: &str) -> usize {
        let word = word.to_ascii_uppercase();
        let letters = word.chars().collect::<Vec<_>>();
        if letters.len() % 2 == 0 {
            return 0;
        }

        let half = (letters.len() / 2) as isize;
        let center = letters[letters.len() / 2];
        let reversed = word.chars().rev().collect::<String>();
        let count = self
            .letters
            .iter()
            .filter(|(_, letter)| **letter == center)
            .filter(|(pos, _)| {
                CROSS_STEPS.iter().all(|(r, c)| {
                    let Some(start) = pos + &Vector::new(-half * r, -half * c) else {
                        return false;
                    };
                    let step = Vector::new(*r, *c);
                    self.reads_along(&start, &step, &word)
                        || self.reads_along(&start, &step, &reversed)
                })
            })
            .count();
        debug!(word = %word, count, "counted crossed words");

        count
    }

    fn reads_along(&self, start: &Position, step: &Vector, word: &str) -> bool {
        let mut ray = iter::successors(Some(start.clone()), |pos| pos + step)
            .map(|pos| self.letters.tile(&pos));
        word.chars().all(|c| ray.next().flatten() == Some(&c))
    }
}
