use std::{
    fmt::Display,
    ops::{Add, Sub},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "^"),
            Direction::Right => write!(f, ">"),
            Direction::Down => write!(f, "v"),
            Direction::Left => write!(f, "<"),
        }
    }
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }

    pub fn from_symbol(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

/// Cell coordinate, ordered by row first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    /// Adjacent position, `None` when it would have a negative coordinate.
    /// The upper bounds are checked by the owning map.
    pub fn neighbor(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            _ => None,
        }
    }

    pub fn transposed(&self) -> Position {
        Position::new(self.c, self.r)
    }
}

impl Sub for &Position {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(
            self.r as isize - rhs.r as isize,
            self.c as isize - rhs.c as isize,
        )
    }
}

impl Sub for Position {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Add<&Vector> for &Position {
    type Output = Option<Position>;

    fn add(self, rhs: &Vector) -> Self::Output {
        let r = self.r.checked_add_signed(rhs.r)?;
        let c = self.c.checked_add_signed(rhs.c)?;

        Some(Position::new(r, c))
    }
}

impl Add<Vector> for Position {
    type Output = Option<Position>;

    fn add(self, rhs: Vector) -> Self::Output {
        &self + &rhs
    }
}

/// Signed displacement between two positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    r: isize,
    c: isize,
}

impl Vector {
    pub fn new(r: isize, c: isize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> isize {
        self.r
    }

    pub fn c(&self) -> isize {
        self.c
    }

    pub fn is_zero(&self) -> bool {
        self.r == 0 && self.c == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_right_cycles_through_all_directions() {
        let mut dir = Direction::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(dir);
            dir = dir.turn_right();
        }

        assert_eq!(dir, Direction::Up);
        assert_eq!(seen, Direction::all_dirs());
    }

    #[test]
    fn neighbor_stops_at_zero() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Up), None);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(origin.neighbor(Direction::Right), Some(Position::new(0, 1)));
    }

    #[test]
    fn displacement_applies_back() {
        let from = Position::new(3, 1);
        let to = Position::new(1, 4);
        let offset = &to - &from;
        assert_eq!(offset, Vector::new(-2, 3));
        assert_eq!(&to + &offset, None);
        assert_eq!(&from + &offset, Some(to));
    }
}
