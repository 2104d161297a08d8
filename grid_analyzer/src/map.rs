use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    error::Error,
    position::{Direction, Position},
};

/// Rectangular grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T> Map<T> {
    pub fn from_fn<F>(row_n: usize, col_n: usize, mut f: F) -> Self
    where
        F: FnMut(&Position) -> T,
    {
        let tiles = (0..row_n)
            .flat_map(|r| (0..col_n).map(move |c| Position::new(r, c)))
            .map(|pos| f(&pos))
            .collect();

        Self {
            tiles,
            row_n,
            col_n,
        }
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r() < self.row_n && pos.c() < self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&T> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    pub(crate) fn tile_mut(&mut self, pos: &Position) -> Option<&mut T> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get_mut(ind))
    }

    /// Neighbor of `pos` along `dir`, only if it's still on this map.
    pub fn neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir).filter(|p| self.is_inside(p))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |r| (0..self.col_n).map(move |c| Position::new(r, c)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions().zip(self.tiles.iter())
    }

    pub fn map_tiles<U, F>(&self, f: F) -> Map<U>
    where
        F: FnMut(&T) -> U,
    {
        Map {
            tiles: self.tiles.iter().map(f).collect(),
            row_n: self.row_n,
            col_n: self.col_n,
        }
    }

    pub fn transposed(&self) -> Map<T>
    where
        T: Clone,
    {
        Map::from_fn(self.col_n, self.row_n, |pos| {
            self.tiles[pos.c() * self.col_n + pos.r()].clone()
        })
    }

    pub(crate) fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct MapBuilder<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: Option<usize>,
}

impl<T> Default for MapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MapBuilder<T> {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    /// Append one row, turning every character into a tile with `parse_tile`.
    pub fn add_row<F>(&mut self, text: &str, mut parse_tile: F) -> Result<(), Error>
    where
        F: FnMut(&Position, char) -> Result<T, Error>,
    {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for (col_ind, c) in text.chars().enumerate() {
            let tile = parse_tile(&Position::new(self.row_n, col_ind), c)?;
            self.tiles.push(tile);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Map<T> {
        Map {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

/// Build a map from in-memory text, one row per line.
pub fn parse_map<T, F>(text: &str, mut parse_tile: F) -> Result<Map<T>, Error>
where
    F: FnMut(&Position, char) -> Result<T, Error>,
{
    let mut builder = MapBuilder::new();
    for line in text.lines() {
        builder.add_row(line, &mut parse_tile)?;
    }

    Ok(builder.build())
}

pub fn read_map<T, P, F>(path: P, mut parse_tile: F) -> Result<Map<T>>
where
    P: AsRef<Path>,
    F: FnMut(&Position, char) -> Result<T, Error>,
{
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MapBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_row(line.as_str(), &mut parse_tile)
            .with_context(|| format!("Invalid row {} in given map.", ind + 1))?;
    }

    let map = builder.build();
    debug!(
        row_n = map.row_n(),
        col_n = map.col_n(),
        "loaded map from {}",
        path.as_ref().display()
    );

    Ok(map)
}
