use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use grid_analyzer::{Error, Map, Position};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Read a garden map, one plant letter per plot.
pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Map<char>> {
    grid_analyzer::read_map(path, plant_tile)
}

fn plant_tile(pos: &Position, c: char) -> Result<char, Error> {
    if c.is_ascii_alphabetic() {
        Ok(c)
    } else {
        Err(Error::InvalidChar(c, pos.clone()))
    }
}
