use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use grid_analyzer::Antennas;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_signal_map<P: AsRef<Path>>(path: P) -> Result<Antennas> {
    let map = grid_analyzer::read_map(path, Antennas::parse_tile)?;

    Ok(Antennas::from_map(&map))
}
