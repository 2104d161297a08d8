use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use grid_analyzer::{Lab, LabTile};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Read a laboratory layout: `.` floor, `#` obstruction and exactly one
/// guard drawn as `^`, `>`, `v` or `<`.
pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Lab> {
    let tiles = grid_analyzer::read_map(&path, LabTile::parse_tile)?;

    Lab::from_tiles(&tiles).with_context(|| {
        format!(
            "Invalid guard setup in given file({}).",
            path.as_ref().display()
        )
    })
}
