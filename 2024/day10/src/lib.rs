use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use grid_analyzer::TopoMap;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<TopoMap> {
    let heights = grid_analyzer::read_map(path, TopoMap::parse_tile)?;

    Ok(TopoMap::new(heights))
}
