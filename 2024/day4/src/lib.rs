use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use grid_analyzer::WordSearch;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Read a letter matrix, one row per line.
pub fn read_letter_mat<P: AsRef<Path>>(path: P) -> Result<WordSearch> {
    let letters = grid_analyzer::read_map(path, WordSearch::parse_tile)?;

    Ok(WordSearch::new(letters))
}
