use anyhow::{Context, Result};
use clap::Parser;
use day10::CLIArgs;

fn main() -> Result<()> {
    grid_analyzer::logging::init();
    let args = CLIArgs::parse();
    let map = day10::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read topographic map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The rating sum of all trailheads from given topographic map is {}.",
        map.rating_sum()
    );

    Ok(())
}
