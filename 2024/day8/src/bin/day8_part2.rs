use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;
use grid_analyzer::Projection;

fn main() -> Result<()> {
    grid_analyzer::logging::init();
    let args = CLIArgs::parse();
    let signal_map = day8::read_signal_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read signal map from given file({}).",
            args.input_path.display()
        )
    })?;

    let antinode_locs = signal_map.antinode_positions(Projection::Unbounded);
    println!(
        "There is(are) {} harmonic antinode(s) according to given signal map.",
        antinode_locs.len()
    );

    Ok(())
}
