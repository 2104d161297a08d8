use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    grid_analyzer::logging::init();
    let args = CLIArgs::parse();
    let lab = day6::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let patrol = lab.patrol();
    println!(
        "The guard will visit {} position(s) before leaving given laboratory.",
        patrol.visited().len()
    );

    Ok(())
}
