use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    grid_analyzer::logging::init();
    let args = CLIArgs::parse();
    let letter_mat = day4::read_letter_mat(&args.input_path).with_context(|| {
        format!(
            "Failed to read letter matrix from given file({}).",
            args.input_path.display()
        )
    })?;

    let cross_count = letter_mat.count_crossed("MAS");
    println!(
        "X-MAS appears {} time(s) in given letter matrix.",
        cross_count
    );

    Ok(())
}
