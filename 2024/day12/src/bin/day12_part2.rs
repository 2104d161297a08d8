use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;
use grid_analyzer::Pricing;

fn main() -> Result<()> {
    grid_analyzer::logging::init();
    let args = CLIArgs::parse();
    let garden = day12::read_garden(&args.input_path).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;

    let fences_price = garden.fence_price(Pricing::Sides);
    println!(
        "The total price of fencing given garden map with bulk discount is {}.",
        fences_price
    );

    Ok(())
}
