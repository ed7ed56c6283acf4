// src/bin/cli.rs
use bluebook_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = cli::run()?;
    println!("Wrote {}", summary.output.display());
    Ok(())
}
