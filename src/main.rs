mod app;
mod grammar;
mod path;
mod tree;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = app::Cli::parse();
    app::run_app(cli)?;
    Ok(())
}
