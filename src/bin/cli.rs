// src/bin/cli.rs
use fbref_dash::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
