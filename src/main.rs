//! CLI entry point for Hilbert curve export and image tiling

use clap::Parser;
use hilbertile::io::cli::Cli;

fn main() -> hilbertile::Result<()> {
    Cli::parse().run()
}
