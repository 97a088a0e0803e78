pub mod prepare;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum CargoCommand {
    /// Stamp a release version into a Cargo.toml manifest.
    Prepare(prepare::PrepareArgs),
}
