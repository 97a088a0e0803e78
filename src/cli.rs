use crate::command::CargoCommand;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cargo-prepare", bin_name = "cargo", version = crate::VERSION)]
pub struct CargoCli {
    #[command(subcommand)]
    pub command: CargoCommand,
}
