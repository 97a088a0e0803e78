//! Binary entry point for `cargo-prepare`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = cargo_prepare::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
