use crate::error::Result;
use crate::ops::{self, Strategy};
use crate::validation::{validate_manifest_path, validate_version};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(verbatim_doc_comment)]
pub struct PrepareArgs {
    /// Version to write into package.version
    ///
    /// Must be a valid semantic version, e.g. 1.2.3 or 2.0.0-rc.1.
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Path to the Cargo.toml to update (defaults to ./Cargo.toml)
    #[arg(long, value_name = "PATH", default_value = "Cargo.toml")]
    pub manifest_path: PathBuf,

    /// Show what would change without writing the manifest
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn execute(args: PrepareArgs) -> Result<()> {
    let version = validate_version(args.version.as_deref())?;
    validate_manifest_path(&args.manifest_path)?;

    log::debug!(
        "setting {} to version {}",
        args.manifest_path.display(),
        version
    );

    let update = ops::set_package_version(&args.manifest_path, version, args.dry_run)?;

    match update {
        Some(update) if args.dry_run => {
            let strategy = match update.strategy {
                Strategy::LinePatch => "line patch",
                Strategy::Reencode => "re-encode",
            };
            println!(
                "{} {} → {} ({})",
                "Would update package.version:".bold().cyan(),
                update.previous.as_deref().unwrap_or("<unset>").yellow(),
                version.green().bold(),
                strategy
            );
        }
        Some(update) => {
            log::info!(
                "updated package.version: {} → {}",
                update.previous.as_deref().unwrap_or("<unset>"),
                version
            );
        }
        None => {
            if args.dry_run {
                println!("{}", "Manifest already up to date.".yellow());
            }
            log::info!("manifest already at version {}", version);
        }
    }

    Ok(())
}
