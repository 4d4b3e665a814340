//! Compare command: diff two spec files and print the change list.

use anyhow::Result;
use clap::Args;
use specdrift_core::{diff_specs, load_spec};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the old spec JSON file
    pub old: PathBuf,

    /// Path to the new spec JSON file
    pub new: PathBuf,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let old = load_spec(&args.old)?;
    let new = load_spec(&args.new)?;

    let changes = diff_specs(&old, &new);
    if changes.is_empty() {
        println!("No differences detected between the two specs.");
        return Ok(());
    }

    println!("Differences detected:");
    for change in &changes {
        println!("- {change}");
    }
    Ok(())
}
