//! Workspace maintenance tasks.
//!
//! `cargo xtask check-data [--config photocat.toml]` loads the dataset the
//! dashboard would serve and reports molecules without a readable structure
//! artifact, or whose artifact has no atoms.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use photocat::features::FeatureStore;
use photocat::options::Options;
use photocat::structures::{DirectoryStore, StructureStore};
use photocat::MoleculeId;

#[derive(Parser)]
#[command(name = "xtask", about = "photocat workspace tasks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that every molecule in the dataset has a structure artifact.
    CheckData {
        /// Options file; defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    match Cli::parse().command {
        Command::CheckData { config } => check_data(config),
    }
}

fn check_data(config: Option<PathBuf>) -> Result<ExitCode> {
    let options = match config {
        Some(path) => Options::load(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let features = FeatureStore::load(&options.dataset).with_context(|| {
        format!("loading dataset {}", options.dataset.path.display())
    })?;
    let structures = DirectoryStore::from_options(&options.structures);

    let default_id = options.structures.default_id;
    let ids = features
        .rows()
        .iter()
        .map(|row| row.id)
        .chain(std::iter::once(default_id));

    let mut failures: Vec<(MoleculeId, String)> = Vec::new();
    let mut checked = 0usize;
    let mut atoms = 0usize;
    for id in ids {
        checked += 1;
        match structures.get(id) {
            Ok(payload) if payload.atom_count() == 0 => {
                failures.push((id, "model has no atoms".to_owned()));
            }
            Ok(payload) => atoms += payload.atom_count(),
            Err(e) => failures.push((id, e.to_string())),
        }
    }

    println!(
        "checked {checked} structures ({} rows + default {default_id}) in {}, \
         {atoms} atoms total",
        features.len(),
        structures.directory().display()
    );
    if failures.is_empty() {
        println!("all structures readable");
        return Ok(ExitCode::SUCCESS);
    }
    for (id, message) in &failures {
        println!("  {id}: {message}");
    }
    println!("{} of {checked} structures unreadable", failures.len());
    Ok(ExitCode::FAILURE)
}
