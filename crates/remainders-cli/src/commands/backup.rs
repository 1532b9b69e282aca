use std::path::PathBuf;

use clap::Subcommand;
use remainders_core::{backup, clock};

use super::common;

#[derive(Subcommand)]
pub enum BackupAction {
    /// Write a full backup to a JSON file
    Export {
        /// Output path (default: remainders-backup-<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore from a backup file (wrapper or legacy bare-array format)
    Import { path: PathBuf },
}

pub fn run(action: BackupAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut store) = common::open()?;

    match action {
        BackupAction::Export { output } => {
            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "remainders-backup-{}.json",
                    chrono::Local::now().format("%Y-%m-%d")
                ))
            });
            std::fs::write(&path, backup::export(&store)?)?;
            println!("backup written to {}", path.display());
        }
        BackupAction::Import { path } => {
            let json = std::fs::read_to_string(&path)?;
            // A rejected file surfaces here; the store is untouched.
            let restored = backup::parse(&json, clock::now_ms())?;
            let event = store.apply_backup(restored);
            println!("{}", serde_json::to_string_pretty(&event)?);
            common::persist_lenient(&store, &db);
        }
    }

    Ok(())
}
