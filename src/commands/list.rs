//! List command - list files or labels in the database

use crate::LabelrError;
use crate::cli::ListVariant;
use crate::colors::ColorTable;
use crate::config::PathFormat;
use crate::labels::LabelSet;
use crate::output;
use crate::store::{Database, LabelStore};
use std::sync::Arc;

type Result<T> = std::result::Result<T, LabelrError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if the store cannot be enumerated.
pub fn execute(
    db: &Database,
    table: &Arc<ColorTable>,
    variant: ListVariant,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    match variant {
        ListVariant::Files => list_files(db, table, path_format, quiet),
        ListVariant::Labels => list_labels(db, quiet),
    }
}

fn list_files(
    db: &Database,
    table: &Arc<ColorTable>,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let mut entries = db.entries()?;
    entries.sort();

    if entries.is_empty() {
        if !quiet {
            println!("No labelled files in database.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Labelled files:");
    }
    for (path, flat) in entries {
        let labels = LabelSet::from_flattened(Arc::clone(table), flat);
        println!("{}", output::file_labels(&path, &labels, path_format, quiet));
    }
    Ok(())
}

fn list_labels(db: &Database, quiet: bool) -> Result<()> {
    let labels = db.list_all_labels()?;

    if labels.is_empty() {
        if !quiet {
            println!("No labels found in database.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Labels in database:");
    }
    for label in labels {
        let count = db.find_by_label(&label)?.len();
        println!("{}", output::label_with_count(&label, count, quiet));
    }
    Ok(())
}
