//! Show command - display a file's labels

use crate::LabelrError;
use crate::colors::ColorTable;
use crate::config::PathFormat;
use crate::labels::LabelSet;
use crate::output;
use crate::store::Database;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, LabelrError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the store read fails.
pub fn execute(
    db: &Database,
    table: &Arc<ColorTable>,
    file: &Path,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let labels = LabelSet::from_store(Arc::clone(table), db, file)?;

    if quiet {
        for label in labels.all_labels() {
            println!("{label}");
        }
        return Ok(());
    }

    println!("{}", output::file_labels(file, &labels, path_format, false));
    Ok(())
}
