//! Unlabel command - remove colors and tags from a file

use crate::LabelrError;
use crate::cli::ColorArg;
use crate::colors::{ColorIndex, ColorTable};
use crate::labels::LabelSet;
use crate::store::Database;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, LabelrError>;

/// Execute the unlabel command
///
/// Removing an absent color or tag is a no-op, matching the model's
/// semantics. `--all` clears the file's entry entirely.
///
/// # Errors
/// Returns an error if nothing was requested, or if the store read or
/// write fails.
pub fn execute(
    db: &Database,
    table: &Arc<ColorTable>,
    file: &Path,
    colors: &[ColorArg],
    tags: &[String],
    all: bool,
    quiet: bool,
) -> Result<()> {
    if !all && colors.is_empty() && tags.is_empty() {
        return Err(LabelrError::InvalidInput(
            "Nothing to remove: give --color, --tag, or --all".to_string(),
        ));
    }

    let mut labels = LabelSet::from_store(Arc::clone(table), db, file)?;

    if all {
        labels.clear();
    } else {
        let colors: Vec<ColorIndex> = colors.iter().map(|&c| c.into()).collect();
        labels
            .remove_colors(colors)
            .remove_tags(tags.iter().map(String::as_str));
    }

    labels.persist(db, file)?;

    if !quiet {
        if labels.is_empty() {
            println!("Removed all labels from {}", file.display());
        } else {
            println!(
                "{} now has {} label(s)",
                file.display(),
                labels.all_labels().len()
            );
        }
    }
    Ok(())
}
