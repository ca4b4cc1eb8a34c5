//! Label command - attach colors and tags to files

use crate::LabelrError;
use crate::cli::ColorArg;
use crate::colors::{ColorIndex, ColorTable};
use crate::config::PathFormat;
use crate::labels::LabelSet;
use crate::output;
use crate::store::Database;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type Result<T> = std::result::Result<T, LabelrError>;

/// Execute the label command
///
/// Merges the given colors and tags into each file's existing labels, or
/// replaces them wholesale with `--replace`. Each file is written
/// independently: a failed write is reported and does not stop the batch.
///
/// # Errors
/// Returns an error if no label was given, or if every write failed.
pub fn execute(
    db: &Database,
    table: &Arc<ColorTable>,
    files: &[PathBuf],
    colors: &[ColorArg],
    tags: &[String],
    replace: bool,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    if colors.is_empty() && tags.is_empty() {
        return Err(LabelrError::InvalidInput(
            "Nothing to apply: give at least one --color or --tag".to_string(),
        ));
    }

    let colors: Vec<ColorIndex> = colors.iter().map(|&c| c.into()).collect();

    let mut failures = 0usize;
    for file in files {
        if !quiet && !file.exists() {
            println!(
                "Warning: {} does not exist on disk",
                output::colorize_path(file, path_format)
            );
        }

        let result = apply_one(db, table, file, &colors, tags, replace);
        match result {
            Ok(labels) => {
                if !quiet {
                    println!(
                        "Labelled {} ({} colors, {} tags)",
                        file.display(),
                        labels.colors().len(),
                        labels.tags().len()
                    );
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("Failed to label {}: {e}", file.display());
            }
        }
    }

    if failures == files.len() {
        return Err(LabelrError::InvalidInput(format!(
            "All {failures} write(s) failed"
        )));
    }
    Ok(())
}

fn apply_one(
    db: &Database,
    table: &Arc<ColorTable>,
    file: &Path,
    colors: &[ColorIndex],
    tags: &[String],
    replace: bool,
) -> Result<LabelSet> {
    let mut labels = if replace {
        LabelSet::new(Arc::clone(table))
    } else {
        LabelSet::from_store(Arc::clone(table), db, file)?
    };

    labels
        .insert_colors(colors.iter().copied())
        .insert_tags(tags.iter().cloned());
    labels.persist(db, file)?;
    Ok(labels)
}
