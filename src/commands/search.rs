//! Search command - find files whose labels match a target

use crate::LabelrError;
use crate::cli::{ColorArg, MatchModeArg};
use crate::colors::{ColorIndex, ColorTable};
use crate::config::PathFormat;
use crate::labels::LabelSet;
use crate::output;
use crate::search::{Search, SearchIndex, SearchOutcome};
use crate::store::Database;
use std::sync::Arc;

type Result<T> = std::result::Result<T, LabelrError>;

/// Execute the search command
///
/// Builds the target label set from the given colors and tags, spawns a
/// one-shot search over the database, and prints the matching paths.
///
/// # Errors
/// Returns an error if the search index cannot be read.
pub fn execute(
    db: &Arc<Database>,
    table: &Arc<ColorTable>,
    colors: &[ColorArg],
    tags: &[String],
    mode: MatchModeArg,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let colors: Vec<ColorIndex> = colors.iter().map(|&c| c.into()).collect();
    let mut target = LabelSet::new(Arc::clone(table));
    target.insert_colors(colors).insert_tags(tags.iter().cloned());

    let index: Arc<dyn SearchIndex + Send + Sync> = db.clone();
    let handle = Search::for_labels(&target, mode.into()).spawn(index);

    match handle.wait()? {
        SearchOutcome::Cancelled => {
            if !quiet {
                println!("Search cancelled.");
            }
        }
        SearchOutcome::Matches(paths) => {
            if paths.is_empty() {
                if !quiet {
                    println!("No files match.");
                }
                return Ok(());
            }
            if !quiet {
                println!("{} file(s) match:", paths.len());
            }
            for path in paths {
                println!("{}", output::format_path(&path, path_format));
            }
        }
    }
    Ok(())
}
