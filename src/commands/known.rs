//! Known command - list tags the Finder knows about

use crate::LabelrError;
use crate::colors::{ColorIndex, ColorTable};
use crate::discovery;
use crate::store::Database;

type Result<T> = std::result::Result<T, LabelrError>;

/// Execute the known command
///
/// With `--active`, lists the free-text labels currently in use in the
/// local database. Otherwise reads the user's synced Finder preferences;
/// that read refuses to run in a sandboxed environment.
///
/// # Errors
/// Returns an error if discovery fails, including the restricted
/// environment case.
pub fn execute(db: &Database, table: &ColorTable, active: bool, quiet: bool) -> Result<()> {
    if active {
        let labels = discovery::active_labels(db, table)?;
        if labels.is_empty() && !quiet {
            println!("No tags in use.");
            return Ok(());
        }
        if !quiet {
            println!("Tags in use:");
        }
        for label in labels {
            println!("{label}");
        }
        return Ok(());
    }

    let tags = discovery::known_tags(table)?;
    if tags.is_empty() && !quiet {
        println!("No known tags found in Finder preferences.");
        return Ok(());
    }
    if !quiet {
        println!("Known Finder tags:");
    }
    for tag in tags {
        if quiet || tag.color == ColorIndex::None {
            println!("{}", tag.name);
        } else {
            println!("{} ({})", tag.name, tag.color);
        }
    }
    Ok(())
}
