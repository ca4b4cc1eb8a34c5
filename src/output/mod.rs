//! Output formatting for CLI display
//!
//! Formats paths, label sets, and color swatches for the terminal.
//! Quiet mode prints bare values for scripting.

use crate::colors::ColorDefinition;
use crate::config::PathFormat;
use crate::labels::LabelSet;
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// Render one color definition as a terminal swatch with its label
#[must_use]
pub fn swatch(def: &ColorDefinition, quiet: bool) -> String {
    if quiet {
        return def.label.clone();
    }
    let block = "  "
        .on_truecolor(def.color.r, def.color.g, def.color.b)
        .to_string();
    format!("{block} {} ({})", def.label, def.index)
}

/// Format a file's label model for display
///
/// Colors are rendered as their canonical labels with swatches, tags as
/// plain text.
#[must_use]
pub fn file_labels(path: &Path, labels: &LabelSet, format: PathFormat, quiet: bool) -> String {
    let path_str = format_path(path, format);

    if quiet {
        let mut flat: Vec<String> = labels.all_labels().into_iter().collect();
        flat.insert(0, path_str);
        return flat.join("\t");
    }

    if labels.is_empty() {
        return format!("  {path_str} (no labels)");
    }

    let mut colors: Vec<String> = labels
        .colors()
        .iter()
        .filter_map(|&c| labels.table().definition(c))
        .map(|def| {
            "●"
                .truecolor(def.color.r, def.color.g, def.color.b)
                .to_string()
                + " "
                + &def.label
        })
        .collect();
    colors.sort();

    let mut tags: Vec<&String> = labels.tags().iter().collect();
    tags.sort();
    let tags: Vec<String> = tags.into_iter().map(|t| format!("#{t}")).collect();

    let rendered: Vec<String> = colors.into_iter().chain(tags).collect();
    format!("  {} [{}]", path_str, rendered.join(", "))
}

/// Format a label with its usage count
#[must_use]
pub fn label_with_count(label: &str, count: usize, quiet: bool) -> String {
    if quiet {
        label.to_string()
    } else {
        format!("  {label} (used by {count} file(s))")
    }
}

/// Color a path based on file existence (green if exists, red if missing)
#[must_use]
pub fn colorize_path(path: &Path, format: PathFormat) -> String {
    let formatted = format_path(path, format);
    if path.exists() {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}
