//! Labelr CLI application entry point
//!
//! Command-line interface for attaching Finder-style color and tag labels
//! to files, persisting them in an embedded database, and searching by
//! match mode.
//!
//! # Usage
//!
//! ```bash
//! # Label a file with a color and a tag
//! labelr label report.pdf --color red --tag Work
//!
//! # Show a file's labels
//! labelr show report.pdf
//!
//! # Find files carrying all the target labels
//! labelr search --color red --tag Work --mode all
//!
//! # List everything in the database
//! labelr list files
//! labelr list labels
//!
//! # Print the color table
//! labelr colors
//!
//! # Discover known Finder tags (not available when sandboxed)
//! labelr known
//!
//! # Quiet mode (only output results)
//! labelr -q search --tag Work
//! ```
//!
//! # Configuration
//!
//! Named databases live in the user's config directory
//! (`~/.config/labelr/config.toml` on Linux); `labelr db add <name> <path>`
//! registers one. Without any configuration, a database is created in the
//! local data directory.

use labelr::{
    LabelrError,
    cli::{Cli, Commands, DbCommands},
    colors::ColorTable,
    commands,
    config::LabelrConfig,
    store::Database,
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, LabelrError>;

/// Handle the db command - manage named databases in the configuration
///
/// # Errors
/// Returns `LabelrError` if the configuration cannot be saved.
fn handle_db_command(mut config: LabelrConfig, command: &DbCommands, quiet: bool) -> Result<()> {
    match command {
        DbCommands::Add { name, path } => {
            config.add_database(name.clone(), path.clone())?;
            if !quiet {
                println!("Added database '{}' at {}", name, path.display());
            }
        }
        DbCommands::Remove { name } => {
            let removed = config.remove_database(name)?;
            if !quiet {
                match removed {
                    Some(path) => println!("Removed database '{}' ({})", name, path.display()),
                    None => println!("No database named '{name}'"),
                }
            }
        }
        DbCommands::List => {
            if config.databases.is_empty() {
                if !quiet {
                    println!("No databases configured.");
                }
                return Ok(());
            }
            for (name, path) in &config.databases {
                let marker = if config.get_default_database() == Some(name) {
                    " (default)"
                } else {
                    ""
                };
                if quiet {
                    println!("{name}");
                } else {
                    println!("  {} -> {}{}", name, path.display(), marker);
                }
            }
        }
        DbCommands::SetDefault { name } => {
            config.set_default_database(name.clone())?;
            if !quiet {
                println!("Default database is now '{name}'");
            }
        }
    }
    Ok(())
}

/// Main entry point for the labelr CLI
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `LabelrError` if configuration loading fails, database
/// initialization fails, or any command handler returns an error.
fn main() -> Result<()> {
    let config = LabelrConfig::load()?;
    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;
    let path_format = config.path_format;

    if let Commands::Db { command } = &cli.command {
        return handle_db_command(config, command, quiet);
    }

    let table = Arc::new(ColorTable::finder_default());

    // The colors command needs no database
    if let Commands::Colors = &cli.command {
        commands::colors(&table, quiet);
        return Ok(());
    }

    let db_path = config.resolve_database(cli.database.as_deref())?;
    let db = Arc::new(Database::open(db_path)?);

    match &cli.command {
        Commands::Label {
            files,
            color,
            tag,
            replace,
        } => commands::label(&db, &table, files, color, tag, *replace, path_format, quiet)?,
        Commands::Unlabel {
            file,
            color,
            tag,
            all,
        } => commands::unlabel(&db, &table, file, color, tag, *all, quiet)?,
        Commands::Show { file } => commands::show(&db, &table, file, path_format, quiet)?,
        Commands::Search { color, tag, mode } => {
            commands::search(&db, &table, color, tag, *mode, path_format, quiet)?;
        }
        Commands::List { variant } => commands::list(&db, &table, *variant, path_format, quiet)?,
        Commands::Known { active } => commands::known(&db, &table, *active, quiet)?,
        Commands::Colors | Commands::Db { .. } => unreachable!(),
    }

    db.flush()?;
    Ok(())
}
