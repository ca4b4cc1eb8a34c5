//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for labelr using the `clap` crate.
//!
//! # Commands
//!
//! - **label**: Attach colors and tags to files
//! - **unlabel**: Remove colors and tags from a file
//! - **show**: Display a file's labels
//! - **search**: Find files whose label sets match (any/all/exact)
//! - **list**: Enumerate files or labels in the database
//! - **colors**: Print the Finder color table
//! - **known**: List tags the Finder knows about
//! - **db**: Manage multiple databases (add, remove, list, set-default)
//!
//! A global `--quiet` flag switches to bare, scripting-friendly output and
//! a global `--database` flag selects a named database from the
//! configuration.

use crate::colors::ColorIndex;
use crate::search::MatchMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Finder-style color and tag labels for files
#[derive(Parser, Debug)]
#[command(name = "labelr", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use a named database from the configuration
    #[arg(long, global = true, value_name = "NAME")]
    pub database: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Attach colors and tags to one or more files
    #[command(alias = "l")]
    Label {
        /// Files to label
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Color(s) to set
        #[arg(short, long, value_enum)]
        color: Vec<ColorArg>,

        /// Tag(s) to set
        #[arg(short, long)]
        tag: Vec<String>,

        /// Replace existing labels instead of merging
        #[arg(short, long)]
        replace: bool,
    },

    /// Remove colors and tags from a file
    #[command(alias = "u")]
    Unlabel {
        /// File to modify
        file: PathBuf,

        /// Color(s) to remove
        #[arg(short, long, value_enum)]
        color: Vec<ColorArg>,

        /// Tag(s) to remove
        #[arg(short, long)]
        tag: Vec<String>,

        /// Remove every label
        #[arg(short, long)]
        all: bool,
    },

    /// Show the labels attached to a file
    #[command(alias = "s")]
    Show {
        /// File to inspect
        file: PathBuf,
    },

    /// Find files whose labels match the given target
    Search {
        /// Target color(s)
        #[arg(short, long, value_enum)]
        color: Vec<ColorArg>,

        /// Target tag(s)
        #[arg(short, long)]
        tag: Vec<String>,

        /// How candidates are compared against the target
        #[arg(short, long, value_enum, default_value = "any")]
        mode: MatchModeArg,
    },

    /// List database contents
    List {
        /// What to list
        #[arg(value_enum, default_value = "files")]
        variant: ListVariant,
    },

    /// Print the Finder color table
    Colors,

    /// List tags the Finder knows about
    Known {
        /// Only tags currently in use in the database
        #[arg(short, long)]
        active: bool,
    },

    /// Manage label databases
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

/// Database management subcommands
#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// Register a database under a name
    Add {
        /// Name for the database
        name: String,
        /// Filesystem path of the database
        path: PathBuf,
    },
    /// Remove a database from the configuration
    Remove {
        /// Name of the database to remove
        name: String,
    },
    /// List configured databases
    List,
    /// Set the default database
    SetDefault {
        /// Name of the database to make the default
        name: String,
    },
}

/// List variant for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    /// List all labelled files
    Files,
    /// List all labels in use
    Labels,
}

/// Color names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    Grey,
    Green,
    Purple,
    Blue,
    Yellow,
    Red,
    Orange,
}

impl From<ColorArg> for ColorIndex {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Grey => Self::Grey,
            ColorArg::Green => Self::Green,
            ColorArg::Purple => Self::Purple,
            ColorArg::Blue => Self::Blue,
            ColorArg::Yellow => Self::Yellow,
            ColorArg::Red => Self::Red,
            ColorArg::Orange => Self::Orange,
        }
    }
}

/// Match modes accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchModeArg {
    /// At least one shared label
    Any,
    /// Candidate has every target label
    All,
    /// Label sets are equal
    Exact,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Any => Self::Any,
            MatchModeArg::All => Self::All,
            MatchModeArg::Exact => Self::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_command() {
        let cli = Cli::try_parse_from([
            "labelr", "label", "a.txt", "b.txt", "--color", "red", "--tag", "Work",
        ])
        .unwrap();

        match cli.command {
            Commands::Label {
                files,
                color,
                tag,
                replace,
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(color, vec![ColorArg::Red]);
                assert_eq!(tag, vec!["Work".to_string()]);
                assert!(!replace);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_defaults_to_any() {
        let cli = Cli::try_parse_from(["labelr", "search", "--tag", "Work"]).unwrap();

        match cli.command {
            Commands::Search { mode, .. } => assert_eq!(mode, MatchModeArg::Any),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_exact_mode() {
        let cli =
            Cli::try_parse_from(["labelr", "search", "--color", "blue", "--mode", "exact"]).unwrap();

        match cli.command {
            Commands::Search { color, mode, .. } => {
                assert_eq!(color, vec![ColorArg::Blue]);
                assert_eq!(mode, MatchModeArg::Exact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["labelr", "show", "a.txt", "--quiet", "--database", "work"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.database.as_deref(), Some("work"));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorIndex::from(ColorArg::Orange), ColorIndex::Orange);
        assert_eq!(MatchMode::from(MatchModeArg::All), MatchMode::All);
    }

    #[test]
    fn test_label_requires_files() {
        assert!(Cli::try_parse_from(["labelr", "label"]).is_err());
    }
}
