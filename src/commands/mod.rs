//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and executes the operation against the label database.

pub mod colors;
pub mod known;
pub mod label;
pub mod list;
pub mod search;
pub mod show;
pub mod unlabel;

// Re-export execute functions for convenience
pub use colors::execute as colors;
pub use known::execute as known;
pub use label::execute as label;
pub use list::execute as list;
pub use search::execute as search;
pub use show::execute as show;
pub use unlabel::execute as unlabel;
