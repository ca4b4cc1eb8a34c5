//! Colors command - print the Finder color table

use crate::colors::ColorTable;
use crate::output;

/// Execute the colors command
///
/// Prints the table in the Finder's presentation order, with truecolor
/// swatches when not in quiet mode.
pub fn execute(table: &ColorTable, quiet: bool) {
    if !quiet {
        println!("Finder colors:");
    }
    for def in table.rainbow_ordered() {
        println!("{}", output::swatch(def, quiet));
    }
}
