//! Color reference table

use crate::decode::ColorBandRegistry;
use crate::output::{print_separator, print_table_header, print_table_row};

const COLUMN_WIDTHS: [usize; 4] = [11, 5, 10, 9];

/// Print every registry color with its digit, multiplier and tolerance
pub fn run_table(quiet: bool) {
    let registry = ColorBandRegistry::standard();

    if !quiet {
        println!("[Color Reference]");
    }
    print_table_header(&COLUMN_WIDTHS);
    print_separator(&COLUMN_WIDTHS);
    for spec in registry.colors() {
        print_table_row(spec, &COLUMN_WIDTHS);
    }
}
