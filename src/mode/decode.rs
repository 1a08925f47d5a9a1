//! Decode a band selection into its resistance

use log::debug;

use crate::decode::{Band, BandSelection, ColorBandRegistry, DecodeError, resolve};
use crate::output::{print_band_row, print_legend, print_resistor, print_result, print_warning};

/// Decode and print the selection
pub fn run_decode(selection: &BandSelection, quiet: bool) -> Result<(), DecodeError> {
    let registry = ColorBandRegistry::standard();
    debug!("Decoding selection {:?}", selection);

    let result = resolve(selection, &registry)?;
    debug!("Resolved to {:?}", result);

    if quiet {
        println!("{}", result);
        return Ok(());
    }

    let specs = Band::ALL
        .iter()
        .map(|&band| registry.lookup(selection.get(band)))
        .collect::<Result<Vec<_>, _>>()?;

    if specs[0].digit == Some(0) {
        print_warning("first digit is zero; standard resistors never start with black");
    }

    print_resistor(&specs);
    println!("Bands:");
    for (band, spec) in Band::ALL.into_iter().zip(&specs) {
        print_band_row(band, spec);
    }
    println!();

    print_result(&result);

    println!();
    print_legend();

    Ok(())
}
