//! Allowed colors per band

use crate::decode::{Band, ColorBandRegistry, DecodeError};
use crate::output::{display_name, option_label};

/// List the colors each band accepts, with the value they decode to
pub fn run_options(quiet: bool) -> Result<(), DecodeError> {
    let registry = ColorBandRegistry::standard();

    for band in Band::ALL {
        if quiet {
            println!("{}: {}", band.position(), registry.allowed(band).join(" "));
            continue;
        }

        println!("Band {} ({}):", band.position(), display_name(&band.to_string()));
        for name in registry.allowed(band) {
            let spec = registry.lookup(name)?;
            println!("  {}", option_label(spec, band.role()));
        }
        println!();
    }

    Ok(())
}
