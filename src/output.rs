use colored::*;

use crate::decode::{Band, ColorSpec, ResistanceResult, Role, format_magnitude};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Parse "#RRGGBB" into RGB components
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Render text on the color's fill, using its label color for the text
fn swatch(spec: &ColorSpec, text: &str) -> ColoredString {
    match (parse_hex(spec.fill), parse_hex(spec.label_color)) {
        (Some((br, bg, bb)), Some((fr, fg, fb))) => {
            text.truecolor(fr, fg, fb).on_truecolor(br, bg, bb)
        }
        _ => text.normal(),
    }
}

/// Capitalized color name for display (e.g., "brown" -> "Brown")
pub(crate) fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn print_separator(widths: &[usize]) {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    println!("{}", "-".repeat(total));
}

/// Resistor body with the four bands, tolerance band set apart
pub(crate) fn print_resistor(specs: &[&ColorSpec]) {
    print!("Resistor: ");
    for (i, spec) in specs.iter().enumerate() {
        if i == specs.len() - 1 {
            print!(" ");
        }
        print!("{}", swatch(spec, "   "));
        print!(" ");
    }
    println!();
    println!();
}

pub(crate) fn print_band_row(band: Band, spec: &ColorSpec) {
    let value = spec
        .value_label(band.role())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  {} {:<8} {:<13} {}",
        style_label(&band.position().to_string()),
        display_name(spec.name),
        band.to_string(),
        value
    );
}

pub(crate) fn print_result(result: &ResistanceResult) {
    let value = format!("{} {}", format_magnitude(result.magnitude), result.unit);
    println!("{} {}", value.bold(), result.tolerance);
}

/// One reference table row; missing roles show "-"
pub(crate) fn print_table_row(spec: &ColorSpec, widths: &[usize; 4]) {
    let cell = |role: Role| spec.value_label(role).unwrap_or_else(|| "-".to_string());
    println!(
        "{} {:<w0$} {:>w1$} {:>w2$} {:>w3$}",
        swatch(spec, "  "),
        display_name(spec.name),
        cell(Role::Digit),
        cell(Role::Multiplier),
        cell(Role::Tolerance),
        w0 = widths[0] - 3,
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
}

pub(crate) fn print_table_header(widths: &[usize; 4]) {
    println!(
        "{:<w0$} {:>w1$} {:>w2$} {:>w3$}",
        "Color",
        "Digit",
        "Multiplier",
        "Tolerance",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
}

/// "Brown (1)" style option label
pub(crate) fn option_label(spec: &ColorSpec, role: Role) -> String {
    match spec.value_label(role) {
        Some(value) => format!("{} ({})", display_name(spec.name), value),
        None => display_name(spec.name),
    }
}

pub(crate) fn print_legend() {
    println!("Bands 1-2: significant digits");
    println!("Band 3: multiplier applied to the two digits");
    println!("Band 4: tolerance (does not affect the value)");
}
