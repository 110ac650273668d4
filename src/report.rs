//! Plain-text presentation of estimates and validation errors.

use crate::estimate::{CalculationBundle, ValidationError};
use std::fmt;

/// Formats a tile count with comma thousands separators, e.g. `12,345`.
pub fn format_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if count < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable result of one estimate.
pub struct Summary<'a>(pub &'a CalculationBundle);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Summary(bundle) = self;
        let (floor, wall) = (&bundle.floor, &bundle.wall);
        writeln!(f, "Floor tiles: {}", format_count(floor.tiles_needed))?;
        writeln!(
            f,
            "  {} without waste, {}% waste allowance",
            format_count(floor.tiles_without_waste),
            floor.waste_allowance_percent
        )?;
        writeln!(f, "  Floor area: {} m²", floor.area_text())?;
        writeln!(f, "Wall tiles: {}", format_count(wall.tiles_needed))?;
        writeln!(
            f,
            "  {} without waste, {}% waste allowance",
            format_count(wall.tiles_without_waste),
            wall.waste_allowance_percent
        )?;
        write!(f, "  Wall area: {} m²", wall.area_text())?;
        if let (Some(total), Some(door)) = (wall.total_area_text(), wall.door_area_text()) {
            write!(f, " ({total} m² walls - {door} m² door)")?;
        }
        Ok(())
    }
}

/// Lists validation errors as bullet points under a heading.
pub fn error_list(err: &ValidationError) -> String {
    let mut out = String::from("Please fix the following errors:\n\n");
    for e in &err.errors {
        out.push_str(&format!("• {e}\n"));
    }
    out
}
