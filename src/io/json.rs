//! JSON input and output.
//!
//! Room parameters use the camelCase field names of the input form, e.g.
//! `{"floorWidth": 2000, "floorLength": 1500, ...}`. Missing fields are
//! allowed here and reported by validation.

use crate::draw::RenderConfig;
use crate::estimate::{CalculationBundle, RoomTileParams};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads room parameters from a JSON file.
///
/// # Example
/// ```no_run
/// use tilecalc::io::read_params;
/// use std::path::Path;
///
/// let params = read_params(Path::new("bathroom.json")).unwrap();
/// println!("Floor width: {:?}", params.floor_width);
/// ```
pub fn read_params(path: &Path) -> Result<RoomTileParams> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let params: RoomTileParams = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse room parameters from: {}", path.display()))?;
    log::debug!("Read room parameters from {}", path.display());

    Ok(params)
}

/// Writes room parameters to a JSON file.
pub fn write_params(path: &Path, params: &RoomTileParams) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, params)
        .with_context(|| format!("Failed to write room parameters to: {}", path.display()))?;

    Ok(())
}

/// Parses room parameters from a JSON string.
pub fn params_from_str(json: &str) -> Result<RoomTileParams> {
    serde_json::from_str(json).context("Failed to parse room parameters")
}

/// Writes an estimate (both surfaces and the measurements) to a JSON file.
pub fn write_bundle(path: &Path, bundle: &CalculationBundle) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, bundle)
        .with_context(|| format!("Failed to write estimate to: {}", path.display()))?;
    log::info!("Wrote estimate to {}", path.display());

    Ok(())
}

/// Serializes an estimate to a JSON string.
pub fn bundle_to_string(bundle: &CalculationBundle) -> Result<String> {
    serde_json::to_string_pretty(bundle).context("Failed to serialize estimate")
}

/// Reads drawing settings from a JSON file. Keys that are left out keep their defaults.
pub fn read_render_config(path: &Path) -> Result<RenderConfig> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse render config from: {}", path.display()))
}
