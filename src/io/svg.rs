use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes an SVG document (see [`crate::draw::SvgSurface::to_svg`]) to a file.
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).with_context(|| format!("Failed to write drawing: {}", path.display()))?;
    log::info!("Wrote drawing to {}", path.display());
    Ok(())
}
