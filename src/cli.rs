//! Command-line argument parsing for the `tilecalc` binary.

use crate::draw::View;
use crate::estimate::{Field, RoomTileParams};
use crate::io::read_params;
use anyhow::{Context, Result, anyhow, bail};
use std::path::PathBuf;

/// Default drawing size in pixels.
pub const DEFAULT_WIDTH: f64 = 1000.;
pub const DEFAULT_HEIGHT: f64 = 600.;

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    /// JSON file with room parameters
    pub params_file: Option<PathBuf>,

    /// Single fields given as `--floor-width 2000`, applied after the file
    pub overrides: Vec<(Field, String)>,

    /// Only draw this view (both when unset)
    pub view: Option<View>,

    /// Directory for the SVG drawings
    pub out_dir: PathBuf,

    /// Skip drawing
    pub no_draw: bool,

    pub width: f64,
    pub height: f64,

    /// Drawing settings (JSON)
    pub config_file: Option<PathBuf>,

    /// Seed for reproducible tile colors
    pub seed: Option<u64>,

    /// Print the estimate as JSON instead of text
    pub json: bool,

    pub help: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            params_file: None,
            overrides: Vec::new(),
            view: None,
            out_dir: PathBuf::from("."),
            no_draw: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            config_file: None,
            seed: None,
            json: false,
            help: false,
        }
    }
}

impl Cli {
    /// Parses the process arguments.
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parses arguments, not including the program name.
    pub fn parse_from<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut cli = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("{name} requires a value"))
            };
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "--json" => cli.json = true,
                "--no-draw" => cli.no_draw = true,
                "-v" | "--view" => {
                    cli.view = Some(value("--view")?.parse::<View>().map_err(|e: String| anyhow!(e))?)
                }
                "-o" | "--out" => cli.out_dir = PathBuf::from(value("--out")?),
                "-c" | "--config" => cli.config_file = Some(PathBuf::from(value("--config")?)),
                "--width" => cli.width = parse_pixels("--width", &value("--width")?)?,
                "--height" => cli.height = parse_pixels("--height", &value("--height")?)?,
                "--seed" => {
                    let v = value("--seed")?;
                    cli.seed = Some(v.parse::<u64>().with_context(|| format!("Invalid seed: {v}"))?);
                }
                flag if flag.starts_with("--") => {
                    let field: Field = flag[2..]
                        .parse()
                        .map_err(|_| anyhow!("Unknown flag: {flag}. Use --help for usage."))?;
                    cli.overrides.push((field, value(flag)?));
                }
                flag if flag.starts_with('-') => {
                    bail!("Unknown flag: {flag}. Use --help for usage.");
                }
                _ => {
                    if cli.params_file.is_some() {
                        bail!("Only one parameter file can be given");
                    }
                    cli.params_file = Some(PathBuf::from(arg));
                }
            }
        }

        Ok(cli)
    }

    /// Room parameters from the file and field flags.
    ///
    /// Without either, the example bathroom is used.
    pub fn room_params(&self) -> Result<RoomTileParams> {
        let mut params = match &self.params_file {
            Some(path) => read_params(path)?,
            None if self.overrides.is_empty() => RoomTileParams::example(),
            None => RoomTileParams::default(),
        };
        for (field, text) in &self.overrides {
            params.set_from_str(*field, text);
        }
        Ok(params)
    }

    pub fn usage() -> String {
        let mut s = String::from(
            "tilecalc - bathroom tile estimator\n\n\
             Usage: tilecalc [OPTIONS] [PARAMS.json]\n\n\
             Options:\n\
             \x20 -h, --help          Show this help message\n\
             \x20 -v, --view VIEW     Draw only `floor` or `walls`\n\
             \x20 -o, --out DIR       Directory for SVG drawings (default: .)\n\
             \x20     --no-draw       Only print the estimate\n\
             \x20     --width PX      Drawing width (default: 1000)\n\
             \x20     --height PX     Drawing height (default: 600)\n\
             \x20 -c, --config FILE   Drawing settings (JSON)\n\
             \x20     --seed N        Seed for tile color variation\n\
             \x20     --json          Print the estimate as JSON\n\n\
             Room measurements in millimeters:\n",
        );
        for field in Field::ALL {
            s.push_str(&format!("      --{} MM\n", field.form_id()));
        }
        s
    }
}

fn parse_pixels(name: &str, text: &str) -> Result<f64> {
    let px = text
        .parse::<f64>()
        .with_context(|| format!("Invalid {name}: {text}"))?;
    if !(px.is_finite() && px > 0.) {
        bail!("{name} must be a positive number of pixels");
    }
    Ok(px)
}
