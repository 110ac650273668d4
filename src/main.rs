use anyhow::{Context, Result};
use std::fs;
use std::process::ExitCode;
use tilecalc::cli::Cli;
use tilecalc::draw::{RandomJitter, RenderConfig, Renderer, SvgSurface, View};
use tilecalc::io::{bundle_to_string, read_render_config, write_svg};
use tilecalc::report::{Summary, error_list};
use tilecalc::{compute_all, validate};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse()?;
    if cli.help {
        print!("{}", Cli::usage());
        return Ok(ExitCode::SUCCESS);
    }

    let params = cli.room_params()?;
    let valid = match validate(&params) {
        Ok(valid) => valid,
        Err(err) => {
            eprint!("{}", error_list(&err));
            return Ok(ExitCode::FAILURE);
        }
    };
    let bundle = compute_all(&valid);

    if cli.json {
        println!("{}", bundle_to_string(&bundle)?);
    } else {
        println!("{}", Summary(&bundle));
    }

    if cli.no_draw {
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &cli.config_file {
        Some(path) => read_render_config(path)?,
        None => RenderConfig::new(),
    };
    let mut renderer = Renderer::new(SvgSurface::new(cli.width, cli.height)).with_config(config);
    if let Some(seed) = cli.seed {
        renderer = renderer.with_jitter(RandomJitter::seeded(seed));
    }

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create directory: {}", cli.out_dir.display()))?;
    let views = match cli.view {
        Some(view) => vec![view],
        None => vec![View::Floor, View::Walls],
    };
    for view in views {
        renderer.draw(&bundle, view);
        let path = cli.out_dir.join(format!("{view}.svg"));
        write_svg(&path, &renderer.surface().to_svg())?;
    }

    Ok(ExitCode::SUCCESS)
}
