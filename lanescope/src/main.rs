use std::path::PathBuf;

use anyhow::{anyhow, Result};

use lanescope_graphics::{LaneRenderer, SvgSurface};

use crate::sheet::parse::parse_sheet_file;

mod sheet;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    sheet_path: PathBuf,
    output_path: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <sheet-file> [<output.svg>]")
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Option<CliOptions> {
    let sheet_path = PathBuf::from(args.next()?);
    let output_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        return None;
    }

    Some(CliOptions {
        sheet_path,
        output_path,
    })
}

fn run(options: CliOptions) -> Result<()> {
    let sheet = parse_sheet_file(&options.sheet_path)?;
    let output_path = options
        .output_path
        .unwrap_or_else(|| sheet.output_path_or_default());

    let mut renderer = LaneRenderer::new(SvgSurface::new(), sheet.scale);
    let report = renderer.render(&sheet.layers, &sheet.shots);
    if !report.warnings.is_empty() {
        log::warn!(
            "{} of {} shot(s) could not be traced",
            report.warnings.len(),
            sheet.shots.len()
        );
    }

    renderer.into_surface().write_to_file(&output_path)
}

fn main() {
    let env = env_logger::Env::default()
        .filter_or("LANESCOPE_LOG", "info")
        .write_style_or("LANESCOPE_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| String::from("lanescope"));

    let result = parse_options(args)
        .ok_or_else(|| anyhow!(usage(&program)))
        .and_then(run);

    if let Err(err) = result {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
