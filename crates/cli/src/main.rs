mod source;

use std::io::Write;
use std::path::PathBuf;

use alloc_heatmap_core::{HeatmapConfig, HeatmapRenderer, RangePolicy, SvgSurface};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::source::FileSource;

#[derive(Parser, Debug)]
#[command(name = "alloc-heatmap", version, about = "Render a saved /getalloc snapshot as an SVG heatmap", long_about = None)]
struct Args {
    /// Saved `/getalloc` response body, `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file, stdout when omitted
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Keep samples outside [0,1] and extrapolate their color
    #[arg(long)]
    extrapolate: bool,

    /// Cells per grid row
    #[arg(long)]
    columns: Option<usize>,

    /// Emit render commands as JSON instead of SVG
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let rendered = render(&args, config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Config file first, then command-line overrides.
fn build_config(args: &Args) -> Result<HeatmapConfig> {
    let mut config = match &args.config {
        Some(path) => HeatmapConfig::load_from_file(path)?,
        None => HeatmapConfig::default(),
    };
    if args.extrapolate {
        config.range_policy = RangePolicy::Extrapolate;
    }
    if let Some(columns) = args.columns {
        config.column_size = columns;
    }
    config.validate()?;
    Ok(config)
}

fn render(args: &Args, config: HeatmapConfig) -> Result<String> {
    let source = FileSource::new(&args.input);
    let mut renderer = HeatmapRenderer::new(config, SvgSurface::new())?;
    futures::executor::block_on(renderer.load_and_render(&source))
        .with_context(|| format!("failed to render {}", args.input.display()))?;

    let surface = renderer.into_surface();
    if args.json {
        Ok(serde_json::to_string(surface.commands())?)
    } else {
        Ok(surface.to_svg())
    }
}
