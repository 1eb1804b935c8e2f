use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use baylights::config::{BearingReference, DegreeWindow, LayoutConfig, LayoutPreset, StripPlacement};
use baylights::layout::{DelaySource, OffsetDelay};
use baylights::output::{OutputFormat, Renderer, create_renderer, write_artifacts};
use baylights::{LightsProcessor, input};

#[derive(Parser, Debug)]
#[command(name = "baylights")]
#[command(about = "Lay out navigational lights on a compass strip", long_about = None)]
struct Args {
    /// CSV file of lights; the first data row is the viewing location
    #[arg(default_value = "DelawareBayLights.csv")]
    input: PathBuf,

    /// Directory for rendered files
    #[arg(short = 'o', long, default_value = "docs")]
    output_dir: PathBuf,

    /// Output format: xhtml, json, text
    #[arg(short = 'f', long, value_enum, default_value = "xhtml")]
    format: OutputFormat,

    /// Layout preset: detailed, simplified
    #[arg(short = 'p', long, value_enum, default_value = "detailed")]
    preset: LayoutPreset,

    /// TOML layout file (overrides the preset)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Degree window shown on the strip (e.g. "-95..90", or "-90..=90" to
    /// include the maximum)
    #[arg(long, allow_hyphen_values = true)]
    window: Option<DegreeWindow>,

    /// Pixels per degree
    #[arg(long)]
    scale: Option<f64>,

    /// Lay out against true or magnetic north
    #[arg(short = 'r', long, value_enum)]
    reference: Option<BearingReference>,

    /// Wrap outside bearings into the window, or onto the full compass turn
    #[arg(long, value_enum)]
    placement: Option<StripPlacement>,

    /// Draw animation delays at random instead of using each light's offset
    #[cfg(feature = "random-delay")]
    #[arg(long)]
    random_delay: bool,

    /// Seed for --random-delay
    #[cfg(feature = "random-delay")]
    #[arg(long, requires = "random_delay")]
    seed: Option<u64>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = build_config(&args)?;
    let processor = LightsProcessor::new(config)?;

    let rows = input::read_rows_from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let mut delays = delay_source(&args, processor.config());
    let layout = processor
        .process(&rows, &mut *delays)
        .with_context(|| format!("laying out {}", args.input.display()))?;

    let artifacts = create_renderer(args.format).render(&layout)?;
    write_artifacts(&args.output_dir, &artifacts)
        .with_context(|| format!("writing to {}", args.output_dir.display()))?;

    println!(
        "{} lights -> {}",
        layout.entries.len(),
        args.output_dir.display()
    );
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<LayoutConfig> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LayoutConfig::from_preset(args.preset),
    };

    if let Some(window) = args.window {
        config.window = window;
    }
    if let Some(scale) = args.scale {
        config.pixels_per_degree = scale;
    }
    if let Some(reference) = args.reference {
        config.reference = reference;
    }
    if let Some(placement) = args.placement {
        config.placement = placement;
    }
    Ok(config)
}

#[cfg(feature = "random-delay")]
fn delay_source(args: &Args, config: &LayoutConfig) -> Box<dyn DelaySource> {
    use baylights::layout::RandomDelay;

    if !args.random_delay {
        return Box::new(OffsetDelay);
    }
    match args.seed {
        Some(seed) => Box::new(RandomDelay::seeded(seed, config.max_random_delay_millis)),
        None => Box::new(RandomDelay::from_entropy(config.max_random_delay_millis)),
    }
}

#[cfg(not(feature = "random-delay"))]
fn delay_source(_args: &Args, _config: &LayoutConfig) -> Box<dyn DelaySource> {
    Box::new(OffsetDelay)
}
