use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use duotone::backends::cava::CavaBackend;
use duotone::backends::GradientBackend;
use duotone::cli::Args;
use duotone::error::DumpError;
use duotone::source::{load_image, DumpReader};
use duotone::{extract_pair, PipelineConfig, Sample};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = args.pipeline_config();
    config.validate()?;

    if args.stdin {
        run_stdin(&args, &config)
    } else {
        let path = args.image.as_deref().context("no input image given")?;
        let pixels = load_image(path)?;
        emit(&pixels, &config, &args)
    }
}

/// Warnings only by default, `debug` with `-d`; `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_stdin(args: &Args, config: &PipelineConfig) -> Result<()> {
    let mut reader = DumpReader::new(std::io::stdin().lock());
    if let Some(player) = &args.player {
        reader = reader.with_player(player.clone());
    }

    if !args.follow {
        let Some(pixels) = reader.next_dump()? else {
            bail!("no pixel dump found on stdin");
        };
        return emit(&pixels, config, args);
    }

    for dump in reader {
        let pixels = match dump {
            Ok(pixels) => pixels,
            Err(e @ DumpError::Malformed { .. }) => {
                warn!("skipping dump: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = emit(&pixels, config, args) {
            warn!("skipping image: {e:#}");
        }
    }
    Ok(())
}

/// Pick the pair for one image, print it, and update the cava config if asked.
fn emit(pixels: &[Sample], config: &PipelineConfig, args: &Args) -> Result<()> {
    let [dark, light] = extract_pair(pixels, config)?.to_colors();

    let mut out = std::io::stdout().lock();
    writeln!(out, "{dark}")?;
    writeln!(out, "{light}")?;
    out.flush()?;

    if let Some(path) = &args.config {
        CavaBackend.write_to([dark, light], path)?;
    } else if args.install {
        CavaBackend.install([dark, light])?;
    }
    Ok(())
}
