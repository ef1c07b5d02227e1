use std::io::stdout;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shadegen::cli::Args;
use shadegen::color::Color;
use shadegen::export::{self, ExportFormat};
use shadegen::parse::parse;
use shadegen::pipeline::classify::classify;
use shadegen::pipeline::contrast::build_matrix;
use shadegen::pipeline::generate::generate_with;
use shadegen::preview;
use shadegen::record::PaletteRecord;
use shadegen::scale::LevelSet;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let base = match args.color.as_deref() {
        Some(input) => parse(input).with_context(|| format!("invalid color `{input}`"))?,
        None => {
            let base = Color::random(&mut rand::rng());
            info!(%base, "picked random base color");
            base
        }
    };
    let secondary = args
        .secondary
        .as_deref()
        .map(parse)
        .transpose()
        .context("invalid secondary color")?;

    let set = if args.classic {
        LevelSet::Classic
    } else {
        LevelSet::Extended
    };
    let scale = generate_with(base, set);
    let nearest = classify(base);
    let name = args.name.clone().unwrap_or_else(|| nearest.palette.to_string());

    if args.classify {
        println!("Mapped color: {nearest}");
    }
    if args.preview {
        preview::write_swatches(&mut stdout(), &scale, secondary)
            .context("failed to write preview")?;
    }
    if args.contrast {
        println!("{}", build_matrix(&scale, secondary).render());
    }
    if args.record {
        let record = PaletteRecord::with_level_set(name.clone(), base, secondary, set);
        println!("{}", record.to_json()?);
    }

    if args.wants_export() {
        let format = args.format.unwrap_or(ExportFormat::TailwindHex);
        let text = export::serialize(&scale, &name, secondary, format);
        match &args.output {
            Some(path) => {
                std::fs::write(path, format!("{text}\n"))
                    .with_context(|| format!("failed to write export to {}", path.display()))?;
                info!(path = %path.display(), %format, "wrote export");
                eprintln!("wrote {}", path.display());
            }
            None => println!("{text}"),
        }
    }

    Ok(())
}

/// Log to stderr so stdout carries only the requested output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
