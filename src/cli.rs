use std::path::PathBuf;

use clap::Parser;

use crate::export::ExportFormat;

/// Build a tonal color scale from one base color and export it.
#[derive(Parser, Debug)]
#[command(name = "shadegen", version, about)]
pub struct Args {
    /// Base color: hex, rgb(), hsl(), or a CSS color name
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    pub color: Option<String>,

    /// Start from a random base color
    #[arg(long)]
    pub random: bool,

    /// Secondary color exported alongside the scale
    #[arg(short, long)]
    pub secondary: Option<String>,

    /// Palette name used in the export (defaults to the nearest catalog family)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Export format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write the export to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop at 900 instead of 950
    #[arg(long)]
    pub classic: bool,

    /// Print the pairwise contrast grid
    #[arg(long)]
    pub contrast: bool,

    /// Print the nearest named catalog color
    #[arg(long)]
    pub classify: bool,

    /// Print a colored terminal preview of the scale
    #[arg(long)]
    pub preview: bool,

    /// Print the palette as a storage record (JSON)
    #[arg(long, conflicts_with = "output")]
    pub record: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// No view was requested explicitly, or an export target was.
    pub fn wants_export(&self) -> bool {
        let views = self.contrast || self.classify || self.preview || self.record;
        self.format.is_some() || self.output.is_some() || !views
    }
}
