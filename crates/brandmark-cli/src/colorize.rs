//! Recolor the white-on-transparent logo to the brand orange.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use brandmark_core::{load_rgba, recolor_opaque, save, OutputFormat, BRAND_ORANGE};
use tracing::{debug, error};

pub const INPUT_PATH: &str = "public/FC logo white on transparent.png";
pub const OUTPUT_PATH: &str = "public/fc_logo_orange_transparent.png";

/// Recolor `input` into `output`, printing one status line to `out`.
///
/// Any failure is reported as `Error: <message>` and swallowed. The only
/// error returned is a failure to write the status line itself.
pub fn run(input: &Path, output: &Path, out: &mut impl Write) -> io::Result<()> {
    match colorize(input, output) {
        Ok(()) => writeln!(
            out,
            "Saved transparent orange logo to {}",
            output.display()
        ),
        Err(err) => {
            error!(input = %input.display(), "recolor failed: {err:#}");
            writeln!(out, "Error: {err:#}")
        }
    }
}

fn colorize(input: &Path, output: &Path) -> Result<()> {
    let format = OutputFormat::from_path(output)?;

    let mut image =
        load_rgba(input).with_context(|| format!("failed to load {}", input.display()))?;
    let recolored = recolor_opaque(&mut image, BRAND_ORANGE);
    debug!(recolored, format = format.name(), "saving recolored logo");

    save(&image, output, format)
        .with_context(|| format!("failed to save {}", output.display()))?;
    Ok(())
}
