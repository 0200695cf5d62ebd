//! Zoom the orange logo and convert it to WebP.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use brandmark_core::encode::WEBP_MAX_QUALITY;
use brandmark_core::transform::apply_zoom_plan;
use brandmark_core::{load_rgba, save, FilterType, OutputFormat, ZoomPlan, ZOOM_FACTOR};
use tracing::{error, warn};

pub const INPUT_PATH: &str = "public/fc_logo_orange.png";
pub const OUTPUT_PATH: &str = "public/fc_logo_orange.webp";

/// Zoom `input` into `output`, printing progress lines to `out`.
///
/// A missing input is reported as `Error: <path> not found.` before anything
/// is read or written. Every later failure is reported as
/// `An error occurred: <message>` and swallowed. The only error returned is
/// a failure to write a status line.
pub fn run(input: &Path, output: &Path, out: &mut impl Write) -> io::Result<()> {
    if !input.exists() {
        warn!(input = %input.display(), "input missing, nothing written");
        return writeln!(out, "Error: {} not found.", input.display());
    }

    if let Err(err) = process(input, output, &mut *out) {
        error!(input = %input.display(), "zoom failed: {err:#}");
        writeln!(out, "An error occurred: {err:#}")?;
    }
    Ok(())
}

fn process(input: &Path, output: &Path, out: &mut impl Write) -> Result<()> {
    let image =
        load_rgba(input).with_context(|| format!("failed to load {}", input.display()))?;
    writeln!(out, "Original size: {}x{}", image.width, image.height)?;

    let plan = ZoomPlan::new(image.width, image.height, ZOOM_FACTOR)?;
    writeln!(out, "Cropping to: {}", plan.crop_box)?;

    let zoomed = apply_zoom_plan(&image, &plan, FilterType::Lanczos3)?;
    save(
        &zoomed.image,
        output,
        OutputFormat::WebP {
            quality: WEBP_MAX_QUALITY,
        },
    )
    .with_context(|| format!("failed to save {}", output.display()))?;

    writeln!(out, "Saved zoomed logo to {}", output.display())?;
    Ok(())
}
