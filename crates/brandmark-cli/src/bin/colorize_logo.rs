//! `colorize-logo` - recolor the transparent logo to the brand orange.

use std::io;
use std::path::Path;

use brandmark_cli::{colorize, logging};

fn main() {
    logging::init();

    let mut stdout = io::stdout().lock();
    if let Err(err) = colorize::run(
        Path::new(colorize::INPUT_PATH),
        Path::new(colorize::OUTPUT_PATH),
        &mut stdout,
    ) {
        tracing::error!("failed to print status: {err}");
    }
}
