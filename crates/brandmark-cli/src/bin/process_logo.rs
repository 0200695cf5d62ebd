//! `process-logo` - zoom the orange logo and save it as WebP.

use std::io;
use std::path::Path;

use brandmark_cli::{logging, process};

fn main() {
    logging::init();

    let mut stdout = io::stdout().lock();
    if let Err(err) = process::run(
        Path::new(process::INPUT_PATH),
        Path::new(process::OUTPUT_PATH),
        &mut stdout,
    ) {
        tracing::error!("failed to print status: {err}");
    }
}
