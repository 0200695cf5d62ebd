//! Brandmark CLI - the logo scripts
//!
//! Two standalone, argument-free scripts built on `brandmark-core`:
//!
//! - `colorize-logo` ([`colorize`]) - recolor the white transparent logo to
//!   the brand orange, keeping its alpha
//! - `process-logo` ([`process`]) - zoom the orange logo to its centered
//!   90% and re-encode it as WebP
//!
//! Each script reports progress as plain lines on stdout. Failures are
//! reported the same way and never change the exit status.

pub mod colorize;
pub mod logging;
pub mod process;
