//! Main entry point for EmblemCli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use emblem_cli::application::APP;

/// Boot EmblemCli
fn main() {
    abscissa_core::boot(&APP);
}
