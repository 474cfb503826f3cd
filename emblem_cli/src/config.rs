//! EmblemCli Config
//!
//! See instructions in `commands.rs` to specify the path to your
//! application's configuration file and/or command-line options
//! for specifying it.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// EmblemCli Configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EmblemCliConfig {
    /// Asset build related config
    pub build: BuildSection,
}

/// Directories consumed and produced by the `build` command
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Directory holding one subdirectory per company, each with a
    /// `tokens.json` token list
    pub company_dir: PathBuf,

    /// Output root receiving `<chain>/<address>/` artifact directories
    pub tokens_dir: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            company_dir: PathBuf::from("company"),
            tokens_dir: PathBuf::from("tokens"),
        }
    }
}
