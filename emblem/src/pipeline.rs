//! The per-token asset pipeline
use crate::{company::Token, error::PipelineError, fetch, raster, trace};
use std::fs;
use std::path::{Path, PathBuf};

/// Addresses of exactly this length are assumed to be 0x-prefixed hex and
/// therefore case insensitive
const HEX_ADDRESS_LEN: usize = 42;

pub const LOGO_PNG: &str = "logo.png";
pub const LOGO_SVG: &str = "logo.svg";
pub const LOGO_32_PNG: &str = "logo-32.png";
pub const LOGO_128_PNG: &str = "logo-128.png";

/// Filesystem layout of one token's artifacts under the tokens directory
#[derive(Clone, Debug)]
pub struct TokenArtifacts {
    pub chain_dir: PathBuf,
    pub token_dir: PathBuf,
    /// The downloaded original, kept only while the token is processed
    pub original: PathBuf,
    pub png: PathBuf,
    pub svg: PathBuf,
    pub png_32: PathBuf,
    pub png_128: PathBuf,
}

impl TokenArtifacts {
    /// Resolves the artifact paths for `token` under `tokens_dir`. Nothing
    /// is created on disk.
    pub fn new(token: &Token, tokens_dir: &Path) -> Result<TokenArtifacts, PipelineError> {
        let chain_dir = tokens_dir.join(token.chain.to_string());
        let token_dir = chain_dir.join(normalize_address(&token.address));
        let ext = fetch::logo_extension(&token.logo)?;

        Ok(TokenArtifacts {
            original: token_dir.join(format!("temp{}", ext)),
            png: token_dir.join(LOGO_PNG),
            svg: token_dir.join(LOGO_SVG),
            png_32: token_dir.join(LOGO_32_PNG),
            png_128: token_dir.join(LOGO_128_PNG),
            chain_dir,
            token_dir,
        })
    }

    fn create_dirs(&self) -> Result<(), PipelineError> {
        if !self.chain_dir.exists() {
            fs::create_dir_all(&self.chain_dir)
                .map_err(|err| PipelineError::FileIO(err.to_string()))?;
        }
        if !self.token_dir.exists() {
            fs::create_dir(&self.token_dir)
                .map_err(|err| PipelineError::FileIO(err.to_string()))?;
        }

        Ok(())
    }
}

/// Addresses of exactly 42 characters are lowercased so their path segments
/// are case insensitive; any other address format is used verbatim.
pub fn normalize_address(address: &str) -> String {
    if address.len() == HEX_ADDRESS_LEN {
        address.to_lowercase()
    } else {
        address.to_string()
    }
}

/// Builds the full artifact set for one token: creates its chain and token
/// directories, fetches the logo, converts it to PNG, writes the 128x128 and
/// 32x32 thumbnails, traces an SVG, and removes the temporary download.
/// Existing artifacts are overwritten.
///
/// A failed token may leave its directories, and the temporary download,
/// behind; a later successful run overwrites both.
pub async fn build_token_assets(
    token: &Token,
    tokens_dir: &Path,
) -> Result<TokenArtifacts, PipelineError> {
    let artifacts = TokenArtifacts::new(token, tokens_dir)?;
    artifacts.create_dirs()?;

    let bytes = fetch::get_logo(&token.logo).await?;
    fs::write(&artifacts.original, &bytes).map_err(|err| PipelineError::FileIO(err.to_string()))?;

    process_original(&artifacts)?;

    Ok(artifacts)
}

/// Runs the conversion chain on an already-downloaded original: PNG
/// conversion, both thumbnails, the SVG trace, and temp-file cleanup.
pub fn process_original(artifacts: &TokenArtifacts) -> Result<(), PipelineError> {
    raster::to_png(&artifacts.original, &artifacts.png)?;
    raster::resize(&artifacts.png, &artifacts.png_128, 128)?;
    raster::resize(&artifacts.png, &artifacts.png_32, 32)?;
    trace::to_svg(&artifacts.png, &artifacts.svg)?;

    fs::remove_file(&artifacts.original).map_err(|err| PipelineError::FileIO(err.to_string()))?;

    Ok(())
}
