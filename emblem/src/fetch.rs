//! Retrieval of logo images over HTTP
use crate::error::FetchError;
use std::path::Path;
use url::Url;

/// Fetches the raw bytes of a logo. Non-success responses are treated as
/// request errors.
pub async fn get_logo(logo_url: &str) -> Result<Vec<u8>, FetchError> {
    let url = Url::parse(logo_url)?;
    let response = reqwest::get(url).await?.error_for_status()?;

    Ok(response.bytes().await?.to_vec())
}

/// Extension of the logo file as named by the URL path, dot included.
/// Empty when the path has no extension.
pub fn logo_extension(logo_url: &str) -> Result<String, FetchError> {
    let url = Url::parse(logo_url)?;

    Ok(Path::new(url.path())
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;

    #[assay]
    fn extracts_extension_from_url_path() {
        assert_eq!(
            logo_extension("https://assets.example.com/logos/usdc.png").unwrap(),
            ".png"
        );
        assert_eq!(
            logo_extension("https://assets.example.com/logos/weth.jpeg").unwrap(),
            ".jpeg"
        );
    }

    #[assay]
    fn query_strings_are_not_part_of_the_extension() {
        assert_eq!(
            logo_extension("https://assets.example.com/logos/usdc.png?size=256").unwrap(),
            ".png"
        );
    }

    #[assay]
    fn missing_extension_is_empty() {
        assert_eq!(
            logo_extension("https://assets.example.com/logos/usdc").unwrap(),
            ""
        );
    }

    #[assay]
    fn invalid_urls_are_rejected() {
        assert!(matches!(
            logo_extension("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
