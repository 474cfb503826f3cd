//! Models and loading for per-company token lists
use crate::{chain::ChainId, error::CompanyConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The token list for one company, parsed from its `tokens.json`
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TokenList {
    pub tokens: Vec<Token>,
}

/// Describes one asset to process: the chain it lives on, its on-chain
/// address, and the URL its logo can be fetched from
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Token {
    pub chain: ChainId,
    pub address: String,
    pub logo: String,
}

/// Builds the conventional path of a company's token list,
/// `<company_dir>/<name>/tokens.json`
pub fn tokens_path(company_dir: &Path, name: &str) -> PathBuf {
    company_dir.join(name).join("tokens.json")
}

/// Loads and validates the token list for the named company.
///
/// # Arguments
///
/// * `company_dir` - The directory holding one subdirectory per company.
/// * `name` - The company name. Must match the name of the company's folder
/// under `company_dir`.
pub fn get_tokens(company_dir: &Path, name: &str) -> Result<TokenList, CompanyConfigError> {
    let path = tokens_path(company_dir, name);
    if !path.exists() {
        return Err(CompanyConfigError::NotFound(name.to_string()));
    }

    let content =
        std::fs::read_to_string(&path).map_err(|err| CompanyConfigError::FileIO(err.to_string()))?;

    Ok(serde_json::from_str(&content)?)
}

/// Lists the companies that have a token list under `company_dir`, sorted by
/// name. A missing company directory yields an empty list.
pub fn list_companies(company_dir: &Path) -> Result<Vec<String>, CompanyConfigError> {
    let mut names = Vec::new();
    if !company_dir.exists() {
        return Ok(names);
    }

    let entries =
        std::fs::read_dir(company_dir).map_err(|err| CompanyConfigError::FileIO(err.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|err| CompanyConfigError::FileIO(err.to_string()))?;
        let path = entry.path();
        if path.is_dir() && path.join("tokens.json").exists() {
            if let Some(name) = path.file_name() {
                names.push(name.to_string_lossy().into_owned());
            }
        }
    }
    names.sort();

    Ok(names)
}
