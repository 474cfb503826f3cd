use serde::{Deserialize, Serialize};
use std::fmt;

/// A blockchain network identifier. Token lists record either a numeric
/// network id (`1`) or a registry name (`"solana"`); both forms are accepted
/// and rendered back verbatim as the chain's output directory segment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ChainId {
    Numeric(u64),
    Named(String),
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainId::Numeric(id) => write!(f, "{}", id),
            ChainId::Named(name) => write!(f, "{}", name),
        }
    }
}
