//! Packed realm attributes keyed by realm id, as shipped in
//! `data/realms_bit.json`.

use {
    number::{Uint256, serialization::HexOrDecimalFelt},
    serde::Deserialize,
    serde_with::serde_as,
    starknet::core::types::Felt,
    std::{
        collections::HashMap,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no realm data recorded for realm {0}")]
    NotFound(Uint256),
    #[error("failed to read realm data {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("realm data {path:?} is malformed")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RealmData(#[serde_as(as = "HashMap<_, HexOrDecimalFelt>")] HashMap<String, Felt>);

impl RealmData {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let data: Self = serde_json::from_str(&contents).map_err(|source| Error::Malformed {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), realms = data.0.len(), "loaded realm data");
        Ok(data)
    }

    /// Packed attributes of `realm_id`.
    pub fn get(&self, realm_id: &Uint256) -> Result<Felt, Error> {
        self.0
            .get(&realm_id.to_string())
            .copied()
            .ok_or(Error::NotFound(*realm_id))
    }
}
