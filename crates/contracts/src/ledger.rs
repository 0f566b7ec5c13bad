//! File backed record of declared classes and deployed contracts, one JSON
//! file per network.
//!
//! Deployments are append-only per label: deploying again under a label that
//! already exists adds a new entry and resolution returns the most recent one.

use {
    chrono::{DateTime, Utc},
    number::serialization::HexOrDecimalFelt,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
    starknet::core::types::Felt,
    std::{
        collections::BTreeMap,
        io::{self, Write as _},
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no deployment recorded for {0:?}")]
    NotDeployed(String),
    #[error("no declared class hash recorded for {0:?}")]
    NotDeclared(String),
    #[error("failed to access ledger {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("ledger {path:?} is malformed")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Whether the ledger was readable but lacks the requested entry.
    pub fn is_missing_entry(&self) -> bool {
        matches!(self, Self::NotDeployed(_) | Self::NotDeclared(_))
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde_as(as = "HexOrDecimalFelt")]
    pub address: Felt,
    #[serde_as(as = "HexOrDecimalFelt")]
    pub class_hash: Felt,
    #[serde_as(as = "HexOrDecimalFelt")]
    pub transaction_hash: Felt,
    pub deployed_at: DateTime<Utc>,
}

#[serde_as]
#[derive(Debug, Default, Serialize, Deserialize)]
struct Contents {
    #[serde(default)]
    #[serde_as(as = "BTreeMap<_, HexOrDecimalFelt>")]
    classes: BTreeMap<String, Felt>,
    #[serde(default)]
    contracts: BTreeMap<String, Vec<Deployment>>,
}

#[derive(Clone, Debug)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger of `network` inside `dir`, i.e. `<dir>/<network>.json`.
    pub fn for_network(dir: &Path, network: &str) -> Self {
        Self::new(dir.join(format!("{network}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The class hash declared for `contract`.
    pub fn class_hash(&self, contract: &str) -> Result<Felt, Error> {
        self.load()?
            .classes
            .get(contract)
            .copied()
            .ok_or_else(|| Error::NotDeclared(contract.to_owned()))
    }

    /// Records the class hash under which `contract` was declared, replacing
    /// any previous declaration.
    pub fn declare(&self, contract: &str, class_hash: Felt) -> Result<(), Error> {
        let mut contents = self.load()?;
        contents.classes.insert(contract.to_owned(), class_hash);
        self.store(&contents)
    }

    /// Appends a deployment to the history of `label`.
    pub fn record(&self, label: &str, deployment: Deployment) -> Result<(), Error> {
        let mut contents = self.load()?;
        let history = contents.contracts.entry(label.to_owned()).or_default();
        if !history.is_empty() {
            tracing::warn!(
                label,
                previous = history.len(),
                "label already deployed, newest deployment takes precedence"
            );
        }
        history.push(deployment);
        self.store(&contents)
    }

    /// All deployments recorded under `label`, oldest first.
    pub fn history(&self, label: &str) -> Result<Vec<Deployment>, Error> {
        Ok(self
            .load()?
            .contracts
            .remove(label)
            .unwrap_or_default())
    }

    pub fn latest(&self, label: &str) -> Result<Deployment, Error> {
        self.history(label)?
            .pop()
            .ok_or_else(|| Error::NotDeployed(label.to_owned()))
    }

    fn load(&self) -> Result<Contents, Error> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Contents::default()),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&data).map_err(|source| Error::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes to a temporary file next to the ledger and renames it into
    /// place so readers never observe a partial file.
    fn store(&self, contents: &Contents) -> Result<(), Error> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let mut file =
            tempfile::NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        serde_json::to_writer_pretty(&mut file, contents).map_err(|source| Error::Malformed {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(b"\n")
            .map_err(|source| self.io_error(source))?;
        file.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;
        tracing::debug!(path = ?self.path, "updated ledger");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::AddressResolver, maplit::btreemap, tempfile::TempDir};

    fn deployment(address: u64) -> Deployment {
        Deployment {
            address: Felt::from(address),
            class_hash: Felt::from(0xc1a55u64),
            transaction_hash: Felt::from(address + 1),
            deployed_at: DateTime::from_timestamp(1_650_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn missing_file_is_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::for_network(dir.path(), "sepolia");

        assert_eq!(ledger.path(), dir.path().join("sepolia.json"));
        assert!(matches!(
            ledger.resolve("Realms_ERC721_Mintable"),
            Err(Error::NotDeployed(name)) if name == "Realms_ERC721_Mintable"
        ));
        assert!(matches!(
            ledger.class_hash("realms_erc721_stakeable"),
            Err(Error::NotDeclared(_))
        ));
        assert!(ledger.history("Realms_ERC721_Mintable").unwrap().is_empty());
    }

    #[test]
    fn records_and_resolves() {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::for_network(dir.path(), "devnet");

        ledger.declare("realms_erc721_stakeable", Felt::from(0xc1a55u64)).unwrap();
        ledger.record("realms_erc721_stakeable", deployment(0x1234)).unwrap();

        let reopened = Ledger::for_network(dir.path(), "devnet");
        assert_eq!(
            reopened.class_hash("realms_erc721_stakeable").unwrap(),
            Felt::from(0xc1a55u64)
        );
        assert_eq!(
            reopened.resolve("realms_erc721_stakeable").unwrap(),
            Felt::from(0x1234u64)
        );
    }

    #[test]
    fn repeated_deployments_append_and_latest_wins() {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::for_network(dir.path(), "devnet");

        ledger.record("realms_erc721_stakeable", deployment(0x1)).unwrap();
        ledger.record("realms_erc721_stakeable", deployment(0x2)).unwrap();

        assert_eq!(
            ledger.history("realms_erc721_stakeable").unwrap(),
            vec![deployment(0x1), deployment(0x2)]
        );
        assert_eq!(
            ledger.resolve("realms_erc721_stakeable").unwrap(),
            Felt::from(0x2u64)
        );
    }

    #[test]
    fn reads_hand_written_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sepolia.json");
        std::fs::write(
            &path,
            r#"{
                "classes": { "realms_erc721_stakeable": "0xc1a55" },
                "contracts": {
                    "Realms_ERC721_Mintable": [{
                        "address": "0x4d2",
                        "class_hash": "10",
                        "transaction_hash": "0x1",
                        "deployed_at": "2022-04-15T05:20:00Z"
                    }]
                }
            }"#,
        )
        .unwrap();
        let ledger = Ledger::new(&path);

        assert_eq!(
            ledger.resolve("Realms_ERC721_Mintable").unwrap(),
            Felt::from(1234u64)
        );
        assert_eq!(
            ledger.latest("Realms_ERC721_Mintable").unwrap().class_hash,
            Felt::from(10u64)
        );
    }

    #[test]
    fn serializes_felts_as_hex() {
        let contents = Contents {
            classes: BTreeMap::new(),
            contracts: btreemap! { "token".to_string() => vec![deployment(0x4d2)] },
        };
        let json = serde_json::to_value(&contents).unwrap();
        assert_eq!(json["contracts"]["token"][0]["address"], "0x4d2");
        assert_eq!(json["contracts"]["token"][0]["transaction_hash"], "0x4d3");
    }

    #[test]
    fn malformed_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("devnet.json");
        std::fs::write(&path, "not json").unwrap();
        let err = Ledger::new(&path).resolve("anything").unwrap_err();

        assert!(matches!(err, Error::Malformed { .. }));
        assert!(!err.is_missing_entry());
    }
}
