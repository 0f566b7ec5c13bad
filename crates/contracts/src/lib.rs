//! Logical contract names and the ledger that maps them to deployed addresses.
pub mod ledger;

pub use ledger::{Deployment, Ledger};
use {number::conversions::felt_to_hex_string, starknet::core::types::Felt};

/// Logical names under which contracts are declared and deployed.
pub mod names {
    pub const REALMS_ERC721_MINTABLE: &str = "Realms_ERC721_Mintable";
    pub const REALMS_ERC721_STAKEABLE: &str = "realms_erc721_stakeable";
}

/// Looks up where a previously deployed contract lives.
#[mockall::automock]
pub trait AddressResolver: Send + Sync {
    /// Returns the most recently recorded address of the contract deployed
    /// under `name`.
    fn resolve(&self, name: &str) -> Result<Felt, ledger::Error>;
}

impl AddressResolver for Ledger {
    fn resolve(&self, name: &str) -> Result<Felt, ledger::Error> {
        let deployment = self.latest(name)?;
        tracing::debug!(
            name,
            address = %felt_to_hex_string(&deployment.address),
            "resolved contract"
        );
        Ok(deployment.address)
    }
}
