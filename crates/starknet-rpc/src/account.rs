use {
    crate::Error,
    number::conversions::felt_to_hex_string,
    starknet::core::types::Felt,
    std::fmt,
};

/// An account address together with the key that signs for it.
#[derive(Clone, PartialEq, Eq)]
pub struct Signer {
    pub address: Felt,
    private_key: Felt,
}

impl Signer {
    pub fn new(address: Felt, private_key: Felt) -> Self {
        Self {
            address,
            private_key,
        }
    }

    pub(crate) fn private_key(&self) -> Felt {
        self.private_key
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("address", &felt_to_hex_string(&self.address))
            .field("private_key", &"SECRET")
            .finish()
    }
}

/// Hands out signing identities by role.
#[mockall::automock]
pub trait SignerProvider: Send + Sync {
    /// The account that owns the deployed contracts and administers them.
    fn owner(&self) -> Result<Signer, Error>;
}

/// Signers taken from static configuration.
#[derive(Clone, Debug, Default)]
pub struct ConfiguredSigners {
    owner_address: Option<Felt>,
    owner_private_key: Option<Felt>,
}

impl ConfiguredSigners {
    pub fn new(owner_address: Option<Felt>, owner_private_key: Option<Felt>) -> Self {
        Self {
            owner_address,
            owner_private_key,
        }
    }
}

impl SignerProvider for ConfiguredSigners {
    fn owner(&self) -> Result<Signer, Error> {
        match (self.owner_address, self.owner_private_key) {
            (Some(address), Some(private_key)) => Ok(Signer::new(address, private_key)),
            (Some(_), None) => Err(Error::IncompleteOwner("OWNER_PRIVATE_KEY")),
            (None, Some(_)) => Err(Error::IncompleteOwner("OWNER_ADDRESS")),
            (None, None) => Err(Error::MissingOwner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_owner() {
        let signers = ConfiguredSigners::new(Some(Felt::from(0xa11ceu64)), Some(Felt::TWO));
        let owner = signers.owner().unwrap();
        assert_eq!(owner.address, Felt::from(0xa11ceu64));
        assert_eq!(owner.private_key(), Felt::TWO);
    }

    #[test]
    fn missing_owner() {
        assert!(matches!(
            ConfiguredSigners::default().owner(),
            Err(Error::MissingOwner)
        ));
        assert!(matches!(
            ConfiguredSigners::new(Some(Felt::ONE), None).owner(),
            Err(Error::IncompleteOwner("OWNER_PRIVATE_KEY"))
        ));
        assert!(matches!(
            ConfiguredSigners::new(None, Some(Felt::ONE)).owner(),
            Err(Error::IncompleteOwner("OWNER_ADDRESS"))
        ));
    }

    #[test]
    fn debug_hides_private_key() {
        let signer = Signer::new(Felt::from(0xa11ceu64), Felt::from(0x5ec7e7u64));
        let debug = format!("{signer:?}");
        assert!(debug.contains("0xa11ce"));
        assert!(!debug.contains("5ec7e7"));
    }
}
