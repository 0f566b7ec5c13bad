use {
    starknet::core::{chain_id, types::Felt, utils::parse_cairo_short_string},
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// Represents each supported network
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Sepolia,
    /// A local development node. Its chain id is whatever the node reports.
    #[default]
    Devnet,
}

impl Network {
    /// Returns the chain id the node must report, `None` if any chain id is
    /// accepted.
    pub fn expected_chain_id(&self) -> Option<Felt> {
        match self {
            Self::Mainnet => Some(chain_id::MAINNET),
            Self::Sepolia => Some(chain_id::SEPOLIA),
            Self::Devnet => None,
        }
    }

    /// Returns the canonical short name, also used as the ledger file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Devnet => "devnet",
        }
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "devnet" => Ok(Self::Devnet),
            _ => Err(UnknownNetwork(s.to_owned())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown network {0:?}, expected one of mainnet, sepolia, devnet")]
pub struct UnknownNetwork(String);

/// Renders a chain id for humans: `SN_SEPOLIA` rather than its felt value.
pub fn display_chain_id(chain_id: &Felt) -> String {
    parse_cairo_short_string(chain_id).unwrap_or_else(|_| format!("{chain_id:#x}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_display() {
        for network in [Network::Mainnet, Network::Sepolia, Network::Devnet] {
            assert_eq!(network.to_string().parse::<Network>(), Ok(network));
        }
        assert!("goerli".parse::<Network>().is_err());
    }

    #[test]
    fn expected_chain_ids() {
        assert_eq!(
            Network::Sepolia
                .expected_chain_id()
                .map(|id| display_chain_id(&id)),
            Some("SN_SEPOLIA".to_string())
        );
        assert_eq!(
            Network::Mainnet
                .expected_chain_id()
                .map(|id| display_chain_id(&id)),
            Some("SN_MAIN".to_string())
        );
        assert_eq!(Network::Devnet.expected_chain_id(), None);
    }
}
