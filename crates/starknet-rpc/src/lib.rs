pub mod account;
pub mod call;
pub mod deployer;
pub mod network;
pub mod submitter;

pub use {
    account::{ConfiguredSigners, MockSignerProvider, Signer, SignerProvider},
    call::CallDescriptor,
    deployer::{
        ContractDeployer,
        DeployRequest,
        Deployed,
        MockContractDeployer,
        UdcDeployer,
    },
    network::Network,
    submitter::{AccountSubmitter, MockTransactionSubmitter, TransactionSubmitter},
};
use {
    number::conversions::felt_to_hex_string,
    starknet::{
        accounts::{AccountError, ExecutionEncoding, SingleOwnerAccount},
        core::types::{BlockId, BlockTag, Felt},
        providers::{JsonRpcClient, Provider as _, ProviderError, jsonrpc::HttpTransport},
        signers::{LocalWallet, SigningKey},
    },
    std::sync::Arc,
    tokio::sync::OnceCell,
    url::Url,
};

pub type Provider = JsonRpcClient<HttpTransport>;
pub type Account = SingleOwnerAccount<Provider, LocalWallet>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("owner account is not configured, set OWNER_ADDRESS and OWNER_PRIVATE_KEY")]
    MissingOwner,
    #[error("owner account is incomplete, {0} is missing")]
    IncompleteOwner(&'static str),
    #[error("node reports chain {actual} but {network} expects {expected}")]
    ChainMismatch {
        network: Network,
        expected: String,
        actual: String,
    },
    #[error("invalid entrypoint name {0:?}")]
    Entrypoint(String),
    #[error(transparent)]
    Encoding(#[from] number::Error),
    #[error(transparent)]
    Ledger(#[from] contracts::ledger::Error),
    #[error("request to the node failed: {0:#}")]
    Node(anyhow::Error),
    #[error("transaction was rejected: {0:#}")]
    Rejected(anyhow::Error),
}

impl Error {
    /// Failures reported by the node itself mean the transaction was
    /// rejected. Transport and other provider failures mean the node could
    /// not be asked.
    pub(crate) fn from_account<S>(err: AccountError<S>) -> Self
    where
        S: std::error::Error + Send + Sync + 'static,
    {
        match &err {
            AccountError::Provider(ProviderError::StarknetError(_)) => {
                Self::Rejected(anyhow::Error::new(err))
            }
            AccountError::Provider(_) => Self::Node(anyhow::Error::new(err)),
            _ => Self::Rejected(anyhow::Error::new(err)),
        }
    }
}

/// Connection settings to a Starknet JSON-RPC node. The chain id is fetched
/// and checked against the configured network on first use, so building a
/// client never touches the network.
#[derive(Clone, Debug)]
pub struct Client {
    url: Url,
    network: Network,
    chain_id: Arc<OnceCell<Felt>>,
}

impl Client {
    pub fn new(url: Url, network: Network) -> Self {
        Self {
            url,
            network,
            chain_id: Default::default(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn provider(&self) -> Provider {
        JsonRpcClient::new(HttpTransport::new(self.url.clone()))
    }

    /// The chain id reported by the node, verified against the network.
    pub async fn chain_id(&self) -> Result<Felt, Error> {
        self.chain_id
            .get_or_try_init(|| async {
                let actual = self
                    .provider()
                    .chain_id()
                    .await
                    .map_err(|err| Error::Node(err.into()))?;
                if let Some(expected) = self.network.expected_chain_id()
                    && expected != actual
                {
                    return Err(Error::ChainMismatch {
                        network: self.network,
                        expected: network::display_chain_id(&expected),
                        actual: network::display_chain_id(&actual),
                    });
                }
                tracing::debug!(
                    network = %self.network,
                    chain_id = %network::display_chain_id(&actual),
                    "connected to node"
                );
                Ok(actual)
            })
            .await
            .copied()
    }

    /// An account executing transactions for `signer` on this node.
    pub async fn account(&self, signer: &Signer) -> Result<Account, Error> {
        let chain_id = self.chain_id().await?;
        let wallet = LocalWallet::from_signing_key(SigningKey::from_secret_scalar(
            signer.private_key(),
        ));
        let mut account = SingleOwnerAccount::new(
            self.provider(),
            wallet,
            signer.address,
            chain_id,
            ExecutionEncoding::New,
        );
        account.set_block_id(BlockId::Tag(BlockTag::Pending));
        tracing::debug!(
            address = %felt_to_hex_string(&signer.address),
            "using account"
        );
        Ok(account)
    }
}
