use {
    crate::{Client, Error, Signer},
    chrono::Utc,
    contracts::{Deployment, Ledger},
    number::conversions::felt_to_hex_string,
    starknet::{contract::ContractFactory, core::types::Felt},
    std::sync::Arc,
};

/// What to deploy and under which label to remember it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployRequest {
    /// Name under which the contract class was declared.
    pub contract: String,
    /// Name under which the new instance is recorded in the ledger.
    pub label: String,
    pub constructor_calldata: Vec<Felt>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployed {
    pub address: Felt,
    pub transaction_hash: Felt,
}

/// Deploys contract instances and persists their addresses.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ContractDeployer: Send + Sync {
    async fn deploy(&self, signer: &Signer, request: DeployRequest) -> Result<Deployed, Error>;
}

/// Deploys declared classes through the Universal Deployer Contract and
/// records every new instance in the ledger.
pub struct UdcDeployer {
    client: Client,
    ledger: Arc<Ledger>,
}

impl UdcDeployer {
    pub fn new(client: Client, ledger: Arc<Ledger>) -> Self {
        Self { client, ledger }
    }
}

#[async_trait::async_trait]
impl ContractDeployer for UdcDeployer {
    async fn deploy(&self, signer: &Signer, request: DeployRequest) -> Result<Deployed, Error> {
        let class_hash = self.ledger.class_hash(&request.contract)?;
        let account = self.client.account(signer).await?;
        let factory = ContractFactory::new(class_hash, account);

        // Non-unique deployments only depend on class hash, salt and calldata,
        // a random salt keeps repeated deployments apart.
        let salt = Felt::from(rand::random::<u128>());
        let deployment = factory.deploy_v3(request.constructor_calldata.clone(), salt, false);
        let address = deployment.deployed_address();
        tracing::info!(
            contract = %request.contract,
            label = %request.label,
            class_hash = %felt_to_hex_string(&class_hash),
            address = %felt_to_hex_string(&address),
            "deploying contract"
        );

        let result = deployment
            .send()
            .await
            .map_err(Error::from_account)?;

        self.ledger.record(
            &request.label,
            Deployment {
                address,
                class_hash,
                transaction_hash: result.transaction_hash,
                deployed_at: Utc::now(),
            },
        )?;
        tracing::info!(
            label = %request.label,
            address = %felt_to_hex_string(&address),
            transaction_hash = %felt_to_hex_string(&result.transaction_hash),
            "deployed contract"
        );

        Ok(Deployed {
            address,
            transaction_hash: result.transaction_hash,
        })
    }
}
