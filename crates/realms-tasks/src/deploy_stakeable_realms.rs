//! Deploys a new stakeable realms ERC721 owned by the configured owner.

use {
    crate::{Error, arguments::DeployStakeableRealmsArguments},
    contracts::names,
    number::{FeltEncoding, conversions::felt_to_hex_string},
    starknet::core::types::Felt,
    starknet_rpc::{
        ContractDeployer,
        DeployRequest,
        Deployed,
        Signer,
        SignerProvider,
        UdcDeployer,
    },
    std::sync::Arc,
};

pub const DEFAULT_NAME: &str = "1234";
pub const DEFAULT_SYMBOL: &str = "1234";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployStakeableRealmsParams {
    pub contract: String,
    pub label: String,
    pub name: String,
    pub symbol: String,
    pub encoding: FeltEncoding,
}

impl Default for DeployStakeableRealmsParams {
    fn default() -> Self {
        Self {
            contract: names::REALMS_ERC721_STAKEABLE.to_string(),
            label: names::REALMS_ERC721_STAKEABLE.to_string(),
            name: DEFAULT_NAME.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            encoding: FeltEncoding::default(),
        }
    }
}

/// Constructor arguments in declaration order: name, symbol, owner.
pub fn constructor_calldata(
    params: &DeployStakeableRealmsParams,
    owner: &Signer,
) -> Result<Vec<Felt>, Error> {
    Ok(vec![
        params.encoding.encode(&params.name)?,
        params.encoding.encode(&params.symbol)?,
        owner.address,
    ])
}

pub async fn run(
    params: &DeployStakeableRealmsParams,
    signers: &dyn SignerProvider,
    deployer: &dyn ContractDeployer,
) -> Result<Deployed, Error> {
    let owner = signers.owner()?;
    let constructor_calldata = constructor_calldata(params, &owner)?;

    tracing::info!(
        contract = %params.contract,
        name = %params.name,
        symbol = %params.symbol,
        encoding = %params.encoding,
        "deploying stakeable realms"
    );
    let deployed = deployer
        .deploy(
            &owner,
            DeployRequest {
                contract: params.contract.clone(),
                label: params.label.clone(),
                constructor_calldata,
            },
        )
        .await?;
    Ok(deployed)
}

pub async fn main(args: DeployStakeableRealmsArguments) -> Result<Deployed, Error> {
    let params = args.params();
    let ledger = Arc::new(args.shared.ledger());
    if let Some(class_hash) = args.stakeable_class_hash {
        tracing::info!(
            contract = %params.contract,
            class_hash = %felt_to_hex_string(&class_hash),
            "recording declared class"
        );
        ledger.declare(&params.contract, class_hash)?;
    }

    let deployer = UdcDeployer::new(args.shared.client(), ledger);
    run(&params, &args.shared.signers(), &deployer).await
}
