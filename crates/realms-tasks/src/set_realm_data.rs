//! Writes the packed attributes of one realm into the deployed realms
//! contract.

use {
    crate::{Error, arguments::SetRealmDataArguments, realm_data::RealmData},
    contracts::{AddressResolver, names},
    number::{Uint256, felt_to_dec_string},
    starknet::core::types::Felt,
    starknet_rpc::{AccountSubmitter, CallDescriptor, SignerProvider, TransactionSubmitter},
};

pub const ENTRYPOINT: &str = "set_realm_data";
pub const DEFAULT_REALM_DATA: u128 = 101_412_048_018_258_352_123_039_691_248_900;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetRealmDataParams {
    /// Ledger name of the target contract.
    pub contract: String,
    pub realm_id: Uint256,
    pub realm_data: Felt,
}

impl Default for SetRealmDataParams {
    fn default() -> Self {
        Self {
            contract: names::REALMS_ERC721_MINTABLE.to_string(),
            realm_id: Uint256::new(1, 0),
            realm_data: Felt::from(DEFAULT_REALM_DATA),
        }
    }
}

/// The call writing `realm_data` for `realm_id` on the contract at
/// `address`. The id goes first as two limbs, low then high.
pub fn call(address: Felt, params: &SetRealmDataParams) -> CallDescriptor {
    let [low, high] = params.realm_id.to_calldata();
    CallDescriptor::new(
        address,
        ENTRYPOINT,
        vec![low, high, felt_to_dec_string(&params.realm_data)],
    )
}

/// Resolves the target, then submits exactly one transaction containing the
/// `set_realm_data` call. Nothing is submitted when resolution or signer
/// lookup fails.
pub async fn run(
    params: &SetRealmDataParams,
    resolver: &dyn AddressResolver,
    signers: &dyn SignerProvider,
    submitter: &dyn TransactionSubmitter,
) -> Result<Felt, Error> {
    let address = resolver.resolve(&params.contract)?;
    let call = call(address, params);
    let owner = signers.owner()?;

    tracing::info!(contract = %params.contract, %call, "setting realm data");
    let transaction_hash = submitter.submit(&owner, vec![call]).await?;
    Ok(transaction_hash)
}

pub async fn main(args: SetRealmDataArguments) -> Result<Felt, Error> {
    let mut params = args.params();
    if let Some(path) = &args.realms_data_file {
        params.realm_data = RealmData::load(path)?.get(&params.realm_id)?;
    }

    let ledger = args.shared.ledger();
    let submitter = AccountSubmitter::new(args.shared.client());
    run(&params, &ledger, &args.shared.signers(), &submitter).await
}
