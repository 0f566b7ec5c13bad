//! Invokes an arbitrary entrypoint on a contract recorded in the ledger.

use {
    crate::{Error, arguments::SendArguments},
    contracts::AddressResolver,
    number::{Uint256, felt_from_str},
    starknet::core::types::Felt,
    starknet_rpc::{AccountSubmitter, CallDescriptor, SignerProvider, TransactionSubmitter},
};

const UINT_PREFIX: &str = "uint:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendParams {
    pub contract: String,
    pub function: String,
    pub arguments: Vec<String>,
}

/// Validates the calldata and expands every `uint:<value>` argument into
/// its low and high limbs.
pub fn expand_arguments(arguments: &[String]) -> Result<Vec<String>, Error> {
    let mut calldata = Vec::with_capacity(arguments.len());
    for argument in arguments {
        match argument.strip_prefix(UINT_PREFIX) {
            Some(value) => calldata.extend(value.parse::<Uint256>()?.to_calldata()),
            None => {
                felt_from_str(argument)?;
                calldata.push(argument.clone());
            }
        }
    }
    Ok(calldata)
}

pub async fn run(
    params: &SendParams,
    resolver: &dyn AddressResolver,
    signers: &dyn SignerProvider,
    submitter: &dyn TransactionSubmitter,
) -> Result<Felt, Error> {
    let address = resolver.resolve(&params.contract)?;
    let call = CallDescriptor::new(
        address,
        params.function.as_str(),
        expand_arguments(&params.arguments)?,
    );
    let owner = signers.owner()?;

    tracing::info!(contract = %params.contract, %call, "sending transaction");
    let transaction_hash = submitter.submit(&owner, vec![call]).await?;
    Ok(transaction_hash)
}

pub async fn main(args: SendArguments) -> Result<Felt, Error> {
    let ledger = args.shared.ledger();
    let submitter = AccountSubmitter::new(args.shared.client());
    run(&args.params(), &ledger, &args.shared.signers(), &submitter).await
}
