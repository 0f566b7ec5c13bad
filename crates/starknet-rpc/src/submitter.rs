use {
    crate::{CallDescriptor, Client, Error, Signer},
    number::conversions::felt_to_hex_string,
    starknet::{accounts::Account as _, core::types::Felt},
};

/// Submits invoke transactions on behalf of a signer.
#[mockall::automock]
#[async_trait::async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Executes all `calls` atomically in one transaction and returns its
    /// hash once the node accepted it.
    async fn submit(&self, signer: &Signer, calls: Vec<CallDescriptor>) -> Result<Felt, Error>;
}

/// Submits V3 invoke transactions through the signer's account contract.
pub struct AccountSubmitter {
    client: Client,
}

impl AccountSubmitter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TransactionSubmitter for AccountSubmitter {
    async fn submit(&self, signer: &Signer, calls: Vec<CallDescriptor>) -> Result<Felt, Error> {
        let encoded = calls
            .iter()
            .map(CallDescriptor::to_call)
            .collect::<Result<Vec<_>, _>>()?;
        let account = self.client.account(signer).await?;

        for call in &calls {
            tracing::info!(%call, "submitting call");
        }
        let result = account
            .execute_v3(encoded)
            .send()
            .await
            .map_err(Error::from_account)?;

        tracing::info!(
            transaction_hash = %felt_to_hex_string(&result.transaction_hash),
            "transaction submitted"
        );
        Ok(result.transaction_hash)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::Network};

    #[tokio::test]
    async fn invalid_calldata_fails_before_contacting_the_node() {
        // Nothing listens on port 1, any request would fail with a node error.
        let client = Client::new("http://127.0.0.1:1".parse().unwrap(), Network::Devnet);
        let submitter = AccountSubmitter::new(client);

        let result = submitter
            .submit(
                &Signer::new(Felt::ONE, Felt::TWO),
                vec![CallDescriptor::new(
                    Felt::ONE,
                    "set_realm_data",
                    vec!["1".into(), "not a number".into()],
                )],
            )
            .await;

        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[tokio::test]
    async fn unreachable_node_is_a_node_error() {
        let client = Client::new("http://127.0.0.1:1".parse().unwrap(), Network::Devnet);
        let submitter = AccountSubmitter::new(client);

        let result = submitter
            .submit(
                &Signer::new(Felt::ONE, Felt::TWO),
                vec![CallDescriptor::new(Felt::ONE, "set_realm_data", vec![])],
            )
            .await;

        assert!(matches!(result, Err(Error::Node(_))));
    }
}
