use {
    number::conversions::felt_to_hex_string,
    realms_tasks::{
        arguments::{self, SetRealmDataArguments},
        set_realm_data,
    },
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match arguments::parse::<SetRealmDataArguments>() {
        Ok(args) => args,
        Err(err) => return err.exit_code(),
    };
    observe::tracing::initialize(&args.shared.logging.config());
    tracing::info!("running set-realm-data with validated arguments:\n{}", args);

    match set_realm_data::main(args).await {
        Ok(transaction_hash) => {
            tracing::info!(
                transaction_hash = %felt_to_hex_string(&transaction_hash),
                "realm data submitted"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "failed to set realm data");
            err.exit_code()
        }
    }
}
