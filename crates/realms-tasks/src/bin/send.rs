use {
    number::conversions::felt_to_hex_string,
    realms_tasks::{
        arguments::{self, SendArguments},
        send,
    },
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match arguments::parse::<SendArguments>() {
        Ok(args) => args,
        Err(err) => return err.exit_code(),
    };
    observe::tracing::initialize(&args.shared.logging.config());
    tracing::info!("running send with validated arguments:\n{}", args);

    match send::main(args).await {
        Ok(transaction_hash) => {
            tracing::info!(
                transaction_hash = %felt_to_hex_string(&transaction_hash),
                "transaction submitted"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "failed to send transaction");
            err.exit_code()
        }
    }
}
