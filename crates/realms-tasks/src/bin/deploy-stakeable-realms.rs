use {
    number::conversions::felt_to_hex_string,
    realms_tasks::{
        arguments::{self, DeployStakeableRealmsArguments},
        deploy_stakeable_realms,
    },
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match arguments::parse::<DeployStakeableRealmsArguments>() {
        Ok(args) => args,
        Err(err) => return err.exit_code(),
    };
    observe::tracing::initialize(&args.shared.logging.config());
    tracing::info!(
        "running deploy-stakeable-realms with validated arguments:\n{}",
        args
    );

    match deploy_stakeable_realms::main(args).await {
        Ok(deployed) => {
            tracing::info!(
                address = %felt_to_hex_string(&deployed.address),
                transaction_hash = %felt_to_hex_string(&deployed.transaction_hash),
                "stakeable realms deployed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "failed to deploy stakeable realms");
            err.exit_code()
        }
    }
}
