use {
    crate::{Error, deploy_stakeable_realms, send, set_realm_data},
    clap::{Parser, error::ErrorKind},
    contracts::{Ledger, names},
    number::{
        FeltEncoding,
        Uint256,
        conversions::felt_to_hex_string,
        felt_from_str,
        felt_to_dec_string,
    },
    starknet::core::types::Felt,
    starknet_rpc::{Client, ConfiguredSigners, Network},
    std::{ffi::OsString, fmt, path::PathBuf},
    tracing::level_filters::LevelFilter,
    url::Url,
};

/// Parses `T` from the process arguments, see [`parse_from`].
pub fn parse<T: Parser>() -> Result<T, Error> {
    parse_from(std::env::args_os())
}

/// Parses `T` from `args`. Help and version requests print and exit with
/// status 0. Any other failure is printed and classified like a task error,
/// so it exits with the code of its kind rather than clap's own.
pub fn parse_from<T, I, S>(args: I) -> Result<T, Error>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    T::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        _ => {
            let _ = err.print();
            Error::from(err)
        }
    })
}

/// A malformed owner address or key is a signer configuration problem, not a
/// calldata encoding one.
#[derive(Debug, thiserror::Error)]
#[error("invalid owner account value: {0}")]
pub struct InvalidOwner(#[from] number::Error);

fn owner_felt(s: &str) -> Result<Felt, InvalidOwner> {
    Ok(felt_from_str(s)?)
}

#[derive(Parser)]
pub struct LoggingArguments {
    #[clap(
        long,
        env,
        default_value = "warn,realms_tasks=debug,starknet_rpc=debug,contracts=debug"
    )]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Emit log events as JSON lines.
    #[clap(long, env)]
    pub log_json: bool,
}

impl LoggingArguments {
    pub fn config(&self) -> observe::Config {
        observe::Config::new(
            &self.log_filter,
            self.log_stderr_threshold.into_level(),
            self.log_json,
        )
    }
}

impl fmt::Display for LoggingArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            log_json,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "log_json: {log_json}")?;
        Ok(())
    }
}

/// Arguments every task needs: where the node is, where deployments are
/// recorded and who signs.
#[derive(Parser)]
pub struct Shared {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// The Starknet JSON-RPC node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:5050")]
    pub node_url: Url,

    /// Network the node is expected to serve: mainnet, sepolia or devnet.
    #[clap(long, env, default_value = "devnet")]
    pub network: Network,

    /// Directory holding one deployment ledger file per network.
    #[clap(long, env, default_value = "deployments")]
    pub ledger_dir: PathBuf,

    /// Address of the account owning the realms contracts.
    #[clap(long, env, value_parser = owner_felt)]
    pub owner_address: Option<Felt>,

    /// Private key of the owner account.
    #[clap(long, env, value_parser = owner_felt, hide_env_values = true)]
    pub owner_private_key: Option<Felt>,
}

impl Shared {
    pub fn client(&self) -> Client {
        Client::new(self.node_url.clone(), self.network)
    }

    pub fn ledger(&self) -> Ledger {
        Ledger::for_network(&self.ledger_dir, self.network.name())
    }

    pub fn signers(&self) -> ConfiguredSigners {
        ConfiguredSigners::new(self.owner_address, self.owner_private_key)
    }
}

impl fmt::Display for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            node_url,
            network,
            ledger_dir,
            owner_address,
            owner_private_key,
        } = self;

        write!(f, "{logging}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "network: {network}")?;
        writeln!(f, "ledger_dir: {}", ledger_dir.display())?;
        writeln!(
            f,
            "owner_address: {:?}",
            owner_address.as_ref().map(felt_to_hex_string)
        )?;
        let owner_private_key = owner_private_key.map(|_| "SECRET");
        writeln!(f, "owner_private_key: {owner_private_key:?}")?;
        Ok(())
    }
}

#[derive(Parser)]
pub struct SetRealmDataArguments {
    #[clap(flatten)]
    pub shared: Shared,

    /// Ledger name of the realms contract to write to.
    #[clap(long, env, default_value = names::REALMS_ERC721_MINTABLE)]
    pub realms_contract: String,

    /// Id of the realm whose data is written.
    #[clap(long, env, default_value = "1")]
    pub realm_id: Uint256,

    /// Packed realm attributes.
    #[clap(
        long,
        env,
        default_value_t = Felt::from(set_realm_data::DEFAULT_REALM_DATA),
        value_parser = felt_from_str,
    )]
    pub realm_data: Felt,

    /// JSON file mapping realm ids to packed attributes. When set, the
    /// realm's record replaces `--realm-data`.
    #[clap(long, env)]
    pub realms_data_file: Option<PathBuf>,
}

impl SetRealmDataArguments {
    pub fn params(&self) -> set_realm_data::SetRealmDataParams {
        set_realm_data::SetRealmDataParams {
            contract: self.realms_contract.clone(),
            realm_id: self.realm_id,
            realm_data: self.realm_data,
        }
    }
}

impl fmt::Display for SetRealmDataArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shared)?;
        writeln!(f, "realms_contract: {}", self.realms_contract)?;
        writeln!(f, "realm_id: {}", self.realm_id)?;
        writeln!(f, "realm_data: {}", felt_to_dec_string(&self.realm_data))?;
        writeln!(f, "realms_data_file: {:?}", self.realms_data_file)?;
        Ok(())
    }
}

#[derive(Parser)]
pub struct DeployStakeableRealmsArguments {
    #[clap(flatten)]
    pub shared: Shared,

    /// Name under which the contract class was declared.
    #[clap(long, env, default_value = names::REALMS_ERC721_STAKEABLE)]
    pub stakeable_contract: String,

    /// Ledger label for the new instance.
    #[clap(long, env, default_value = names::REALMS_ERC721_STAKEABLE)]
    pub stakeable_label: String,

    /// Token name passed to the constructor.
    #[clap(long, env, default_value = deploy_stakeable_realms::DEFAULT_NAME)]
    pub token_name: String,

    /// Token symbol passed to the constructor.
    #[clap(long, env, default_value = deploy_stakeable_realms::DEFAULT_SYMBOL)]
    pub token_symbol: String,

    /// How name and symbol become field elements: numeric or short-string.
    #[clap(long, env, default_value_t)]
    pub token_encoding: FeltEncoding,

    /// Class hash the stakeable contract was declared with. When set it is
    /// recorded in the ledger before deploying.
    #[clap(long, env, value_parser = felt_from_str)]
    pub stakeable_class_hash: Option<Felt>,
}

impl DeployStakeableRealmsArguments {
    pub fn params(&self) -> deploy_stakeable_realms::DeployStakeableRealmsParams {
        deploy_stakeable_realms::DeployStakeableRealmsParams {
            contract: self.stakeable_contract.clone(),
            label: self.stakeable_label.clone(),
            name: self.token_name.clone(),
            symbol: self.token_symbol.clone(),
            encoding: self.token_encoding,
        }
    }
}

impl fmt::Display for DeployStakeableRealmsArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shared)?;
        writeln!(f, "stakeable_contract: {}", self.stakeable_contract)?;
        writeln!(f, "stakeable_label: {}", self.stakeable_label)?;
        writeln!(f, "token_name: {}", self.token_name)?;
        writeln!(f, "token_symbol: {}", self.token_symbol)?;
        writeln!(f, "token_encoding: {}", self.token_encoding)?;
        writeln!(
            f,
            "stakeable_class_hash: {:?}",
            self.stakeable_class_hash.as_ref().map(felt_to_hex_string)
        )?;
        Ok(())
    }
}

#[derive(Parser)]
pub struct SendArguments {
    #[clap(flatten)]
    pub shared: Shared,

    /// Ledger name of the contract to invoke.
    #[clap(long)]
    pub contract: String,

    /// Entrypoint to invoke.
    #[clap(long)]
    pub function: String,

    /// Calldata as decimal or 0x-hex values. `uint:<value>` expands into the
    /// two limbs of a Uint256.
    #[clap(long, value_delimiter = ',')]
    pub arguments: Vec<String>,
}

impl SendArguments {
    pub fn params(&self) -> send::SendParams {
        send::SendParams {
            contract: self.contract.clone(),
            function: self.function.clone(),
            arguments: self.arguments.clone(),
        }
    }
}

impl fmt::Display for SendArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shared)?;
        writeln!(f, "contract: {}", self.contract)?;
        writeln!(f, "function: {}", self.function)?;
        writeln!(f, "arguments: {:?}", self.arguments)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            deploy_stakeable_realms::DeployStakeableRealmsParams,
            set_realm_data::SetRealmDataParams,
        },
        std::path::Path,
    };

    #[test]
    fn set_realm_data_defaults() {
        let args = SetRealmDataArguments::try_parse_from(["set-realm-data"]).unwrap();
        assert_eq!(args.params(), SetRealmDataParams::default());
        assert_eq!(args.shared.network, Network::Devnet);
        assert_eq!(args.shared.node_url.as_str(), "http://localhost:5050/");
        assert!(args.realms_data_file.is_none());
    }

    #[test]
    fn deploy_stakeable_realms_defaults() {
        let args =
            DeployStakeableRealmsArguments::try_parse_from(["deploy-stakeable-realms"]).unwrap();
        assert_eq!(args.params(), DeployStakeableRealmsParams::default());
    }

    #[test]
    fn hex_owner_and_redacted_key() {
        let args = SetRealmDataArguments::try_parse_from([
            "set-realm-data",
            "--owner-address",
            "0xa11ce",
            "--owner-private-key",
            "0x5ec2e7",
            "--network",
            "sepolia",
        ])
        .unwrap();
        assert_eq!(args.shared.owner_address, Some(Felt::from(0xa11ce_u64)));
        assert_eq!(args.shared.network, Network::Sepolia);
        assert_eq!(
            args.shared.ledger().path(),
            Path::new("deployments/sepolia.json")
        );

        let printed = args.to_string();
        assert!(printed.contains(r#"owner_address: Some("0xa11ce")"#));
        assert!(printed.contains(r#"owner_private_key: Some("SECRET")"#));
        assert!(!printed.contains("5ec2e7"));
    }

    fn parse_error(args: &[&str]) -> Error {
        match parse_from::<SetRealmDataArguments, _, _>(args) {
            Ok(_) => panic!("{args:?} parsed"),
            Err(err) => err,
        }
    }

    #[test]
    fn malformed_values_are_classified() {
        let err = parse_error(&["set-realm-data", "--realm-data", "0xzz"]);
        assert!(matches!(err, Error::Encoding(_)));
        assert_eq!(err.code(), 5);

        let err = parse_error(&["set-realm-data", "--realm-id", "realm"]);
        assert!(matches!(err, Error::Encoding(_)));

        let err = parse_error(&["set-realm-data", "--network", "goerli"]);
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(err.code(), 3);

        let err = parse_error(&["set-realm-data", "--owner-address", "alice"]);
        assert!(matches!(err, Error::Configuration(_)));

        let err = parse_error(&["set-realm-data", "--log-stderr-threshold", "loud"]);
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn usage_errors_never_exit_like_resolution_failures() {
        let resolution = Error::from(contracts::ledger::Error::NotDeployed(
            names::REALMS_ERC721_MINTABLE.into(),
        ))
        .code();
        for args in [
            &["set-realm-data", "--unknown-flag"][..],
            &["set-realm-data", "--realm-data", "0xzz"],
            &["set-realm-data", "--network", "goerli"],
            &["set-realm-data", "--node-url", "not a url"],
        ] {
            let err = parse_error(args);
            assert_ne!(err.code(), resolution, "{args:?}");
            assert_ne!(err.code(), 2, "{args:?}");
        }

        let err = match parse_from::<SendArguments, _, _>(["send"]) {
            Ok(_) => panic!("send parsed without a contract"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn send_arguments() {
        let args = SendArguments::try_parse_from([
            "send",
            "--contract",
            "Realms_ERC721_Mintable",
            "--function",
            "set_realm_data",
            "--arguments",
            "uint:1,101412048018258352123039691248900",
        ])
        .unwrap();
        assert_eq!(
            args.arguments,
            ["uint:1", "101412048018258352123039691248900"]
        );
    }
}
