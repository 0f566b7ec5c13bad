use {
    crate::realm_data,
    contracts::ledger,
    std::process::ExitCode,
};

/// Why a task failed. Every kind maps to its own process exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A logical contract name, class or realm record is not known.
    #[error("resolution failed: {0:#}")]
    Resolution(anyhow::Error),
    /// The owner signer or the environment is not set up correctly.
    #[error("configuration error: {0:#}")]
    Configuration(anyhow::Error),
    /// The node could not be reached or rejected the transaction.
    #[error("submission failed: {0:#}")]
    Submission(anyhow::Error),
    /// A value cannot be represented as the expected field elements.
    #[error("encoding failed: {0:#}")]
    Encoding(anyhow::Error),
}

impl Error {
    pub fn code(&self) -> u8 {
        match self {
            Self::Resolution(_) => 2,
            Self::Configuration(_) => 3,
            Self::Submission(_) => 4,
            Self::Encoding(_) => 5,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<ledger::Error> for Error {
    fn from(err: ledger::Error) -> Self {
        if err.is_missing_entry() {
            Self::Resolution(err.into())
        } else {
            Self::Configuration(err.into())
        }
    }
}

impl From<number::Error> for Error {
    fn from(err: number::Error) -> Self {
        Self::Encoding(err.into())
    }
}

impl From<realm_data::Error> for Error {
    fn from(err: realm_data::Error) -> Self {
        match err {
            realm_data::Error::NotFound(_) => Self::Resolution(err.into()),
            realm_data::Error::Malformed { .. } => Self::Encoding(err.into()),
            realm_data::Error::Io { .. } => Self::Configuration(err.into()),
        }
    }
}

/// Values that fail to parse as numbers are encoding errors, every other
/// command line or environment problem is a configuration error.
impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        let encoding = std::error::Error::source(&err)
            .is_some_and(|source| source.is::<number::Error>());
        if encoding {
            Self::Encoding(err.into())
        } else {
            Self::Configuration(err.into())
        }
    }
}

impl From<starknet_rpc::Error> for Error {
    fn from(err: starknet_rpc::Error) -> Self {
        use starknet_rpc::Error as Rpc;
        match err {
            Rpc::Ledger(err) => err.into(),
            Rpc::Encoding(err) => err.into(),
            Rpc::Entrypoint(_) => Self::Encoding(err.into()),
            Rpc::MissingOwner | Rpc::IncompleteOwner(_) | Rpc::ChainMismatch { .. } => {
                Self::Configuration(err.into())
            }
            Rpc::Node(_) | Rpc::Rejected(_) => Self::Submission(err.into()),
        }
    }
}
