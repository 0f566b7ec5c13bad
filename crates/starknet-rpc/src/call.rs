use {
    crate::Error,
    number::conversions::{felt_from_str, felt_to_hex_string},
    starknet::core::{
        types::{Call, Felt},
        utils::get_selector_from_name,
    },
    std::fmt,
};

/// A single entrypoint invocation as written by hand: target address,
/// entrypoint name and calldata as decimal or 0x-hex strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallDescriptor {
    pub to: Felt,
    pub entrypoint: String,
    pub calldata: Vec<String>,
}

impl CallDescriptor {
    pub fn new(to: Felt, entrypoint: impl Into<String>, calldata: Vec<String>) -> Self {
        Self {
            to,
            entrypoint: entrypoint.into(),
            calldata,
        }
    }

    /// Encodes the descriptor into the call an account executes.
    pub fn to_call(&self) -> Result<Call, Error> {
        let selector = get_selector_from_name(&self.entrypoint)
            .map_err(|_| Error::Entrypoint(self.entrypoint.clone()))?;
        let calldata = self
            .calldata
            .iter()
            .map(|value| felt_from_str(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Call {
            to: self.to,
            selector,
            calldata,
        })
    }
}

impl fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            felt_to_hex_string(&self.to),
            self.entrypoint,
            self.calldata.join(", ")
        )
    }
}
