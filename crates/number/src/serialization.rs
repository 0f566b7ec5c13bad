use {
    crate::conversions::{felt_from_str, felt_to_hex_string},
    serde::{
        Deserializer,
        Serializer,
        de::{self, Visitor},
    },
    serde_with::{DeserializeAs, SerializeAs},
    starknet::core::types::Felt,
    std::fmt,
};

/// Serialize [`Felt`] as a 0x-prefixed hex string and deserialize it from a
/// hex or a decimal string. Use through `#[serde_as(as = "HexOrDecimalFelt")]`.
pub struct HexOrDecimalFelt;

impl<'de> DeserializeAs<'de, Felt> for HexOrDecimalFelt {
    fn deserialize_as<D>(deserializer: D) -> Result<Felt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeltVisitor;

        impl Visitor<'_> for FeltVisitor {
            type Value = Felt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a felt encoded either as 0x hex prefixed or decimal encoded string"
                )
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                felt_from_str(s).map_err(|err| E::custom(format!("failed to decode {s:?}: {err}")))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Felt::from(v))
            }
        }

        deserializer.deserialize_any(FeltVisitor)
    }
}

impl SerializeAs<Felt> for HexOrDecimalFelt {
    fn serialize_as<S>(source: &Felt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&felt_to_hex_string(source))
    }
}
