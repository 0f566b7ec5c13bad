use {
    crate::Error,
    num::{BigUint, Num, One},
    starknet::core::{types::Felt, utils::cairo_short_string_to_felt},
    std::{fmt, str::FromStr, sync::LazyLock},
};

/// The Starknet field prime `2^251 + 17 * 2^192 + 1`.
pub static FIELD_PRIME: LazyLock<BigUint> = LazyLock::new(|| {
    (BigUint::one() << 251usize) + (BigUint::from(17u8) << 192usize) + BigUint::one()
});

/// Returns the digits of a numeric string together with their radix. A `0x`
/// prefix selects hex, anything else is read as decimal.
fn digits(input: &str) -> Result<(&str, u32), Error> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() {
        return Err(if trimmed.is_empty() {
            Error::Empty
        } else {
            Error::Invalid(input.to_owned())
        });
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::Invalid(input.to_owned()));
    }
    Ok((digits, radix))
}

pub fn big_uint_from_str(input: &str) -> Result<BigUint, Error> {
    let (digits, radix) = digits(input)?;
    BigUint::from_str_radix(digits, radix).map_err(|_| Error::Invalid(input.to_owned()))
}

pub fn big_uint_to_felt(value: &BigUint) -> Result<Felt, Error> {
    if value >= &*FIELD_PRIME {
        return Err(Error::OutOfFieldRange(value.to_string()));
    }
    Ok(Felt::from_bytes_be_slice(&value.to_bytes_be()))
}

/// Reads a string as an unsigned integer and converts it into a field
/// element. Values at or above the field prime are rejected instead of being
/// reduced.
pub fn felt_from_str(input: &str) -> Result<Felt, Error> {
    let value = big_uint_from_str(input)?;
    big_uint_to_felt(&value).map_err(|_| Error::OutOfFieldRange(input.to_owned()))
}

/// Packs up to 31 ASCII characters big-endian into a single field element.
pub fn felt_from_short_string(input: &str) -> Result<Felt, Error> {
    cairo_short_string_to_felt(input).map_err(|err| Error::ShortString {
        input: input.to_owned(),
        reason: err.to_string(),
    })
}

/// Renders a felt the way calldata is written by hand: plain decimal.
pub fn felt_to_dec_string(felt: &Felt) -> String {
    felt.to_biguint().to_str_radix(10)
}

pub fn felt_to_hex_string(felt: &Felt) -> String {
    format!("{felt:#x}")
}

/// How a human readable string parameter becomes a field element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeltEncoding {
    /// The string is an unsigned integer (`"1234"` is the felt 1234).
    #[default]
    Numeric,
    /// The string is packed as a cairo short string (`"1234"` is 0x31323334).
    ShortString,
}

impl FeltEncoding {
    pub fn encode(&self, input: &str) -> Result<Felt, Error> {
        match self {
            Self::Numeric => felt_from_str(input),
            Self::ShortString => felt_from_short_string(input),
        }
    }
}

impl FromStr for FeltEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(Self::Numeric),
            "short-string" => Ok(Self::ShortString),
            _ => Err(Error::UnknownEncoding(s.to_owned())),
        }
    }
}

impl fmt::Display for FeltEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => f.write_str("numeric"),
            Self::ShortString => f.write_str("short-string"),
        }
    }
}
