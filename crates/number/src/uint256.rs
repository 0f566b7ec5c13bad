//! Cairo's `Uint256`: a 256-bit integer passed as two field elements, the low
//! 128 bits first.

use {
    crate::{Error, conversions::big_uint_from_str},
    ruint::aliases::U256,
    starknet::core::types::Felt,
    std::{fmt, str::FromStr},
};

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Uint256 {
    pub low: u128,
    pub high: u128,
}

impl Uint256 {
    pub const fn new(low: u128, high: u128) -> Self {
        Self { low, high }
    }

    /// The two limbs as field elements, in calldata order.
    pub fn to_felts(&self) -> [Felt; 2] {
        [Felt::from(self.low), Felt::from(self.high)]
    }

    /// The two limbs as decimal strings, in calldata order.
    pub fn to_calldata(&self) -> [String; 2] {
        [self.low.to_string(), self.high.to_string()]
    }
}

impl From<U256> for Uint256 {
    fn from(value: U256) -> Self {
        let [l0, l1, h0, h1] = *value.as_limbs();
        Self {
            low: u128::from(l0) | (u128::from(l1) << 64),
            high: u128::from(h0) | (u128::from(h1) << 64),
        }
    }
}

impl From<Uint256> for U256 {
    fn from(value: Uint256) -> Self {
        U256::from_limbs([
            value.low as u64,
            (value.low >> 64) as u64,
            value.high as u64,
            (value.high >> 64) as u64,
        ])
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Uint256 {
    type Err = Error;

    /// Parses a decimal or 0x-prefixed hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = big_uint_from_str(s)?;
        let value = U256::try_from_be_slice(&value.to_bytes_be())
            .ok_or_else(|| Error::OutOfU256Range(s.to_owned()))?;
        Ok(value.into())
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", <U256 as From<Uint256>>::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recombine(value: Uint256) -> U256 {
        U256::from(value.low) + (U256::from(value.high) << 128)
    }

    #[test]
    fn one_is_low_limb_only() {
        let one = Uint256::from(U256::from(1u8));
        assert_eq!(one, Uint256::new(1, 0));
        assert_eq!(one.to_calldata(), ["1".to_string(), "0".to_string()]);
        assert_eq!(one.to_felts(), [Felt::ONE, Felt::ZERO]);
    }

    #[test]
    fn split_and_recombine_is_lossless() {
        let values = [
            U256::ZERO,
            U256::from(1u8),
            U256::from(u128::MAX),
            U256::from(1u8) << 128,
            (U256::from(0xdead_beefu64) << 160) + U256::from(42u8),
            U256::MAX,
        ];
        for value in values {
            let limbs = Uint256::from(value);
            assert_eq!(recombine(limbs), value);
            assert_eq!(<U256 as From<Uint256>>::from(limbs), value);
        }
    }

    #[test]
    fn limb_boundaries() {
        assert_eq!(
            Uint256::from(U256::from(1u8) << 128),
            Uint256::new(0, 1)
        );
        assert_eq!(
            Uint256::from(U256::MAX),
            Uint256::new(u128::MAX, u128::MAX)
        );
    }

    #[test]
    fn parse() {
        assert_eq!("1".parse::<Uint256>().unwrap(), Uint256::new(1, 0));
        assert_eq!(
            "0x100000000000000000000000000000000"
                .parse::<Uint256>()
                .unwrap(),
            Uint256::new(0, 1)
        );
        assert_eq!(
            "340282366920938463463374607431768211457"
                .parse::<Uint256>()
                .unwrap(),
            Uint256::new(1, 1)
        );
        let too_large = format!("0x1{}", "0".repeat(64));
        assert_eq!(
            too_large.parse::<Uint256>(),
            Err(Error::OutOfU256Range(too_large.clone()))
        );
        assert!("-1".parse::<Uint256>().is_err());
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Uint256::new(1, 1).to_string(), "340282366920938463463374607431768211457");
    }
}
