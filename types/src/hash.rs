//! 32-byte content hashes: gated transactions, proposals and country names.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! hash_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name([u8; 32]);

        impl $name {
            pub const ZERO: Self = Self([0u8; 32]);

            pub const fn new(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; 32]
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(&self.0[..4]))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(&self.0))
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }
    };
}

hash_newtype!(
    /// Identifier of a call submitted to the consensus gate: `hash(call_data ‖ nonce)`.
    TxHash
);

hash_newtype!(
    /// Hash of a proposal's text. Unique per day across every country.
    ProposalHash
);

hash_newtype!(
    /// Hash of a country name, used as the DAO table key.
    #[derive(Default)]
    CountryHash
);

impl CountryHash {
    /// Reserved key of the universal DAO every citizen joins.
    ///
    /// No country name can realistically hash to this value.
    pub const GLOBAL: Self = Self([
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ]);

    pub fn is_global(&self) -> bool {
        *self == Self::GLOBAL
    }
}
