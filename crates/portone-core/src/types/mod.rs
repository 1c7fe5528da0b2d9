// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request models for the three browser SDK operations.
//
// Field names and enum raw values are the browser SDK's wire contract. Every
// optional field is skipped when absent so the runtime never sees `null`
// where the caller said nothing.

/// Declare a closed vocabulary whose variants serialize as fixed raw strings.
///
/// Unknown raw strings are rejected when parsing or deserializing, which makes
/// a bad value a construction-time error rather than an encode-time one.
macro_rules! contract_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Raw value used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $raw),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::PortOneError;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                match raw {
                    $($raw => Ok(Self::$variant),)+
                    _ => Err($crate::error::PortOneError::InvalidValue {
                        kind: $kind,
                        value: raw.to_owned(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

mod billing_key;
mod common;
mod identity;
mod payment;
mod vocab;

pub use billing_key::*;
pub use common::*;
pub use identity::*;
pub use payment::*;
pub use vocab::*;
