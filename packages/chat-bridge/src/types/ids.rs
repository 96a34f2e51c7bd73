//! Typed identifiers for the two id spaces and for groups.
//!
//! Public ids (uin) and session ids (uid) are both opaque strings on the
//! wire, but they address different namespaces: the public id is long-lived
//! and client-visible, the session id is internal and only valid within the
//! current session. Wrapping them in distinct newtypes makes it a compile
//! error to hand one to an API expecting the other.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier string.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the raw identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

string_id! {
    /// Long-lived, externally visible account identifier (uin).
    ///
    /// The only identifier wire clients may send.
    PublicId
}

string_id! {
    /// Session-scoped internal identifier (uid).
    ///
    /// Required by the domain API; obtained only via resolution and not
    /// guaranteed stable across sessions.
    SessionId
}

string_id! {
    /// Group identifier, shared by the wire and domain sides.
    GroupId
}

/// A resolved public/session identifier pair.
///
/// Constructed on demand by the resolver, consumed within one action
/// invocation, never persisted by this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPair {
    pub public_id: PublicId,
    pub session_id: SessionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_serde_as_plain_strings() {
        let uin = PublicId::new("987654321");
        let json = serde_json::to_string(&uin).unwrap();
        assert_eq!(json, r#""987654321""#);

        let back: PublicId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uin);
    }

    #[test]
    fn display_is_the_raw_string() {
        assert_eq!(SessionId::new("u-abc").to_string(), "u-abc");
        assert_eq!(GroupId::new("100200300").as_str(), "100200300");
    }
}
