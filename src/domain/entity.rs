/// Entity and Identifier Abstractions
///
/// Every aggregate is identified by a UUID-backed identifier and knows how
/// to validate itself against a `ValidationHandler`. Equality of entities is
/// identity equality.

use chrono::{DateTime, SubsecRound, Utc};
use std::fmt::Display;
use std::hash::Hash;
use uuid::Uuid;

use super::validation::ValidationHandler;

/// Strongly typed aggregate identifier
pub trait Identifier: Clone + Eq + Hash + Display + Send + Sync {
    fn value(&self) -> Uuid;
}

/// Domain object with identity
pub trait Entity {
    type Id: Identifier;

    fn id(&self) -> &Self::Id;

    /// Reports every rule violation to the handler
    fn validate(&self, handler: &mut dyn ValidationHandler);
}

/// Entry point of a consistency boundary; the only kind of entity gateways
/// load and store
pub trait AggregateRoot: Entity {
    /// Name used in not-found messages
    const NAME: &'static str;
}

/// Current time at the precision the database stores (microseconds)
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// 去掉名称首尾空白，保存的值即校验的值
pub(crate) fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|name| name.trim().to_string())
}

/// Declares a UUID-backed identifier type
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generates a fresh random identifier
            pub fn unique() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn from_uuid(value: uuid::Uuid) -> Self {
                Self(value)
            }

            /// Parses the textual UUID form
            pub fn parse(value: &str) -> Result<Self, uuid::Error> {
                uuid::Uuid::parse_str(value).map(Self)
            }
        }

        impl $crate::domain::entity::Identifier for $name {
            fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use uuid_identifier;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_microsecond_precision() {
        let ts = now();
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000, 0);
    }
}
