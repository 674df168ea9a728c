//! Request and response DTOs for the Re:amaze API.
//!
//! # Design
//! Response types default every field so a sparse body like `{}` decodes to
//! a zero value; optional scalars are `Option<T>` so JSON `null` is accepted
//! too. Lists and maps go through `null_as_default`, so `null` decodes to an
//! empty collection. Request types skip unset optional fields when serialized. Nested
//! shapes that recur across resources (people, categories, brands, incident
//! parts) live in `common` and are reused instead of redeclared.

/// Defines an integer-coded enum that (de)serializes as its numeric code and
/// keeps unknown codes in an `Other` variant.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A code this client does not know about.
            Other(i64),
        }

        impl $name {
            pub fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Other(code) => code,
                }
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Other(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value.code()
            }
        }
    };
}

/// Deserializes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub mod articles;
pub mod channels;
pub mod common;
pub mod contacts;
pub mod conversations;
pub mod incidents;
pub mod messages;
pub mod notes;
pub mod reports;
pub mod response_templates;
pub mod staff;
pub mod systems;

pub use articles::*;
pub use channels::*;
pub use common::*;
pub use contacts::*;
pub use conversations::*;
pub use incidents::*;
pub use messages::*;
pub use notes::*;
pub use reports::*;
pub use response_templates::*;
pub use staff::*;
pub use systems::*;
