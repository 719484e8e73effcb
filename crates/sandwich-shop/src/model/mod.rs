//! Pure data structures (DTOs) managed by the [`ResourceActor`](resource_actor::ResourceActor).
//!
//! Each resource comes as a triple: the stored record, a `*Create` payload with every
//! domain field required, and a `*Update` payload where every field is optional.

// Must precede the submodules that invoke it.
/// Declares a type-safe integer identifier.
///
/// The wrapper serializes as a bare integer in JSON and is stored as a plain
/// `INTEGER` column, so `OrderId(3)` travels as `3` everywhere outside Rust.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod order;
pub mod order_detail;
pub mod recipe;
pub mod resource;
pub mod sandwich;

pub use order::*;
pub use order_detail::*;
pub use recipe::*;
pub use resource::*;
pub use sandwich::*;
