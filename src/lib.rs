//! # newtype-kit
//!
//! **newtype-kit** turns single-field wrapper structs into fully behaved value types without
//! per-type boilerplate, and connects them to typed routing through partial isos.
//!
//! ## Overview
//!
//! A newtype (`struct UserId(i64)`) buys type-level distinction at zero runtime cost, but
//! every wrapper then needs the same hand-written `PartialEq`, `Ord`, `Hash`, serde and
//! operator impls, each one just forwarding to the raw value. `#[derive(Newtype)]` writes
//! them for you, and only the ones you ask for:
//!
//! ```rust
//! use newtype_kit::Newtype;
//!
//! #[derive(Newtype, Debug, Clone, Copy)]
//! #[newtype(eq, ord, hash, serde, mul, neg, integer_literal)]
//! pub struct UserId(i64);
//!
//! assert!(UserId::from_raw(42) < UserId::from_raw(43));
//! assert_eq!(UserId::from_raw(2) * UserId::from_raw(3), UserId::from(6));
//! assert_eq!(-UserId::from_raw(5), UserId::from_raw(-5));
//! ```
//!
//! ## Architecture
//!
//! - **[`wrapper`]** - The [`Newtype`] trait: construct from a raw value, borrow it, unwrap it
//! - **[`ops`]** - One forwarding function per derivable capability
//! - **[`literal`]** - Integer and string literal construction traits
//! - **[`iso`]** - [`PartialIso`](iso::PartialIso), including the newtype adapter
//! - **[`params`]** - Typed path parameters read and written through isos
//! - **[`route`]** - Bidirectional path templates
//! - **[`ids`]** - [`RequestId`](ids::RequestId), a ready-made ULID newtype
//! - **[`error`]** - Path parameter errors
//!
//! ### Capabilities
//!
//! | `#[newtype(..)]` | Generated impl | Forwards to |
//! |---|---|---|
//! | `partial_eq` / `eq` | `PartialEq` (+ `Eq`) | [`ops::eq`] |
//! | `partial_ord` / `ord` | `PartialOrd` (+ `Ord`) | [`ops::partial_cmp`], [`ops::cmp`] |
//! | `hash` | `Hash` | [`ops::hash`] |
//! | `serialize` / `deserialize` / `serde` | serde traits | [`ops::serialize`], [`ops::deserialize`] |
//! | `add` / `sub` / `mul` / `neg` | `std::ops` traits | [`ops::add`], [`ops::sub`], [`ops::mul`], [`ops::neg`] |
//! | `display` / `from_str` | `Display`, `FromStr` | [`ops::fmt`], [`ops::from_str`] |
//! | `integer_literal` | [`IntegerLiteral`] + `From<literal>` | [`ops::from_integer_literal`] |
//! | `string_literal` | [`StringLiteral`] + `From<&'static str>` | [`ops::from_string_literal`] |
//!
//! The wrapper is transparent on the wire: serializing `UserId(42)` yields exactly what
//! serializing `42` yields, and a failed decode reports the raw type's own error.
//!
//! ### Typed Routing Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Pattern as PathPattern
//!     participant Param as PathParam<UserId>
//!     participant Iso as PartialIso<String, UserId>
//!
//!     Caller->>Pattern: matches("/users/42")
//!     Pattern-->>Caller: ParamVec [("id", "42")]
//!     Caller->>Param: parse(&params)
//!     Param->>Iso: apply("42")
//!     Iso->>Iso: parse i64, then UserId::from_raw
//!     Iso-->>Param: Some(UserId(42))
//!     Param-->>Caller: Ok(UserId(42))
//!
//!     Caller->>Param: print(UserId(42))
//!     Param->>Iso: unapply(UserId(42))
//!     Iso-->>Param: Some("42")
//!     Caller->>Pattern: render(&params)
//!     Pattern-->>Caller: "/users/42"
//! ```

// Lets `#[derive(Newtype)]` refer to `::newtype_kit` from inside this crate.
extern crate self as newtype_kit;

pub mod error;
pub mod ids;
pub mod iso;
pub mod literal;
pub mod ops;
pub mod params;
pub mod route;
pub mod wrapper;

pub use error::ParamError;
pub use iso::PartialIso;
pub use literal::{IntegerLiteral, StringLiteral};
pub use newtype_kit_macros::Newtype;
pub use params::{ParamVec, PathParam};
pub use route::PathPattern;
pub use wrapper::Newtype;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
