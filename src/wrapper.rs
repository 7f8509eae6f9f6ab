//! # Wrapper Module
//!
//! Defines [`Newtype`], the capability "is a wrapper around exactly one raw
//! value".
//!
//! A newtype gives a raw value a distinct nominal type (a `UserId` is not a
//! `PostId` even though both are `i64`) without any runtime cost. Everything
//! else in this crate is expressed in terms of the three methods below, so a
//! wrapper's identity for equality, ordering, hashing and encoding is always
//! exactly its raw value.
//!
//! ## Usage
//!
//! Usually the trait is derived:
//!
//! ```rust
//! use newtype_kit::Newtype;
//!
//! #[derive(Newtype, Debug, Clone, Copy)]
//! #[newtype(eq, ord, hash)]
//! struct UserId(i64);
//!
//! let id = UserId::from_raw(42);
//! assert_eq!(*id.raw(), 42);
//! assert!(UserId::from_raw(42) < UserId::from_raw(43));
//! ```
//!
//! It can also be implemented by hand when a derive is not wanted:
//!
//! ```rust
//! use newtype_kit::Newtype;
//!
//! struct Slug {
//!     text: String,
//! }
//!
//! impl Newtype for Slug {
//!     type Raw = String;
//!
//!     fn from_raw(raw: String) -> Self {
//!         Slug { text: raw }
//!     }
//!
//!     fn raw(&self) -> &String {
//!         &self.text
//!     }
//!
//!     fn into_raw(self) -> String {
//!         self.text
//!     }
//! }
//!
//! assert_eq!(Slug::from_raw("intro".to_string()).raw(), "intro");
//! ```

/// A type that wraps exactly one raw value.
///
/// Implementors must store nothing but the raw value: `from_raw` followed by
/// `into_raw` returns the original value unchanged, and the reverse holds
/// for wrapper values.
///
/// The derive rejects anything that is not a single-field struct:
///
/// ```compile_fail
/// use newtype_kit::Newtype;
///
/// #[derive(Newtype)]
/// enum Direction {
///     North,
/// }
/// ```
///
/// ```compile_fail
/// use newtype_kit::Newtype;
///
/// #[derive(Newtype)]
/// struct Point(i32, i32);
/// ```
///
/// ```compile_fail
/// use newtype_kit::Newtype;
///
/// #[derive(Newtype)]
/// struct Unit;
/// ```
///
/// Unknown capability names are errors too:
///
/// ```compile_fail
/// use newtype_kit::Newtype;
///
/// #[derive(Newtype)]
/// #[newtype(bogus)]
/// struct Bogus(i32);
/// ```
///
/// The same shapes compile once they are valid:
///
/// ```
/// use newtype_kit::Newtype;
///
/// #[derive(Newtype)]
/// #[newtype(eq)]
/// struct Valid(i32);
///
/// assert!(Valid::from_raw(1) == Valid::from_raw(1));
/// ```
pub trait Newtype: Sized {
    /// The wrapped value's type.
    type Raw;

    /// Wrap `raw` as-is. Never fails and performs no validation.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Borrow the raw value.
    fn raw(&self) -> &Self::Raw;

    /// Unwrap into the raw value.
    fn into_raw(self) -> Self::Raw;
}
