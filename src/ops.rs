//! Forwarding operations used by `#[derive(Newtype)]`.
//!
//! Each function implements one derived capability purely in terms of the
//! same operation on the raw value. The derive emits trait impls that call
//! straight into these, and they are public so a hand-written impl can reuse
//! them.
//!
//! None of these introduce a failure mode of their own: fallible operations
//! ([`deserialize`], [`from_str`]) return the raw type's error untouched.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::literal::{IntegerLiteral, StringLiteral};
use crate::wrapper::Newtype;

#[inline]
pub fn eq<W>(lhs: &W, rhs: &W) -> bool
where
    W: Newtype,
    W::Raw: PartialEq,
{
    lhs.raw() == rhs.raw()
}

#[inline]
pub fn partial_cmp<W>(lhs: &W, rhs: &W) -> Option<Ordering>
where
    W: Newtype,
    W::Raw: PartialOrd,
{
    lhs.raw().partial_cmp(rhs.raw())
}

#[inline]
pub fn cmp<W>(lhs: &W, rhs: &W) -> Ordering
where
    W: Newtype,
    W::Raw: Ord,
{
    lhs.raw().cmp(rhs.raw())
}

/// Feeds only the raw value to `state`, so a wrapper and its raw value hash
/// identically under the same hasher.
#[inline]
pub fn hash<W, H>(value: &W, state: &mut H)
where
    W: Newtype,
    W::Raw: Hash,
    H: Hasher,
{
    value.raw().hash(state)
}

/// Serialize the raw value alone. The wrapper does not appear in the output.
pub fn serialize<W, S>(value: &W, serializer: S) -> Result<S::Ok, S::Error>
where
    W: Newtype,
    W::Raw: Serialize,
    S: Serializer,
{
    value.raw().serialize(serializer)
}

/// Decode a raw value and wrap it. Fails exactly when decoding the raw type
/// fails, with the same error.
pub fn deserialize<'de, W, D>(deserializer: D) -> Result<W, D::Error>
where
    W: Newtype,
    W::Raw: Deserialize<'de>,
    D: Deserializer<'de>,
{
    W::Raw::deserialize(deserializer).map(W::from_raw)
}

#[inline]
pub fn add<W>(lhs: W, rhs: W) -> W
where
    W: Newtype,
    W::Raw: Add<Output = W::Raw>,
{
    W::from_raw(lhs.into_raw() + rhs.into_raw())
}

#[inline]
pub fn sub<W>(lhs: W, rhs: W) -> W
where
    W: Newtype,
    W::Raw: Sub<Output = W::Raw>,
{
    W::from_raw(lhs.into_raw() - rhs.into_raw())
}

#[inline]
pub fn mul<W>(lhs: W, rhs: W) -> W
where
    W: Newtype,
    W::Raw: Mul<Output = W::Raw>,
{
    W::from_raw(lhs.into_raw() * rhs.into_raw())
}

#[inline]
pub fn neg<W>(value: W) -> W
where
    W: Newtype,
    W::Raw: Neg<Output = W::Raw>,
{
    W::from_raw(-value.into_raw())
}

/// Format exactly as the raw value, honouring width/precision flags.
pub fn fmt<W>(value: &W, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    W: Newtype,
    W::Raw: fmt::Display,
{
    fmt::Display::fmt(value.raw(), f)
}

pub fn from_str<W>(s: &str) -> Result<W, <W::Raw as FromStr>::Err>
where
    W: Newtype,
    W::Raw: FromStr,
{
    s.parse::<W::Raw>().map(W::from_raw)
}

#[inline]
pub fn from_integer_literal<W>(literal: <W::Raw as IntegerLiteral>::Literal) -> W
where
    W: Newtype,
    W::Raw: IntegerLiteral,
{
    W::from_raw(W::Raw::from_integer_literal(literal))
}

#[inline]
pub fn from_string_literal<W>(literal: &'static str) -> W
where
    W: Newtype,
    W::Raw: StringLiteral,
{
    W::from_raw(W::Raw::from_string_literal(literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    // Hand-written so these tests do not depend on the derive.
    #[derive(Debug, Clone, Copy)]
    struct Celsius(f64);

    impl Newtype for Celsius {
        type Raw = f64;

        fn from_raw(raw: f64) -> Self {
            Celsius(raw)
        }

        fn raw(&self) -> &f64 {
            &self.0
        }

        fn into_raw(self) -> f64 {
            self.0
        }
    }

    #[derive(Debug)]
    struct Count(u32);

    impl Newtype for Count {
        type Raw = u32;

        fn from_raw(raw: u32) -> Self {
            Count(raw)
        }

        fn raw(&self) -> &u32 {
            &self.0
        }

        fn into_raw(self) -> u32 {
            self.0
        }
    }

    fn digest<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn digest_wrapper(value: &Count) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash(value, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_comparisons_follow_raw() {
        assert!(eq(&Celsius(1.5), &Celsius(1.5)));
        assert!(!eq(&Celsius(1.5), &Celsius(2.0)));
        assert_eq!(
            partial_cmp(&Celsius(1.0), &Celsius(2.0)),
            Some(Ordering::Less)
        );
        assert_eq!(partial_cmp(&Celsius(f64::NAN), &Celsius(0.0)), None);
        assert_eq!(cmp(&Count(3), &Count(3)), Ordering::Equal);
        assert_eq!(cmp(&Count(4), &Count(3)), Ordering::Greater);
    }

    #[test]
    fn test_hash_matches_raw_hash() {
        assert_eq!(digest_wrapper(&Count(7)), digest(&7u32));
        assert_ne!(digest_wrapper(&Count(7)), digest_wrapper(&Count(8)));
    }

    #[test]
    fn test_arithmetic_wraps_result() {
        assert_eq!(mul(Celsius(2.0), Celsius(3.0)).0, 6.0);
        assert_eq!(add(Count(2), Count(3)).0, 5);
        assert_eq!(sub(Count(5), Count(3)).0, 2);
        assert_eq!(neg(Celsius(5.0)).0, -5.0);
    }

    #[test]
    fn test_from_str_propagates_raw_error() {
        let parsed: Count = from_str("12").unwrap();
        assert_eq!(parsed.0, 12);

        let err = from_str::<Count>("twelve").unwrap_err();
        assert_eq!(err, "twelve".parse::<u32>().unwrap_err());
    }

    #[test]
    fn test_literals() {
        let c: Celsius = from_integer_literal(21);
        assert_eq!(c.0, 21.0);
        let n: Count = from_integer_literal(9);
        assert_eq!(n.0, 9);
    }
}
