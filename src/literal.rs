//! Literal construction.
//!
//! Rust has no user-definable literal syntax, so "construct from an integer
//! or string literal" is expressed as two traits. A raw type opts in by
//! naming which literal type it accepts; `#[newtype(integer_literal)]` and
//! `#[newtype(string_literal)]` then give the wrapper the same constructor
//! plus a `From` impl for the literal type.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Types constructible from an integer literal.
pub trait IntegerLiteral: Sized {
    /// The literal type accepted, e.g. `i64` for `i64` or `i32` for `f64`.
    type Literal;

    fn from_integer_literal(literal: Self::Literal) -> Self;
}

/// Types constructible from a string literal.
pub trait StringLiteral: Sized {
    fn from_string_literal(literal: &'static str) -> Self;
}

macro_rules! integer_literal_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerLiteral for $ty {
                type Literal = $ty;

                #[inline]
                fn from_integer_literal(literal: $ty) -> Self {
                    literal
                }
            }
        )*
    };
}

integer_literal_identity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats accept the widest integer type they represent exactly.
impl IntegerLiteral for f32 {
    type Literal = i16;

    #[inline]
    fn from_integer_literal(literal: i16) -> Self {
        f32::from(literal)
    }
}

impl IntegerLiteral for f64 {
    type Literal = i32;

    #[inline]
    fn from_integer_literal(literal: i32) -> Self {
        f64::from(literal)
    }
}

impl StringLiteral for &'static str {
    #[inline]
    fn from_string_literal(literal: &'static str) -> Self {
        literal
    }
}

impl StringLiteral for String {
    fn from_string_literal(literal: &'static str) -> Self {
        literal.to_owned()
    }
}

impl StringLiteral for Box<str> {
    fn from_string_literal(literal: &'static str) -> Self {
        Box::from(literal)
    }
}

impl StringLiteral for Arc<str> {
    fn from_string_literal(literal: &'static str) -> Self {
        Arc::from(literal)
    }
}

impl StringLiteral for Rc<str> {
    fn from_string_literal(literal: &'static str) -> Self {
        Rc::from(literal)
    }
}

impl StringLiteral for Cow<'static, str> {
    #[inline]
    fn from_string_literal(literal: &'static str) -> Self {
        Cow::Borrowed(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literals() {
        assert_eq!(u8::from_integer_literal(200), 200u8);
        assert_eq!(i64::from_integer_literal(-3), -3i64);
        assert_eq!(f64::from_integer_literal(i32::MAX), 2147483647.0);
        assert_eq!(f32::from_integer_literal(-7), -7.0f32);
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(String::from_string_literal("abc"), "abc");
        assert_eq!(&*Arc::<str>::from_string_literal("abc"), "abc");
        assert!(matches!(
            Cow::<'static, str>::from_string_literal("abc"),
            Cow::Borrowed("abc")
        ));
    }
}
