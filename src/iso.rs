//! # Iso Module
//!
//! A [`PartialIso<A, B>`] is a pair of conversions `A -> Option<B>` and
//! `B -> Option<A>` that are inverse to each other wherever both succeed.
//! Routing code composes them to turn path segments into typed values and
//! back again with one description, so parsing and URL rendering never drift
//! apart.
//!
//! ## Newtype adapter
//!
//! [`PartialIso::newtype`] lifts any [`Newtype`] into an iso from its raw
//! value. Both directions are total: `apply` is `from_raw`, `unapply` is
//! `into_raw`.
//!
//! ```rust
//! use newtype_kit::{iso::PartialIso, Newtype};
//!
//! #[derive(Newtype, Debug, Clone, Copy)]
//! #[newtype(eq)]
//! struct PetId(u64);
//!
//! let segment = PartialIso::<String, u64>::parsed().then(PartialIso::<u64, PetId>::newtype());
//!
//! assert_eq!(segment.apply("17".to_string()), Some(PetId::from_raw(17)));
//! assert_eq!(segment.unapply(PetId::from_raw(17)), Some("17".to_string()));
//! assert_eq!(segment.apply("seventeen".to_string()), None);
//! ```

use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use crate::wrapper::Newtype;

type Conversion<A, B> = Arc<dyn Fn(A) -> Option<B> + Send + Sync>;

/// Bidirectional, possibly partial conversion between `A` and `B`.
pub struct PartialIso<A, B> {
    apply: Conversion<A, B>,
    unapply: Conversion<B, A>,
}

impl<A, B> Clone for PartialIso<A, B> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
            unapply: Arc::clone(&self.unapply),
        }
    }
}

impl<A, B> fmt::Debug for PartialIso<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialIso")
            .field("from", &std::any::type_name::<A>())
            .field("to", &std::any::type_name::<B>())
            .finish()
    }
}

impl<A, B> PartialIso<A, B> {
    pub fn new<F, G>(apply: F, unapply: G) -> Self
    where
        F: Fn(A) -> Option<B> + Send + Sync + 'static,
        G: Fn(B) -> Option<A> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
            unapply: Arc::new(unapply),
        }
    }

    /// Forward direction.
    pub fn apply(&self, a: A) -> Option<B> {
        (self.apply)(a)
    }

    /// Backward direction.
    pub fn unapply(&self, b: B) -> Option<A> {
        (self.unapply)(b)
    }

    /// Swap the two directions.
    #[must_use]
    pub fn inverted(self) -> PartialIso<B, A> {
        PartialIso {
            apply: self.unapply,
            unapply: self.apply,
        }
    }

    /// Compose `self` with `next`: `A -> B -> C` forward, `C -> B -> A`
    /// backward. A `None` from either step ends the conversion.
    #[must_use]
    pub fn then<C>(self, next: PartialIso<B, C>) -> PartialIso<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let (f, g) = (self.apply, next.apply);
        let (h, k) = (next.unapply, self.unapply);
        PartialIso {
            apply: Arc::new(move |a: A| f(a).and_then(|b| g(b))),
            unapply: Arc::new(move |c: C| h(c).and_then(|b| k(b))),
        }
    }
}

impl<A: 'static> PartialIso<A, A> {
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Some, Some)
    }
}

impl<W> PartialIso<W::Raw, W>
where
    W: Newtype + 'static,
{
    /// The total iso between a newtype and its raw value.
    #[must_use]
    pub fn newtype() -> Self {
        Self::new(|raw| Some(W::from_raw(raw)), |w: W| Some(w.into_raw()))
    }
}

impl<T> PartialIso<String, T>
where
    T: FromStr + Display + 'static,
{
    /// Parse with [`FromStr`], print with [`Display`]. Parse failures become
    /// `None`; printing never fails.
    #[must_use]
    pub fn parsed() -> Self {
        Self::new(|s: String| s.parse().ok(), |t: T| Some(t.to_string()))
    }
}
