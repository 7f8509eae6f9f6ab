//! Typed path parameters.
//!
//! A [`PathParam<T>`] pairs a parameter name with a [`PartialIso`] from the
//! matched text to `T`. The same value reads a parameter out of a
//! [`ParamVec`] and writes one back, so a route's parse and render sides
//! share one definition.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use crate::error::ParamError;
use crate::iso::PartialIso;

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Matched parameters in path order.
///
/// Names are `Arc<str>` because they come from the parsed template and are
/// shared by every match; values are per-request text.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Look up a parameter by name.
#[must_use]
pub fn get_param<'a>(params: &'a ParamVec, name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k.as_ref() == name)
        .map(|(_, v)| v.as_str())
}

/// A named path parameter with its text conversion.
#[derive(Debug, Clone)]
pub struct PathParam<T> {
    name: Arc<str>,
    iso: PartialIso<String, T>,
}

impl<T> PathParam<T> {
    pub fn new(name: impl Into<Arc<str>>, iso: PartialIso<String, T>) -> Self {
        Self {
            name: name.into(),
            iso,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read and convert this parameter from `params`.
    ///
    /// # Errors
    ///
    /// [`ParamError::Missing`] if the name is absent, [`ParamError::Rejected`]
    /// if the iso refuses the text.
    pub fn parse(&self, params: &ParamVec) -> Result<T, ParamError> {
        let raw = get_param(params, &self.name).ok_or_else(|| ParamError::Missing {
            name: self.name.to_string(),
        })?;
        self.iso.apply(raw.to_owned()).ok_or_else(|| {
            debug!(param = %self.name, value = %raw, "Path parameter rejected");
            ParamError::Rejected {
                name: self.name.to_string(),
                value: raw.to_owned(),
            }
        })
    }

    /// Convert `value` back to a `(name, text)` pair ready for a [`ParamVec`].
    ///
    /// # Errors
    ///
    /// [`ParamError::Unprintable`] if the iso refuses the value.
    pub fn print(&self, value: T) -> Result<(Arc<str>, String), ParamError> {
        self.iso
            .unapply(value)
            .map(|text| (Arc::clone(&self.name), text))
            .ok_or_else(|| ParamError::Unprintable {
                name: self.name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn params(pairs: &[(&str, &str)]) -> ParamVec {
        pairs
            .iter()
            .map(|(k, v)| (Arc::from(*k), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_param() {
        let p: ParamVec = smallvec![(Arc::from("id"), "42".to_string())];
        assert_eq!(get_param(&p, "id"), Some("42"));
        assert_eq!(get_param(&p, "other"), None);
    }

    #[test]
    fn test_parse_and_print() {
        let id = PathParam::new("id", PartialIso::<String, u32>::parsed());
        assert_eq!(id.parse(&params(&[("id", "42")])), Ok(42));
        let (name, text) = id.print(42).unwrap();
        assert_eq!(&*name, "id");
        assert_eq!(text, "42");
    }

    #[test]
    fn test_parse_errors() {
        let id = PathParam::new("id", PartialIso::<String, u32>::parsed());
        assert_eq!(
            id.parse(&params(&[("name", "x")])),
            Err(ParamError::Missing {
                name: "id".to_string()
            })
        );
        assert_eq!(
            id.parse(&params(&[("id", "-1")])),
            Err(ParamError::Rejected {
                name: "id".to_string(),
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_print_error() {
        let positive = PartialIso::<String, i32>::parsed().then(PartialIso::new(
            |n: i32| (n > 0).then_some(n),
            |n: i32| (n > 0).then_some(n),
        ));
        let page = PathParam::new("page", positive);
        assert_eq!(
            page.print(0),
            Err(ParamError::Unprintable {
                name: "page".to_string()
            })
        );
    }
}
