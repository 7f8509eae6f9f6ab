//! # Route Module
//!
//! Bidirectional path templates such as `/users/{id}/posts/{post_id}`.
//!
//! A [`PathPattern`] both matches a concrete path into a [`ParamVec`] and
//! renders a [`ParamVec`] back into a path, so the two directions cannot
//! disagree. Combined with [`PathParam`](crate::params::PathParam) and
//! [`PartialIso::newtype`](crate::iso::PartialIso::newtype), a route can go
//! from `/users/42` to a typed `UserId` and back.
//!
//! ## Matching rules
//!
//! - Literal segments compare exactly (case-sensitive)
//! - `{name}` captures one non-empty segment
//! - A single trailing slash on the request path is ignored, except that `//`
//!   is never the root path
//!
//! ```rust
//! use newtype_kit::route::PathPattern;
//!
//! let pattern = PathPattern::parse("/users/{id}").unwrap();
//! let params = pattern.matches("/users/42").unwrap();
//! assert_eq!(params[0].1, "42");
//! assert_eq!(pattern.render(&params).unwrap(), "/users/42");
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{debug, trace};

use crate::error::ParamError;
use crate::params::{get_param, ParamVec};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(Arc<str>),
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a template like `/pets/{id}`.
    ///
    /// # Errors
    ///
    /// Fails if the template does not start with `/`, contains an empty or
    /// unclosed placeholder, an empty segment, or repeats a parameter name.
    pub fn parse(template: &str) -> Result<Self> {
        let rest = template
            .strip_prefix('/')
            .with_context(|| format!("path template '{}' must start with '/'", template))?;

        let mut segments = Vec::new();
        let mut seen = HashSet::new();
        if !rest.is_empty() {
            for (index, part) in rest.split('/').enumerate() {
                let segment = parse_segment(part).with_context(|| {
                    format!("invalid segment {} of path template '{}'", index, template)
                })?;
                if let Segment::Param(name) = &segment {
                    if !seen.insert(Arc::clone(name)) {
                        bail!(
                            "path template '{}' repeats parameter '{}'",
                            template,
                            name
                        );
                    }
                }
                segments.push(segment);
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    /// The template this pattern was parsed from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_ref()),
            Segment::Literal(_) => None,
        })
    }

    /// Match `path`, returning captured parameters in template order.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<ParamVec> {
        let Some(rest) = path.strip_prefix('/') else {
            debug!(template = %self.template, path = %path, "Path is not absolute");
            return None;
        };
        let trimmed = rest.strip_suffix('/').unwrap_or(rest);
        if trimmed.is_empty() && !rest.is_empty() {
            debug!(template = %self.template, path = %path, "Path has an empty segment");
            return None;
        }
        let rest = trimmed;

        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            debug!(template = %self.template, path = %path, "Segment count differs");
            return None;
        }

        let mut params = ParamVec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.push((Arc::clone(name), part.to_string()));
                }
                _ => {
                    debug!(template = %self.template, path = %path, segment = %part, "Path did not match");
                    return None;
                }
            }
        }

        trace!(template = %self.template, path = %path, path_params = ?params, "Path matched");
        Some(params)
    }

    /// Render a concrete path from `params`.
    ///
    /// # Errors
    ///
    /// [`ParamError::Missing`] if a template parameter is absent from `params`,
    /// [`ParamError::Rejected`] if its value is empty or contains `/`.
    pub fn render(&self, params: &ParamVec) -> Result<String, ParamError> {
        let mut out = String::with_capacity(self.template.len());
        if self.segments.is_empty() {
            out.push('/');
        }
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => {
                    let value = get_param(params, name).ok_or_else(|| ParamError::Missing {
                        name: name.to_string(),
                    })?;
                    if value.is_empty() || value.contains('/') {
                        return Err(ParamError::Rejected {
                            name: name.to_string(),
                            value: value.to_string(),
                        });
                    }
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

fn parse_segment(part: &str) -> Result<Segment> {
    if part.is_empty() {
        bail!("empty segment");
    }
    match (part.strip_prefix('{'), part.ends_with('}')) {
        (Some(inner), true) => {
            let name = &inner[..inner.len() - 1];
            if name.is_empty() || name.contains(['{', '}']) {
                bail!("malformed parameter '{}'", part);
            }
            Ok(Segment::Param(Arc::from(name)))
        }
        (None, false) if !part.contains(['{', '}']) => Ok(Segment::Literal(part.to_string())),
        _ => bail!("unbalanced braces in '{}'", part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_param_names() {
        let p = PathPattern::parse("/users/{id}/posts/{post_id}").unwrap();
        assert_eq!(p.param_names().collect::<Vec<_>>(), vec!["id", "post_id"]);
        assert_eq!(p.to_string(), "/users/{id}/posts/{post_id}");
    }

    #[test]
    fn test_parse_rejects_malformed_templates() {
        for bad in [
            "users/{id}",
            "/users/{}",
            "/users/{id",
            "/users/id}",
            "/users//posts",
            "/a/{id}/b/{id}",
            "/x{y}",
        ] {
            assert!(PathPattern::parse(bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_matches() {
        let p = PathPattern::parse("/users/{id}/posts/{post_id}").unwrap();
        let params = p.matches("/users/7/posts/abc").unwrap();
        assert_eq!(get_param(&params, "id"), Some("7"));
        assert_eq!(get_param(&params, "post_id"), Some("abc"));

        assert!(p.matches("/users/7/posts/abc/").is_some());
        assert!(p.matches("/users/7/posts").is_none());
        assert!(p.matches("/users//posts/abc").is_none());
        assert!(p.matches("/Users/7/posts/abc").is_none());
        assert!(p.matches("users/7/posts/abc").is_none());
    }

    #[test]
    fn test_root() {
        let root = PathPattern::parse("/").unwrap();
        assert_eq!(root.matches("/").map(|p| p.len()), Some(0));
        assert!(root.matches("/x").is_none());
        assert!(root.matches("//").is_none());
        assert_eq!(root.render(&ParamVec::new()).unwrap(), "/");
    }

    #[test]
    fn test_render() {
        let p = PathPattern::parse("/pets/{id}").unwrap();
        let mut params = ParamVec::new();
        assert_eq!(
            p.render(&params),
            Err(ParamError::Missing {
                name: "id".to_string()
            })
        );
        params.push((Arc::from("id"), "a/b".to_string()));
        assert!(matches!(p.render(&params), Err(ParamError::Rejected { .. })));
    }
}
