use std::fmt;

/// Path parameter error
///
/// Returned by [`PathParam`](crate::params::PathParam) and
/// [`PathPattern::render`](crate::route::PathPattern::render) when a named
/// parameter cannot be read or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The parameter is not present in the matched parameters.
    Missing {
        /// Parameter name
        name: String,
    },
    /// The parameter is present but its iso refused the raw text.
    Rejected {
        /// Parameter name
        name: String,
        /// The text that failed to convert
        value: String,
    },
    /// The iso refused to print a typed value back to text.
    Unprintable {
        /// Parameter name
        name: String,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing { name } => {
                write!(f, "Path parameter '{}' is missing", name)
            }
            ParamError::Rejected { name, value } => {
                write!(
                    f,
                    "Path parameter '{}' has invalid value '{}'",
                    name, value
                )
            }
            ParamError::Unprintable { name } => {
                write!(f, "Path parameter '{}' could not be rendered", name)
            }
        }
    }
}

impl std::error::Error for ParamError {}
