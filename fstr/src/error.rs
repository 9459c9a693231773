//! Error types for template parsing and rendering

use crate::template::FormatSpec;

/// Parse error with position information
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset into the template
    pub position: usize,
    /// Excerpt of the template starting at `position`
    pub context: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, position: usize, input: &str) -> Self {
        Self {
            message: message.into(),
            position,
            context: input[position..].chars().take(20).collect(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at position {}: {}", self.position, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (near '{}')", self.context)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Everything that can go wrong in a single interpolation
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolateError {
    /// Brace syntax does not match the placeholder grammar
    MalformedPlaceholder(ParseError),
    /// Placeholder names an identifier missing from the bindings
    UnboundIdentifier { name: String },
    /// Format spec applied to a value that is not a number
    TypeMismatch {
        name: String,
        type_name: &'static str,
        spec: FormatSpec,
    },
    /// Formatter called with a spec that is neither grouping nor precision.
    /// The parser never produces one.
    InvalidFormatSpec { spec: FormatSpec },
}

impl std::fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolateError::MalformedPlaceholder(err) => {
                write!(f, "malformed placeholder {}", err)
            }
            InterpolateError::UnboundIdentifier { name } => {
                write!(f, "no binding for identifier '{}'", name)
            }
            InterpolateError::TypeMismatch {
                name,
                type_name,
                spec,
            } => write!(
                f,
                "cannot apply format spec '{}' to {} binding '{}'",
                spec, type_name, name
            ),
            InterpolateError::InvalidFormatSpec { spec } => {
                write!(f, "invalid format spec '{}' (no grouping or precision)", spec)
            }
        }
    }
}

impl std::error::Error for InterpolateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InterpolateError::MalformedPlaceholder(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for InterpolateError {
    fn from(err: ParseError) -> Self {
        InterpolateError::MalformedPlaceholder(err)
    }
}
