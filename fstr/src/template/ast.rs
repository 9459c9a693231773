//! Intermediate representation of a parsed template

use serde::{Deserialize, Serialize};

/// A parsed template: literal text interleaved with placeholders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// The parts of the template, in source order
    pub parts: Vec<Part>,
    /// The original template string (for display/debugging)
    #[serde(default)]
    pub source: String,
}

impl Template {
    /// Create a new template
    pub fn new(parts: Vec<Part>, source: String) -> Self {
        Self { parts, source }
    }

    /// All placeholders, in source order
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.parts.iter().filter_map(|part| match part {
            Part::Placeholder(p) => Some(p),
            Part::Literal(_) => None,
        })
    }

    /// Referenced identifiers in order of first appearance, without duplicates
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in self.placeholders() {
            if !names.contains(&p.name.as_str()) {
                names.push(&p.name);
            }
        }
        names
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// A part of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Part {
    /// Literal text, copied to the output as is
    Literal(String),
    /// A substitution point: `{...}`
    Placeholder(Placeholder),
}

/// A single `{...}` token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Identifier looked up in the bindings
    pub name: String,
    /// Syntactic variant
    pub kind: PlaceholderKind,
    /// Byte offset of the opening brace in the template
    pub position: usize,
}

impl Placeholder {
    /// Whether output is prefixed with `name=`
    pub fn is_echo(&self) -> bool {
        matches!(
            self.kind,
            PlaceholderKind::Echo | PlaceholderKind::EchoFormatted(_)
        )
    }

    /// The numeric format spec, if any
    pub fn spec(&self) -> Option<&FormatSpec> {
        match &self.kind {
            PlaceholderKind::Formatted(spec) | PlaceholderKind::EchoFormatted(spec) => Some(spec),
            PlaceholderKind::Plain | PlaceholderKind::Echo => None,
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}", self.name)?;
        if self.is_echo() {
            write!(f, "=")?;
        }
        if let Some(spec) = self.spec() {
            write!(f, ":{}", spec)?;
        }
        write!(f, "}}")
    }
}

/// The four placeholder variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaceholderKind {
    /// `{key}`
    Plain,
    /// `{key=}`
    Echo,
    /// `{key:spec}`
    Formatted(FormatSpec),
    /// `{key=:spec}`
    EchoFormatted(FormatSpec),
}

/// Numeric format specifier: `,` / `.Nf` / `,.Nf`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Use thousands separator (`,`)
    pub grouping: bool,
    /// Fixed decimal precision (`.2f` means 2 decimal places)
    pub precision: Option<u8>,
}

impl FormatSpec {
    /// `,`
    pub fn grouping() -> Self {
        Self {
            grouping: true,
            precision: None,
        }
    }

    /// `.Nf`
    pub fn precision(digits: u8) -> Self {
        Self {
            grouping: false,
            precision: Some(digits),
        }
    }

    /// `,.Nf`
    pub fn grouped_precision(digits: u8) -> Self {
        Self {
            grouping: true,
            precision: Some(digits),
        }
    }

    /// Whether this is one of the three shapes the grammar allows
    pub fn is_valid(&self) -> bool {
        self.grouping || self.precision.is_some()
    }
}

impl std::fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.grouping {
            write!(f, ",")?;
        }
        if let Some(prec) = self.precision {
            write!(f, ".{}f", prec)?;
        }
        Ok(())
    }
}
