//! Single-pass scanner for placeholder templates
//!
//! Grammar:
//!
//! ```text
//! placeholder := "{" identifier [ "=" ] [ ":" format_spec ] "}"
//! identifier  := [A-Za-z0-9_]+
//! format_spec := "," | "." digits "f" | "," "." digits "f"
//! ```
//!
//! Literal braces are not supported: a `{` always opens a placeholder and a
//! `}` outside a placeholder is an error.

use std::str::CharIndices;

use super::ast::*;
use crate::error::ParseError;

/// Parse a template string into its intermediate representation
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut parts = Vec::new();
    let mut current_literal = String::new();
    let mut chars = input.char_indices();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if !current_literal.is_empty() {
                    parts.push(Part::Literal(std::mem::take(&mut current_literal)));
                }
                let placeholder = PlaceholderScanner::new(input, pos).scan(&mut chars)?;
                log::trace!("parsed placeholder {} at {}", placeholder, pos);
                parts.push(Part::Placeholder(placeholder));
            }
            '}' => {
                return Err(ParseError::new(
                    "unmatched '}' outside a placeholder",
                    pos,
                    input,
                ));
            }
            _ => current_literal.push(ch),
        }
    }

    if !current_literal.is_empty() {
        parts.push(Part::Literal(current_literal));
    }

    Ok(Template::new(parts, input.to_string()))
}

impl Template {
    /// Parse a template string; see [`parse_template`]
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_template(input)
    }
}

impl std::str::FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_template(s)
    }
}

/// Scanner states inside a placeholder, after the opening `{`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading identifier characters
    Ident,
    /// Seen `=`, expecting `:` or `}`
    Echo,
    /// Seen `:`, expecting `,` or `.`
    SpecStart,
    /// Seen `,`, expecting `.` or `}`
    Grouped,
    /// Seen `.`, expecting the first precision digit
    Dot,
    /// Reading precision digits, expecting more or `f`
    Digits,
    /// Seen `f`, expecting `}`
    Suffix,
}

struct PlaceholderScanner<'a> {
    input: &'a str,
    /// Offset of the opening `{`
    open: usize,
    state: State,
    name_end: usize,
    echo: bool,
    grouping: bool,
    digits_start: usize,
    digits_end: usize,
}

impl<'a> PlaceholderScanner<'a> {
    fn new(input: &'a str, open: usize) -> Self {
        Self {
            input,
            open,
            state: State::Ident,
            name_end: open + 1,
            echo: false,
            grouping: false,
            digits_start: 0,
            digits_end: 0,
        }
    }

    fn error(&self, message: impl Into<String>, position: usize) -> ParseError {
        ParseError::new(message, position, self.input)
    }

    /// Consume characters up to and including the closing `}`
    fn scan(mut self, chars: &mut CharIndices<'_>) -> Result<Placeholder, ParseError> {
        for (pos, ch) in chars.by_ref() {
            if ch == '{' {
                return Err(self.error("nested '{' inside placeholder", pos));
            }

            match (self.state, ch) {
                (State::Ident, c) if c.is_ascii_alphanumeric() || c == '_' => {
                    self.name_end = pos + 1;
                }
                (State::Ident, '=' | ':' | '}') if self.name_end == self.open + 1 => {
                    return Err(self.error("empty identifier", pos));
                }
                (State::Ident, '=') => {
                    self.echo = true;
                    self.state = State::Echo;
                }
                (State::Ident | State::Echo, ':') => self.state = State::SpecStart,
                (State::Ident | State::Echo, '}') => return self.finish(None),
                (State::Ident, c) => {
                    return Err(self.error(format!("invalid character '{}' in identifier", c), pos));
                }
                (State::Echo, _) => {
                    return Err(self.error("expected ':' or '}' after '='", pos));
                }

                (State::SpecStart, ',') => {
                    self.grouping = true;
                    self.state = State::Grouped;
                }
                (State::SpecStart | State::Grouped, '.') => self.state = State::Dot,
                (State::SpecStart, '}') => return Err(self.error("empty format spec", pos)),
                (State::SpecStart, c) => {
                    return Err(self.error(format!("unrecognized format spec character '{}'", c), pos));
                }
                (State::Grouped, '}') => return self.finish(Some(FormatSpec::grouping())),
                (State::Grouped, _) => {
                    return Err(self.error("expected '.' or '}' after ','", pos));
                }

                (State::Dot, c) if c.is_ascii_digit() => {
                    self.digits_start = pos;
                    self.digits_end = pos + 1;
                    self.state = State::Digits;
                }
                (State::Dot, _) => return Err(self.error("expected digits after '.'", pos)),
                (State::Digits, c) if c.is_ascii_digit() => self.digits_end = pos + 1,
                (State::Digits, 'f') => self.state = State::Suffix,
                (State::Digits, _) => {
                    return Err(self.error("expected 'f' after precision digits", pos));
                }
                (State::Suffix, '}') => {
                    let spec = FormatSpec {
                        grouping: self.grouping,
                        precision: Some(self.precision()?),
                    };
                    return self.finish(Some(spec));
                }
                (State::Suffix, _) => {
                    return Err(self.error("expected '}' after format spec", pos));
                }
            }
        }

        Err(self.error("unclosed placeholder, expected '}'", self.open))
    }

    fn precision(&self) -> Result<u8, ParseError> {
        let digits = &self.input[self.digits_start..self.digits_end];
        digits.parse::<u8>().map_err(|_| {
            self.error(
                format!("precision {} out of range (max {})", digits, u8::MAX),
                self.digits_start,
            )
        })
    }

    fn finish(self, spec: Option<FormatSpec>) -> Result<Placeholder, ParseError> {
        let kind = match (self.echo, spec) {
            (false, None) => PlaceholderKind::Plain,
            (true, None) => PlaceholderKind::Echo,
            (false, Some(spec)) => PlaceholderKind::Formatted(spec),
            (true, Some(spec)) => PlaceholderKind::EchoFormatted(spec),
        };

        Ok(Placeholder {
            name: self.input[self.open + 1..self.name_end].to_string(),
            kind,
            position: self.open,
        })
    }
}
