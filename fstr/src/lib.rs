//! Python f-string style string interpolation.
//!
//! A template mixes literal text with `{name}` placeholders that are looked up
//! in a binding table:
//!
//! ```
//! use fstr::{interpolate, Bindings, Value};
//!
//! let mut data = Bindings::new();
//! data.insert("name".into(), Value::from("John Doe"));
//! data.insert("balance".into(), Value::from(123.456));
//!
//! let out = interpolate("Hello {name}, your balance is {balance:.2f}", &data).unwrap();
//! assert_eq!(out, "Hello John Doe, your balance is 123.46");
//! ```
//!
//! Placeholders come in four shapes: `{key}`, `{key=}`, `{key:spec}` and
//! `{key=:spec}`, where `spec` is `,` (thousands grouping), `.Nf` (fixed
//! precision) or `,.Nf` (both). There are no expressions and no brace escapes.

pub mod error;
pub mod number;
pub mod template;
pub mod value;

pub use error::{InterpolateError, ParseError};
pub use number::format_number;
pub use template::{FormatSpec, Part, Placeholder, PlaceholderKind, Template, parse_template};
pub use value::{Bindings, Value};

/// Interpolate `template` with values from `bindings`
///
/// Parses the template, then resolves every placeholder. The bindings are
/// only read; integer values are widened to floats on the fly when a format
/// spec needs them.
pub fn interpolate(template: &str, bindings: &Bindings) -> Result<String, InterpolateError> {
    let parsed = parse_template(template)?;
    log::debug!(
        "interpolating template with {} placeholder(s) against {} binding(s)",
        parsed.placeholders().count(),
        bindings.len()
    );
    parsed.render(bindings)
}
