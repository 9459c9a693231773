//! Placeholder templates - f-string style interpolation
//!
//! Supports:
//! - Plain placeholders: `{name}`
//! - Echo placeholders: `{name=}` renders as `name=<value>`
//! - Numeric format specs: `{balance:,}`, `{gpa:.2f}`, `{total:,.3f}`
//! - Echo with format spec: `{gpa=:,.2f}`

mod ast;
mod eval;
mod parser;

pub use ast::{FormatSpec, Part, Placeholder, PlaceholderKind, Template};
pub use eval::evaluate;
pub use parser::parse_template;
