//! Substitution of parsed templates against a binding table

use super::ast::*;
use crate::error::InterpolateError;
use crate::number::format_number;
use crate::value::{Bindings, Value};

impl Template {
    /// Render this template against a binding table
    ///
    /// Either every placeholder resolves and the full string is returned, or
    /// the first failure is returned and nothing else.
    pub fn render(&self, bindings: &Bindings) -> Result<String, InterpolateError> {
        evaluate(self, bindings)
    }

    /// Identifiers referenced by the template but absent from `bindings`
    pub fn missing_identifiers<'a>(&'a self, bindings: &Bindings) -> Vec<&'a str> {
        self.identifiers()
            .into_iter()
            .filter(|name| !bindings.contains_key(*name))
            .collect()
    }

    /// Validate bindings without rendering
    ///
    /// Reports the first unbound identifier, then the first format spec
    /// applied to a non-numeric value.
    pub fn check(&self, bindings: &Bindings) -> Result<(), InterpolateError> {
        let missing = self.missing_identifiers(bindings);
        if let Some(first) = missing.first() {
            if missing.len() > 1 {
                log::debug!("unbound identifiers: {}", missing.join(", "));
            }
            return Err(InterpolateError::UnboundIdentifier {
                name: first.to_string(),
            });
        }

        for placeholder in self.placeholders() {
            if let Some(spec) = placeholder.spec() {
                let value = lookup(&placeholder.name, bindings)?;
                if !value.is_numeric() {
                    return Err(type_mismatch(&placeholder.name, value, spec));
                }
            }
        }
        Ok(())
    }
}

/// Evaluate a template against a binding table
pub fn evaluate(template: &Template, bindings: &Bindings) -> Result<String, InterpolateError> {
    let mut result = String::with_capacity(template.source.len());

    for part in &template.parts {
        match part {
            Part::Literal(s) => result.push_str(s),
            Part::Placeholder(placeholder) => {
                result.push_str(&render_placeholder(placeholder, bindings)?);
            }
        }
    }

    Ok(result)
}

fn render_placeholder(
    placeholder: &Placeholder,
    bindings: &Bindings,
) -> Result<String, InterpolateError> {
    let name = &placeholder.name;
    let value = lookup(name, bindings)?;

    let rendered = match &placeholder.kind {
        PlaceholderKind::Plain => value.to_string(),
        PlaceholderKind::Echo => format!("{}={}", name, value),
        PlaceholderKind::Formatted(spec) => apply_format_spec(name, value, spec)?,
        PlaceholderKind::EchoFormatted(spec) => {
            format!("{}={}", name, apply_format_spec(name, value, spec)?)
        }
    };
    Ok(rendered)
}

fn lookup<'a>(name: &str, bindings: &'a Bindings) -> Result<&'a Value, InterpolateError> {
    bindings
        .get(name)
        .ok_or_else(|| InterpolateError::UnboundIdentifier {
            name: name.to_string(),
        })
}

/// Apply a numeric format spec, widening integers to floats first
fn apply_format_spec(
    name: &str,
    value: &Value,
    spec: &FormatSpec,
) -> Result<String, InterpolateError> {
    match value.widened().as_float() {
        Some(n) => format_number(n, spec),
        None => Err(type_mismatch(name, value, spec)),
    }
}

fn type_mismatch(name: &str, value: &Value, spec: &FormatSpec) -> InterpolateError {
    InterpolateError::TypeMismatch {
        name: name.to_string(),
        type_name: value.type_name(),
        spec: *spec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_template;
    use serde_json::json;

    fn bindings(value: serde_json::Value) -> Bindings {
        serde_json::from_value(value).unwrap()
    }

    fn eval_template(template: &str, record: serde_json::Value) -> Result<String, InterpolateError> {
        let parsed = parse_template(template)?;
        evaluate(&parsed, &bindings(record))
    }

    #[test]
    fn test_eval_literal() {
        let result = eval_template("Hello, World!", json!({"unused": 1})).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_eval_simple_field() {
        let result = eval_template("{name}", json!({"name": "John"})).unwrap();
        assert_eq!(result, "John");
    }

    #[test]
    fn test_eval_mixed() {
        let result = eval_template(
            "My name is {name} and I am {age} years old.",
            json!({"name": "Ziad Mansour", "age": 23}),
        )
        .unwrap();
        assert_eq!(result, "My name is Ziad Mansour and I am 23 years old.");
    }

    #[test]
    fn test_eval_echo() {
        let result = eval_template("{name=} {age=}", json!({"name": "World", "age": 23})).unwrap();
        assert_eq!(result, "name=World age=23");
    }

    #[test]
    fn test_eval_integer_takes_format_spec() {
        let result = eval_template("{sum:,} {n:.2f}", json!({"sum": 123456789, "n": 7})).unwrap();
        assert_eq!(result, "123,456,789 7.00");
    }

    #[test]
    fn test_eval_bool_plain() {
        let result = eval_template("active={active}", json!({"active": true})).unwrap();
        assert_eq!(result, "active=true");
    }

    #[test]
    fn test_eval_repeated_identifier() {
        let result = eval_template("{x} {x:.1f} {x=}", json!({"x": 2.25})).unwrap();
        assert_eq!(result, "2.25 2.2 x=2.25");
    }

    #[test]
    fn test_eval_unbound() {
        let err = eval_template("Hi {name}, {missing}", json!({"name": "A"})).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::UnboundIdentifier {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_eval_type_mismatch() {
        let err = eval_template("{name:.2f}", json!({"name": "text"})).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::TypeMismatch {
                name: "name".to_string(),
                type_name: "string",
                spec: FormatSpec::precision(2),
            }
        );

        let err = eval_template("{flag=:,}", json!({"flag": true})).unwrap_err();
        assert!(matches!(err, InterpolateError::TypeMismatch { type_name: "boolean", .. }));
    }

    #[test]
    fn test_bindings_not_mutated() {
        let table = bindings(json!({"age": 23}));
        let template = parse_template("{age:.1f}").unwrap();
        assert_eq!(template.render(&table).unwrap(), "23.0");
        assert_eq!(table["age"], Value::Int(23));
    }

    #[test]
    fn test_missing_identifiers() {
        let template = parse_template("{a} {b} {a} {c}").unwrap();
        let table = bindings(json!({"b": 1}));
        assert_eq!(template.missing_identifiers(&table), vec!["a", "c"]);
    }

    #[test]
    fn test_check() {
        let template = parse_template("{name} {gpa:.2f}").unwrap();

        assert!(template.check(&bindings(json!({"name": "x", "gpa": 3.5}))).is_ok());

        let err = template.check(&bindings(json!({"gpa": 3.5}))).unwrap_err();
        assert!(matches!(err, InterpolateError::UnboundIdentifier { name } if name == "name"));

        let err = template
            .check(&bindings(json!({"name": "x", "gpa": "high"})))
            .unwrap_err();
        assert!(matches!(err, InterpolateError::TypeMismatch { .. }));
    }
}
