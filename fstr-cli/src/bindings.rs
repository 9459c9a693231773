//! Assembling the binding table from config, files and flags

use anyhow::{Context, Result};
use fstr::{Bindings, Value};
use std::fs;
use std::path::Path;

/// Parse a `KEY=VALUE` flag; the value is typed with [`Value::parse_literal`]
pub fn parse_assignment(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        anyhow::bail!("Invalid binding '{}'. Expected format: KEY=VALUE", raw);
    };

    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        anyhow::bail!(
            "Invalid binding name '{}'. Names may only contain letters, digits and '_'",
            key
        );
    }

    Ok((key.to_string(), Value::parse_literal(value)))
}

/// Load a binding table from a `.json` or `.toml` file
pub fn load_bindings_file(path: &Path) -> Result<Bindings> {
    if !path.exists() {
        anyhow::bail!("Bindings file does not exist: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bindings file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON bindings in {}", path.display())),
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML bindings in {}", path.display())),
        _ => anyhow::bail!(
            "Unsupported bindings file '{}'. Use a .json or .toml file",
            path.display()
        ),
    }
}

/// Merge binding layers; later layers win
pub fn merge<I>(layers: I) -> Bindings
where
    I: IntoIterator<Item = Bindings>,
{
    let mut merged = Bindings::new();
    for layer in layers {
        for (key, value) in layer {
            if let Some(previous) = merged.insert(key.clone(), value) {
                log::debug!("Binding '{}' overrides earlier value {}", key, previous);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("name=World").unwrap(),
            ("name".to_string(), Value::from("World"))
        );
        assert_eq!(
            parse_assignment("age=23").unwrap(),
            ("age".to_string(), Value::Int(23))
        );
        assert_eq!(
            parse_assignment("gpa=3.57869").unwrap(),
            ("gpa".to_string(), Value::Float(3.57869))
        );
        // only the first '=' separates
        assert_eq!(
            parse_assignment("eq=a=b").unwrap(),
            ("eq".to_string(), Value::from("a=b"))
        );
        assert_eq!(
            parse_assignment("empty=").unwrap(),
            ("empty".to_string(), Value::from(""))
        );
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=value").is_err());
        assert!(parse_assignment("bad key=1").is_err());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut config = Bindings::new();
        config.insert("name".into(), Value::from("Config"));
        config.insert("age".into(), Value::Int(1));

        let mut flags = Bindings::new();
        flags.insert("name".into(), Value::from("Flag"));

        let merged = merge([config, flags]);
        assert_eq!(merged["name"], Value::from("Flag"));
        assert_eq!(merged["age"], Value::Int(1));
    }

    #[test]
    fn test_load_bindings_file_missing() {
        let err = load_bindings_file(Path::new("/nonexistent/bindings.json")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_bindings_file_json_and_toml() {
        let dir = std::env::temp_dir().join(format!("fstr-cli-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("bindings.json");
        fs::write(&json_path, r#"{"name": "World", "age": 23}"#).unwrap();
        let json = load_bindings_file(&json_path).unwrap();
        assert_eq!(json["age"], Value::Int(23));

        let toml_path = dir.join("bindings.toml");
        fs::write(&toml_path, "name = \"World\"\ngpa = 3.5\n").unwrap();
        let toml = load_bindings_file(&toml_path).unwrap();
        assert_eq!(toml["gpa"], Value::Float(3.5));

        let txt_path = dir.join("bindings.txt");
        fs::write(&txt_path, "name=World").unwrap();
        assert!(load_bindings_file(&txt_path).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
