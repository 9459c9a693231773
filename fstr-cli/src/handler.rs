//! Render command handler

use anyhow::{Context, Result};
use colored::*;
use fstr::{Bindings, Template, parse_template};
use std::fs;

use crate::bindings::{load_bindings_file, merge, parse_assignment};
use crate::cli::Cli;
use crate::config::Config;

/// What a successful run prints
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Rendered(String),
    Checked { placeholders: usize },
}

/// Handle a full invocation: load config, assemble bindings, render
pub fn handle(cli: &Cli) -> Result<()> {
    // before loading, so a bad config file is reported uncolored too
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let trailing_newline = config.output.trailing_newline;

    match execute(cli, config)? {
        Outcome::Rendered(text) if trailing_newline => println!("{}", text),
        Outcome::Rendered(text) => print!("{}", text),
        Outcome::Checked { placeholders } => {
            println!("{} template OK ({} placeholder(s))", "✓".green(), placeholders);
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        Ok(Config::default())
    } else if let Some(path) = &cli.config {
        Config::load(path)
    } else {
        Config::load_default()
    }
}

/// Render or check the template without touching stdout
pub fn execute(cli: &Cli, config: Config) -> Result<Outcome> {
    let source = read_template(cli)?;
    let template = parse_template(&source).context("Failed to parse template")?;
    let bindings = collect_bindings(cli, config.bindings)?;

    log::info!(
        "Rendering {} placeholder(s) with {} binding(s)",
        template.placeholders().count(),
        bindings.len()
    );

    if cli.check {
        template
            .check(&bindings)
            .context("Template check failed")?;
        return Ok(Outcome::Checked {
            placeholders: template.placeholders().count(),
        });
    }

    render(&template, &bindings).map(Outcome::Rendered)
}

fn render(template: &Template, bindings: &Bindings) -> Result<String> {
    template
        .render(bindings)
        .context("Failed to render template")
}

fn read_template(cli: &Cli) -> Result<String> {
    if !cli.file {
        return Ok(cli.template.clone());
    }

    let content = fs::read_to_string(&cli.template)
        .with_context(|| format!("Failed to read template file: {}", cli.template))?;

    let content = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(&content);
    Ok(content.to_string())
}

fn collect_bindings(cli: &Cli, defaults: Bindings) -> Result<Bindings> {
    let mut layers = vec![defaults];

    if let Some(path) = &cli.bindings {
        layers.push(load_bindings_file(path)?);
    }

    let flags = cli
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Bindings>>()?;
    layers.push(flags);

    Ok(merge(layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fstr::{InterpolateError, Value};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["fstr-cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_execute_renders_with_flags() {
        let outcome = execute(
            &cli(&["{name=} {age=} {gpa=:,.2f}", "-s", "name=World", "-s", "age=23", "-s", "gpa=3.57869"]),
            Config::default(),
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Rendered("name=World age=23 gpa=3.58".to_string()));
    }

    #[test]
    fn test_flags_override_config_bindings() {
        let mut config = Config::default();
        config.bindings.insert("name".into(), Value::from("Config"));
        config.bindings.insert("greeting".into(), Value::from("Hello"));

        let outcome = execute(&cli(&["{greeting}, {name}!", "-s", "name=Flag"]), config).unwrap();
        assert_eq!(outcome, Outcome::Rendered("Hello, Flag!".to_string()));
    }

    #[test]
    fn test_check_mode() {
        let outcome = execute(&cli(&["{a} {b:,}", "--check", "-s", "a=x", "-s", "b=1000"]), Config::default())
            .unwrap();
        assert_eq!(outcome, Outcome::Checked { placeholders: 2 });
    }

    #[test]
    fn test_unbound_error_is_propagated() {
        let err = execute(&cli(&["{missing}"]), Config::default()).unwrap_err();
        let root = err.downcast_ref::<InterpolateError>().unwrap();
        assert!(matches!(root, InterpolateError::UnboundIdentifier { .. }));
        assert!(format!("{:#}", err).contains("no binding for identifier 'missing'"));
    }

    #[test]
    fn test_parse_error_is_propagated() {
        let err = execute(&cli(&["{unclosed"]), Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse template"));
    }

    #[test]
    fn test_load_config_honours_flags() {
        let args = cli(&["{name}", "--no-config", "--no-color"]);
        assert!(args.no_color);
        assert_eq!(load_config(&args).unwrap(), Config::default());

        let args = cli(&["{name}", "--no-color", "--config", "/nonexistent/fstr/config.toml"]);
        assert!(args.no_color);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_template_from_file() {
        let path = std::env::temp_dir().join(format!("fstr-cli-template-{}.txt", std::process::id()));
        fs::write(&path, "Total: {total:,.3f}\n").unwrap();

        let outcome = execute(
            &cli(&["--file", path.to_str().unwrap(), "-s", "total=123456789.9787968"]),
            Config::default(),
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Rendered("Total: 123,456,789.979".to_string()));

        let _ = fs::remove_file(&path);
    }
}
