//! Inspection operations: check, redacted listing, template generation.
//!
//! Provides the logic behind `check`, `show`, and `gen`, and the
//! `ConfigResult` enum that callers use to display results.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use confique::Config;
use serde::Serialize;
use toml::{Table, Value};

use crate::error::BootfigError;
use crate::substitute::Substitution;

/// Result of an inspection operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// The document loaded and every placeholder resolved.
    Checked {
        path: PathBuf,
        substitutions: Vec<Substitution>,
    },
    /// Resolved leaves as dotted key-value pairs, in declaration order.
    Listing { entries: Vec<(String, String)> },
    /// A generated TOML template string.
    Template(String),
    /// Confirmation that a template was written to a file.
    TemplateWritten { path: PathBuf },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Checked {
                path,
                substitutions,
            } => {
                write!(f, "{} is valid", path.display())?;
                for sub in substitutions {
                    write!(f, "\n  {} <- ${}", sub.key, sub.variable)?;
                }
                Ok(())
            }
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            ConfigResult::Template(t) => write!(f, "{t}"),
            ConfigResult::TemplateWritten { path } => {
                write!(f, "Config template written to {}", path.display())
            }
        }
    }
}

/// Generate a commented TOML template from the config struct's doc comments.
pub fn generate_template<C: Config>() -> String {
    confique::toml::template::<C>(confique::toml::FormatOptions::default())
}

/// List every resolved leaf. Leaves that came from the environment are shown
/// as `<from $NAME>` instead of their value.
pub fn list_values<C: Serialize>(
    config: &C,
    substitutions: &[Substitution],
) -> Result<ConfigResult, BootfigError> {
    let tree = Value::try_from(config).map_err(|e| BootfigError::TreeShape {
        reason: e.to_string(),
    })?;
    let table = tree.as_table().ok_or_else(|| BootfigError::TreeShape {
        reason: "config did not serialize to a table".into(),
    })?;

    let redacted: HashMap<&str, &str> = substitutions
        .iter()
        .map(|s| (s.key.as_str(), s.variable.as_str()))
        .collect();

    let mut entries = Vec::new();
    collect_entries(table, "", &redacted, &mut entries);
    Ok(ConfigResult::Listing { entries })
}

fn collect_entries(
    table: &Table,
    prefix: &str,
    redacted: &HashMap<&str, &str>,
    out: &mut Vec<(String, String)>,
) {
    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        if let Value::Table(nested) = value {
            collect_entries(nested, &dotted, redacted, out);
            continue;
        }
        let display = match redacted.get(dotted.as_str()) {
            Some(variable) => format!("<from ${variable}>"),
            None => format_value(value),
        };
        out.push((dotted, display));
    }
}

/// Format a TOML value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.to_string(),
        Value::Array(a) => {
            let items: Vec<String> = a
                .iter()
                .map(|v| match v {
                    Value::String(s) => format!("{s:?}"),
                    other => format_value(other),
                })
                .collect();
            format!("[{}]", items.join(", "))
        }
        Value::Table(t) => format!("{t:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{ServiceConfig, plain_config};

    #[test]
    fn template_contains_sections_and_docs() {
        let template = generate_template::<ServiceConfig>();
        assert!(template.contains("[server]"));
        assert!(template.contains("host"));
        assert!(template.contains("queues"));
        assert!(template.contains("Host to bind to"));
    }

    #[test]
    fn listing_follows_declaration_order() {
        let result = list_values(&plain_config(), &[]).unwrap();
        match result {
            ConfigResult::Listing { entries } => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(
                    keys,
                    vec![
                        "app.name",
                        "app.env",
                        "app.debug",
                        "server.host",
                        "server.port",
                        "server.workers",
                        "azure.account_name",
                        "azure.queues",
                    ]
                );
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn listing_formats_values() {
        let result = list_values(&plain_config(), &[]).unwrap();
        let ConfigResult::Listing { entries } = result else {
            panic!("Expected Listing");
        };
        let get = |key: &str| entries.iter().find(|(k, _)| k == key).unwrap().1.clone();
        assert_eq!(get("server.workers"), "4");
        assert_eq!(get("app.debug"), "false");
        assert_eq!(get("azure.queues"), "[\"jobs\"]");
    }

    #[test]
    fn listing_redacts_env_supplied_values() {
        let mut config = plain_config();
        config.azure.account_key = Some("s3cret".into());
        let subs = vec![Substitution {
            key: "azure.account_key".into(),
            variable: "AZ_KEY".into(),
        }];
        let result = list_values(&config, &subs).unwrap();
        let display = result.to_string();
        assert!(display.contains("azure.account_key = <from $AZ_KEY>"));
        assert!(!display.contains("s3cret"));
    }

    #[test]
    fn checked_display_lists_substitutions() {
        let result = ConfigResult::Checked {
            path: "config/config.toml".into(),
            substitutions: vec![Substitution {
                key: "server.host".into(),
                variable: "HOST".into(),
            }],
        };
        assert_eq!(
            result.to_string(),
            "config/config.toml is valid\n  server.host <- $HOST"
        );
    }

    #[test]
    fn listing_display_format() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("server.host".into(), "localhost".into()),
                ("server.port".into(), "8080".into()),
            ],
        };
        assert_eq!(
            result.to_string(),
            "server.host = localhost\nserver.port = 8080"
        );
    }
}
