//! The placeholder resolution pass.
//!
//! The typed config is viewed through serde as a `toml::Value`, a closed sum
//! type of tables, strings, and scalar/array leaves. One depth-first walk in
//! field-declaration order visits every node exactly once:
//!
//! - `Table` → recurse, extending the dotted key path.
//! - `String` → if it is a `${NAME}` placeholder, replace it with the bound
//!   value. An absent or empty binding aborts the whole pass at once.
//! - anything else (booleans, numbers, datetimes, arrays) → left alone.
//!
//! Resolved values are never re-examined, so a variable whose value is itself
//! `${OTHER}` lands in the tree literally.

use serde::Serialize;
use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::environment::Environment;
use crate::error::BootfigError;
use crate::placeholder::placeholder_name;

/// One placeholder leaf that was rewritten. The bound value is deliberately
/// not kept so this can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Dotted path of the leaf, e.g. `"server.host"`.
    pub key: String,
    /// The environment variable that supplied the value.
    pub variable: String,
}

/// Resolve every placeholder in a typed config, in place.
///
/// `config` is only replaced once the whole pass has succeeded; on error it is
/// left exactly as it was.
pub fn resolve_placeholders<C, E>(config: &mut C, env: &E) -> Result<Vec<Substitution>, BootfigError>
where
    C: Serialize + DeserializeOwned,
    E: Environment + ?Sized,
{
    let mut tree = Value::try_from(&*config).map_err(|e| BootfigError::TreeShape {
        reason: e.to_string(),
    })?;

    let substitutions = substitute_value(&mut tree, env)?;

    *config = tree
        .try_into()
        .map_err(|e: toml::de::Error| BootfigError::TreeShape {
            reason: e.to_string(),
        })?;

    Ok(substitutions)
}

/// Walk a value tree and replace placeholder string leaves.
pub fn substitute_value<E>(value: &mut Value, env: &E) -> Result<Vec<Substitution>, BootfigError>
where
    E: Environment + ?Sized,
{
    let mut out = Vec::new();
    match value {
        Value::Table(table) => substitute_table(table, "", env, &mut out)?,
        other => substitute_leaf(other, "", env, &mut out)?,
    }
    Ok(out)
}

fn substitute_table<E>(
    table: &mut Table,
    prefix: &str,
    env: &E,
    out: &mut Vec<Substitution>,
) -> Result<(), BootfigError>
where
    E: Environment + ?Sized,
{
    for (key, value) in table.iter_mut() {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(nested) => substitute_table(nested, &dotted, env, out)?,
            leaf => substitute_leaf(leaf, &dotted, env, out)?,
        }
    }
    Ok(())
}

fn substitute_leaf<E>(
    leaf: &mut Value,
    key: &str,
    env: &E,
    out: &mut Vec<Substitution>,
) -> Result<(), BootfigError>
where
    E: Environment + ?Sized,
{
    let Value::String(current) = leaf else {
        return Ok(());
    };
    let Some(name) = placeholder_name(current).map(str::to_owned) else {
        return Ok(());
    };

    match env.lookup(&name) {
        Some(bound) if !bound.is_empty() => {
            *current = bound;
            out.push(Substitution {
                key: key.to_string(),
                variable: name,
            });
            Ok(())
        }
        _ => Err(BootfigError::MissingEnvironmentBinding {
            name,
            key: key.to_string(),
        }),
    }
}
