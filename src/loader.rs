//! Reading and decoding the configuration document.
//!
//! Decoding goes through `C::Layer`, confique's all-optional mirror of the
//! schema, so that schema-declared defaults and required-field checks come
//! from one place:
//!
//! 1. Parse the text into a `toml::Table`.
//! 2. Optionally reject keys the schema does not declare (strict mode).
//! 3. Deserialize the table into `C::Layer`.
//! 4. `C::builder().preloaded(layer).load()` fills defaults and fails on
//!    missing required fields.
//!
//! Placeholders are plain strings at this stage; resolving them is a separate
//! pass (see [`substitute`](crate::substitute)).

use std::path::Path;

use confique::Config;
use serde::Deserialize;
use toml::{Table, Value};

use crate::error::BootfigError;
use crate::validate;

/// Read the whole configuration source.
pub fn read_source(path: &Path) -> Result<String, BootfigError> {
    std::fs::read_to_string(path).map_err(|e| BootfigError::SourceUnreadable {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Decode document text into the schema `C`. `path` is only used for errors.
pub fn decode<C: Config>(path: &Path, content: &str, strict: bool) -> Result<C, BootfigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let table: Table = toml::from_str(content).map_err(|e| BootfigError::DecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    if strict {
        validate::reject_unknown_keys::<C>(content, path)?;
    }

    let layer: C::Layer =
        Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| BootfigError::DecodeFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

    C::builder()
        .preloaded(layer)
        .load()
        .map_err(|e| BootfigError::IncompleteConfig {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Read and decode in one step.
pub fn load<C: Config>(path: &Path, strict: bool) -> Result<C, BootfigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let content = read_source(path)?;
    decode(path, &content, strict)
}
