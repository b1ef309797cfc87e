//! Strict decoding: reject keys the schema does not declare.
//!
//! The document is deserialized once more into `C::Layer` through
//! `serde_ignored`, which reports every key the layer did not consume.

use std::path::Path;

use confique::Config;
use serde::Deserialize;

use crate::error::BootfigError;

pub fn reject_unknown_keys<C: Config>(content: &str, path: &Path) -> Result<(), BootfigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let mut ignored: Vec<String> = Vec::new();

    let deserializer = toml::Deserializer::new(content);
    let _layer: C::Layer = serde_ignored::deserialize(deserializer, |key| {
        ignored.push(key.to_string());
    })
    .map_err(|e| BootfigError::DecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    if ignored.is_empty() {
        return Ok(());
    }

    let errors = ignored
        .into_iter()
        .map(|key| BootfigError::UnknownKey {
            line: line_of(content, &key),
            key,
            path: path.to_path_buf(),
        })
        .collect();
    Err(BootfigError::UnknownKeys(errors))
}

/// Best-effort 1-indexed line of a dotted key, or 0 when not found.
///
/// Understands `[section]` headers and bare `key = value` lines only.
fn line_of(content: &str, dotted_key: &str) -> usize {
    let (section, leaf) = match dotted_key.rsplit_once('.') {
        Some((section, leaf)) => (section, leaf),
        None => ("", dotted_key),
    };

    let mut current = String::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = trimmed
            .strip_prefix('[')
            .filter(|h| !h.starts_with('['))
            .and_then(|h| h.strip_suffix(']'))
        {
            current = header
                .split('.')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(".");
            continue;
        }
        if current == section
            && let Some(rest) = trimmed.strip_prefix(leaf)
            && rest.trim_start().starts_with('=')
        {
            return i + 1;
        }
    }
    0
}
