//! The `${NAME}` placeholder grammar.
//!
//! A string leaf is a placeholder only when the *whole* value is `${`, one or
//! more characters other than `}`, then `}`. The name between the braces is
//! used verbatim: no trimming, no escapes, no defaults, no nesting. Anything
//! else (including `prefix-${NAME}` or an empty `${}`) is an ordinary string.

const PREFIX: &str = "${";
const SUFFIX: char = '}';

/// Return the variable name if `value` is a placeholder.
pub fn placeholder_name(value: &str) -> Option<&str> {
    let name = value.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    if name.is_empty() || name.contains(SUFFIX) {
        return None;
    }
    Some(name)
}

pub fn is_placeholder(value: &str) -> bool {
    placeholder_name(value).is_some()
}
