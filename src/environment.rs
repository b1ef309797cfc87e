//! Read-only environment bindings consulted by the placeholder resolver.
//!
//! The resolver only ever asks "what is the value of `NAME`?". Production code
//! answers from the process environment via [`ProcessEnv`]; tests and embedders
//! can pass a `HashMap<String, String>` instead of mutating global state.

use std::collections::HashMap;

/// A name → value lookup. Names are matched exactly (case-sensitive).
pub trait Environment {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The ambient process environment.
///
/// Variables whose value is not valid unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}
