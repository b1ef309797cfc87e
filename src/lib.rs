//! Startup configuration for services: read a TOML file into a typed struct,
//! then replace `${NAME}` placeholders with environment variables, failing
//! fast if any is missing.
//!
//! ```ignore
//! let config: ServiceConfig = Bootfig::builder()
//!     .path("config/config.toml")
//!     .bootstrap();
//! ```
//!
//! That call reads the file, fills `#[config(default)]` values, resolves every
//! placeholder from the process environment, and hands back the struct. If
//! anything goes wrong it logs the error, prints it to stderr and exits with
//! status 1. Use [`load()`](BootfigBuilder::load) instead to get a
//! `Result`.
//!
//! # Schema
//!
//! The schema is any struct deriving confique's `Config` plus serde's
//! `Serialize` and `Deserialize`. `#[config(nested)]` sections map to TOML
//! tables; `Option<T>` fields may be omitted; fields without a default are
//! required.
//!
//! # Placeholders
//!
//! A string leaf whose *entire* value is `${NAME}` is a placeholder. During the
//! single resolution pass it is replaced by the value of the environment
//! variable `NAME`:
//!
//! | In the file              | Environment             | Result                   |
//! |--------------------------|-------------------------|--------------------------|
//! | `host = "${HOST}"`       | `HOST=db.internal`      | `host = "db.internal"`   |
//! | `host = "localhost"`     | anything                | unchanged                |
//! | `url = "http://${HOST}"` | anything                | unchanged (not a whole-value match) |
//! | `key = "${KEY}"`         | `KEY` unset or `KEY=`   | error                    |
//! | `host = "${HOST}"`       | `HOST=${OTHER}`         | `host = "${OTHER}"` (no second pass) |
//!
//! Booleans, numbers, and arrays are never inspected. There is no default
//! syntax and no optional placeholder: a missing or empty variable is always
//! a [`MissingEnvironmentBinding`](BootfigError::MissingEnvironmentBinding)
//! error naming the variable and the key that referenced it.
//!
//! Resolution is total or nothing. The typed config is only replaced after
//! every placeholder resolved, so a partially substituted config never
//! escapes.
//!
//! # Strict mode
//!
//! Off by default. With [`.strict(true)`](BootfigBuilder::strict) keys that
//! the schema does not declare are rejected with their line numbers.
//!
//! # Logging
//!
//! Each stage emits [`tracing`](https://docs.rs/tracing) events: `info` when
//! loading starts and finishes (with elapsed time and substitution count),
//! `debug` for every substituted key and variable name. Values are never
//! logged. Install a subscriber in your binary to see them.
//!
//! # Clap adapter
//!
//! Behind the `clap` feature (on by default), [`BootArgs`] adds
//! `--config <PATH>` and `check|show|gen` subcommands to a service CLI. `show`
//! redacts every value that came from the environment.

pub mod environment;
pub mod error;
pub mod placeholder;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod loader;
mod ops;
mod substitute;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::{Bootfig, BootfigBuilder};
#[cfg(feature = "clap")]
pub use cli::{BootArgs, BootSubcommand};
pub use environment::{Environment, ProcessEnv};
pub use error::{BootfigError, ErrorKind};
pub use loader::{decode, load, read_source};
pub use ops::ConfigResult;
pub use substitute::{Substitution, resolve_placeholders, substitute_value};
pub use types::{ConfigAction, DEFAULT_CONFIG_PATH};
