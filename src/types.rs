use std::path::PathBuf;

/// Where the configuration document lives when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// An inspection operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Load and resolve, reporting only success or the first failure.
    Check,
    /// Load and resolve, then list every leaf with env-supplied values redacted.
    Show,
    /// Generate a commented template from the schema.
    Gen { output: Option<PathBuf> },
}
