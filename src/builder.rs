use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Instant;

use confique::Config;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::environment::{Environment, ProcessEnv};
use crate::error::BootfigError;
use crate::loader;
use crate::ops::{self, ConfigResult};
use crate::substitute::{self, Substitution};
use crate::types::{ConfigAction, DEFAULT_CONFIG_PATH};

/// Entry point for loading a service's startup configuration.
pub struct Bootfig;

impl Bootfig {
    pub fn builder<C: Config>() -> BootfigBuilder<C> {
        BootfigBuilder::new()
    }
}

/// Sequences read → decode → resolve placeholders for a schema `C`.
///
/// Library methods return [`BootfigError`]; only [`bootstrap()`](Self::bootstrap)
/// turns an error into process termination.
pub struct BootfigBuilder<C: Config> {
    path: Option<PathBuf>,
    strict: bool,
    _phantom: PhantomData<C>,
}

impl<C: Config> BootfigBuilder<C> {
    fn new() -> Self {
        Self {
            path: None,
            strict: false,
            _phantom: PhantomData,
        }
    }

    /// Override the document path (default: `config/config.toml`, relative to
    /// the working directory).
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, keys the schema does not declare produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn effective_path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load, decode, and resolve against an explicit environment.
    pub fn load_with<E>(&self, env: &E) -> Result<C, BootfigError>
    where
        C: Serialize + DeserializeOwned,
        C::Layer: for<'de> Deserialize<'de>,
        E: Environment + ?Sized,
    {
        self.load_report(env).map(|(config, _)| config)
    }

    /// Load, decode, and resolve against the process environment.
    pub fn load(&self) -> Result<C, BootfigError>
    where
        C: Serialize + DeserializeOwned,
        C::Layer: for<'de> Deserialize<'de>,
    {
        self.load_with(&ProcessEnv)
    }

    /// Like [`load_with`](Self::load_with), also returning which leaves were
    /// filled from the environment.
    pub fn load_report<E>(&self, env: &E) -> Result<(C, Vec<Substitution>), BootfigError>
    where
        C: Serialize + DeserializeOwned,
        C::Layer: for<'de> Deserialize<'de>,
        E: Environment + ?Sized,
    {
        let started = Instant::now();
        let path = self.effective_path();

        info!(path = %path.display(), "loading configuration");
        let content = loader::read_source(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read configuration source");

        let mut config: C = loader::decode(path, &content, self.strict)?;
        debug!("decoded configuration");

        let substitutions = substitute::resolve_placeholders(&mut config, env)?;
        for sub in &substitutions {
            debug!(key = %sub.key, variable = %sub.variable, "substituted placeholder");
        }

        info!(
            substitutions = substitutions.len(),
            elapsed = ?started.elapsed(),
            "configuration loaded"
        );
        Ok((config, substitutions))
    }

    /// Load the configuration or terminate the process.
    ///
    /// On any error the failure is logged and printed to stderr, and the
    /// process exits with status 1. A partially resolved config is never
    /// returned.
    pub fn bootstrap(self) -> C
    where
        C: Serialize + DeserializeOwned,
        C::Layer: for<'de> Deserialize<'de>,
    {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                error!(kind = e.kind().as_str(), error = %e, "configuration failed");
                eprintln!("Failed to load configuration:\n{e}");
                std::process::exit(1);
            }
        }
    }

    /// Handle a `ConfigAction` and print the result to stdout.
    pub fn handle_and_print(self, action: &ConfigAction) -> Result<(), BootfigError>
    where
        C: Serialize + DeserializeOwned,
        C::Layer: for<'de> Deserialize<'de>,
    {
        let result = self.handle_with(action, &ProcessEnv)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `ConfigAction` (check / show / gen).
    pub fn handle_with<E>(&self, action: &ConfigAction, env: &E) -> Result<ConfigResult, BootfigError>
    where
        C: Serialize + DeserializeOwned,
        C::Layer: for<'de> Deserialize<'de>,
        E: Environment + ?Sized,
    {
        match action {
            ConfigAction::Check => {
                let (_, substitutions) = self.load_report(env)?;
                Ok(ConfigResult::Checked {
                    path: self.effective_path().to_path_buf(),
                    substitutions,
                })
            }
            ConfigAction::Show => {
                let (config, substitutions) = self.load_report(env)?;
                ops::list_values(&config, &substitutions)
            }
            ConfigAction::Gen { output } => {
                let template = ops::generate_template::<C>();
                match output {
                    Some(path) => {
                        if let Some(parent) = path.parent() {
                            std::fs::create_dir_all(parent).map_err(|e| {
                                BootfigError::WriteFailed {
                                    path: parent.to_path_buf(),
                                    source: e,
                                }
                            })?;
                        }
                        std::fs::write(path, &template).map_err(|e| {
                            BootfigError::WriteFailed {
                                path: path.clone(),
                                source: e,
                            }
                        })?;
                        Ok(ConfigResult::TemplateWritten { path: path.clone() })
                    }
                    None => Ok(ConfigResult::Template(template)),
                }
            }
        }
    }
}
