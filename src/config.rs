//! Configuration manager for the sign up service.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Why a configuration file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot open `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` is not a valid configuration: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Related to Argon2 configuration.
    #[serde(default)]
    pub argon2: Argon2,
    /// Related to log output.
    #[serde(default)]
    pub log: Log,
    #[serde(skip)]
    path: PathBuf,
}

/// Argon2 configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2 {
    /// Memory used while hashing, in KiB.
    pub memory_cost: u32,
    /// Iterations of hash.
    pub iterations: u32,
    /// Parallelism degree.
    pub parallelism: u32,
    /// Output hash length.
    pub hash_length: usize,
}

impl Default for Argon2 {
    fn default() -> Self {
        Self {
            memory_cost: 1024 * 64, // 64 MiB.
            iterations: 4,
            parallelism: 2,
            hash_length: 32,
        }
    }
}

/// Log configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Emit JSON lines instead of compact text.
    pub json: bool,
    /// `EnvFilter` directives. `RUST_LOG` takes precedence.
    pub filter: Option<String>,
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// Falls back to defaults if the file is missing or malformed, and
    /// returns the load error so it can be logged once tracing is ready.
    pub fn read(self) -> (Self, Option<ConfigError>) {
        let path = if self.path.is_file() {
            self.path
        } else {
            PathBuf::from(DEFAULT_CONFIG_PATH)
        };

        match Self::load(&path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_reader(file).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("signup-{}-{name}.yaml", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_config() {
        let path = write_config(
            "full",
            "argon2:\n  memory_cost: 4096\n  iterations: 1\n  \
             parallelism: 1\n  hash_length: 16\nlog:\n  json: true\n",
        );

        let (config, error) =
            Configuration::default().path(path.clone()).read();

        assert!(error.is_none());

        assert_eq!(
            config.argon2,
            Argon2 {
                memory_cost: 4096,
                iterations: 1,
                parallelism: 1,
                hash_length: 16,
            }
        );
        assert!(config.log.json);
        assert_eq!(config.log.filter, None);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let path = write_config("partial", "argon2:\n  iterations: 2\n");

        let (config, error) =
            Configuration::default().path(path.clone()).read();

        assert!(error.is_none());

        assert_eq!(config.argon2.iterations, 2);
        assert_eq!(config.argon2.memory_cost, Argon2::default().memory_cost);
        assert_eq!(config.log, Log::default());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let path = write_config("malformed", "argon2:\n  memory_cost: lots\n");

        let (config, error) =
            Configuration::default().path(path.clone()).read();

        assert_eq!(config, Configuration::default());
        let Some(ConfigError::Yaml { path: reported, .. }) = error else {
            panic!("expected a yaml error, got {error:?}");
        };
        assert_eq!(reported, path);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_config_reports_error() {
        let (config, error) = Configuration::default()
            .path(PathBuf::from("/nonexistent/signup.yaml"))
            .read();

        assert_eq!(config, Configuration::default());
        assert!(matches!(error, Some(ConfigError::Io { .. })));
    }
}
