//! Network configuration.
//!
//! A network is described by its lines, in order, and the interchanges
//! between them. The configuration is plain data; [`Network::from_config`]
//! turns it into a searchable network.
//!
//! [`Network::from_config`]: super::Network::from_config

use std::env::VarError;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Environment variable naming a JSON network description.
pub const CONFIG_ENV: &str = "METRO_NETWORK_CONFIG";

/// Travel time between consecutive stops when a line does not specify one.
pub const DEFAULT_RIDE_MINUTES: u32 = 10;

/// Time to change between co-located stops when an interchange does not
/// specify one.
pub const DEFAULT_INTERCHANGE_MINUTES: u32 = 5;

fn default_ride_minutes() -> u32 {
    DEFAULT_RIDE_MINUTES
}

fn default_interchange_minutes() -> u32 {
    DEFAULT_INTERCHANGE_MINUTES
}

/// One line: a name and its stops in running order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Line name (e.g. "Blue")
    pub name: String,

    /// Minutes between consecutive stops
    #[serde(default = "default_ride_minutes")]
    pub minutes_between_stops: u32,

    /// Stop names; normalized when the network is built
    pub stops: Vec<String>,
}

/// An interchange between two stop names.
///
/// Naming the same stop on both sides declares a stop shared by several
/// lines; naming two different stops links them with a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchangeConfig {
    pub from: String,
    pub to: String,

    /// Minutes needed to change
    #[serde(default = "default_interchange_minutes")]
    pub minutes: u32,
}

/// Complete description of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub lines: Vec<LineConfig>,

    #[serde(default)]
    pub interchanges: Vec<InterchangeConfig>,
}

impl NetworkConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.display().to_string(),
            error,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV`].
    ///
    /// Returns `Ok(None)` when the variable is unset.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_env_value(std::env::var(CONFIG_ENV))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Option<Self>, ConfigError> {
        match value {
            Ok(path) => {
                tracing::info!(%path, "Loading network configuration");
                Self::load(path).map(Some)
            }
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::NonUnicodePath {
                path: raw.to_string_lossy().into_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_defaults() {
        let config = NetworkConfig::from_json(
            r#"{
                "lines": [
                    { "name": "Red", "stops": ["a", "b"] },
                    { "name": "Green", "minutes_between_stops": 4, "stops": ["b", "c"] }
                ],
                "interchanges": [
                    { "from": "b", "to": "b" },
                    { "from": "a", "to": "c", "minutes": 2 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.lines.len(), 2);
        assert_eq!(config.lines[0].minutes_between_stops, DEFAULT_RIDE_MINUTES);
        assert_eq!(config.lines[1].minutes_between_stops, 4);
        assert_eq!(config.interchanges[0].minutes, DEFAULT_INTERCHANGE_MINUTES);
        assert_eq!(config.interchanges[1].minutes, 2);
    }

    #[test]
    fn interchanges_are_optional() {
        let config =
            NetworkConfig::from_json(r#"{ "lines": [{ "name": "Red", "stops": ["a"] }] }"#)
                .unwrap();
        assert!(config.interchanges.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = NetworkConfig::from_json(r#"{ "lines": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "lines": [{{ "name": "Red", "stops": ["a", "b", "c"] }}] }}"#
        )
        .unwrap();

        let config = NetworkConfig::load(file.path()).unwrap();
        assert_eq!(config.lines[0].stops, vec!["a", "b", "c"]);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NetworkConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unset_env_means_no_config() {
        let config = NetworkConfig::from_env_value(Err(VarError::NotPresent)).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn non_unicode_env_is_an_error() {
        let raw = std::ffi::OsString::from("net.json");
        let err = NetworkConfig::from_env_value(Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(err, ConfigError::NonUnicodePath { path } if path == "net.json"));
    }

    #[test]
    fn env_path_is_loaded() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lines": [{{ "name": "Red", "stops": ["a"] }}] }}"#).unwrap();
        let path = file.path().display().to_string();

        let config = NetworkConfig::from_env_value(Ok(path)).unwrap().unwrap();
        assert_eq!(config.lines[0].name, "Red");
    }

    #[test]
    fn serializes_back_to_json() {
        let config = NetworkConfig {
            lines: vec![LineConfig {
                name: "Red".into(),
                minutes_between_stops: 10,
                stops: vec!["a".into(), "b".into()],
            }],
            interchanges: vec![],
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(NetworkConfig::from_json(&json).unwrap(), config);
    }
}
