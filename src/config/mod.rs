//! Configuration for the entry application.
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. The JSON file named by `PHENOPACKET_CONFIG`
//! 3. `PHENOPACKET_*` environment variables
//!
//! Environment keys map onto fields as `SECRET` -> `access_secret`,
//! `EXPORT_FORMAT` -> `default_format`, `LOG` -> `log_filter`; `EXPORT_DIR`
//! and `FILE_STEM` keep their names.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{EntryError, Result};
use crate::export::{DEFAULT_FILE_STEM, ExportFormat, Exporter};

/// Path of an optional JSON configuration file
pub const CONFIG_PATH_VAR: &str = "PHENOPACKET_CONFIG";
/// Prefix of environment variables overriding configuration fields
pub const ENV_PREFIX: &str = "PHENOPACKET_";

/// Configuration for the entry application
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Secret unlocking the entry surface; unset keeps it locked
    #[serde(deserialize_with = "scalar_string")]
    pub access_secret: Option<String>,
    /// Directory exports are written to
    pub export_dir: PathBuf,
    /// Stem of exported file names
    pub file_stem: String,
    /// Export format used when none is given
    pub default_format: ExportFormat,
    /// Default log filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            access_secret: None,
            export_dir: PathBuf::from("."),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            default_format: ExportFormat::Csv,
            log_filter: "info".to_string(),
        }
    }
}

impl fmt::Debug for EntryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryConfig")
            .field("access_secret", &self.access_secret.as_ref().map(|_| "<redacted>"))
            .field("export_dir", &self.export_dir)
            .field("file_stem", &self.file_stem)
            .field("default_format", &self.default_format)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl EntryConfig {
    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let figment = Self::defaults().merge(Self::json_file(path)?);
        Self::extract(&figment)
    }

    /// Load the configuration from the process environment
    ///
    /// The file named by `PHENOPACKET_CONFIG` is read first, then
    /// `PHENOPACKET_*` variables override its values.
    pub fn from_env() -> Result<Self> {
        let file = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        Self::extract(&Self::figment(file.as_deref())?)
    }

    /// Build the provider chain: defaults, optional JSON file, environment
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Self::defaults();
        if let Some(path) = file {
            figment = figment.merge(Self::json_file(path)?);
        }
        Ok(figment.merge(env_provider()))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    // A named file that cannot be read is an error rather than an empty layer
    fn json_file(path: &Path) -> Result<figment::providers::Data<Json>> {
        let content = safe_read_to_string(path, "configuration")?;
        Ok(Json::string(&content))
    }

    fn extract(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would only fail later, at export time
    pub fn validate(&self) -> Result<()> {
        if self.file_stem.trim().is_empty() {
            return Err(EntryError::Config("file_stem must not be empty".to_string()));
        }
        if self.file_stem.contains(['/', '\\']) {
            return Err(EntryError::Config(format!(
                "file_stem {:?} must not contain path separators",
                self.file_stem
            )));
        }
        Ok(())
    }

    /// Exporter using the configured file stem
    #[must_use]
    pub fn exporter(&self) -> Exporter {
        Exporter::new(self.file_stem.clone())
    }
}

/// `PHENOPACKET_*` variables, renamed onto config fields
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).ignore(&["config"]).map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        match key.as_str() {
            "secret" => "access_secret".into(),
            "export_format" => "default_format".into(),
            "log" => "log_filter".into(),
            _ => key.into(),
        }
    })
}

/// Environment values that look numeric or boolean arrive typed; a secret
/// is text either way
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(x) => x.to_string(),
        Scalar::Flag(b) => b.to_string(),
    }))
}
