use std::{
    fs, io,
    path::{Path, PathBuf},
};

use msig_crypto::{
    keys::SignerAddress,
    threshold_signature::{ThresholdConfig, ThresholdSignatureError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a params file.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read params file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML params: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON params: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid verifier params: {0}")]
    Invalid(#[from] ThresholdSignatureError),
}

/// Logging configuration (optional section in the params file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,
}

/// Signer set and threshold as written in a params file.
///
/// Addresses are hex strings with or without a `0x` prefix. The all-zero
/// address marks an unconfigured slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierParams {
    /// Minimum number of distinct signers required.
    pub threshold: u8,

    /// Ordered signer slots.
    pub signers: Vec<SignerAddress>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VerifierParams {
    /// Validates the params into a threshold configuration.
    pub fn to_config(&self) -> Result<ThresholdConfig, ThresholdSignatureError> {
        ThresholdConfig::try_new(self.signers.clone(), self.threshold)
    }

    /// Captures an existing configuration, with default logging.
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            threshold: config.threshold(),
            signers: config.signers().to_vec(),
            logging: LoggingConfig::default(),
        }
    }

    /// Parses TOML params and validates them.
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        let params: Self = toml::from_str(s)?;
        params.to_config()?;
        Ok(params)
    }

    /// Parses JSON params and validates them.
    pub fn from_json_str(s: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(s)?;
        params.to_config()?;
        Ok(params)
    }
}

/// Loads and validates a params file.
///
/// Files ending in `.json` are parsed as JSON; anything else is parsed as
/// TOML.
pub fn load_params(path: &Path) -> Result<VerifierParams, ParamsError> {
    let contents = fs::read_to_string(path).map_err(|source| ParamsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        VerifierParams::from_json_str(&contents)
    } else {
        VerifierParams::from_toml_str(&contents)
    }
}
