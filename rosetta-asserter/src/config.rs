use std::fs;
use std::path::Path;

use rosetta_types::{ApiError, BlockIdentifier, OperationStatus};
use serde::{Deserialize, Serialize};

use crate::error::{AsserterError, Result};

/// Persistable description of an asserter.
///
/// Lets a client skip the handshake by loading the capabilities a provider
/// declared earlier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AsserterConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genesis_block_identifier: Option<BlockIdentifier>,
    pub allowed_operation_types: Vec<String>,
    pub allowed_operation_statuses: Vec<OperationStatus>,
    pub allowed_errors: Vec<ApiError>,
}

impl AsserterConfiguration {
    pub fn from_filepath(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| {
            AsserterError::Config(format!("failed to open {}: {}", path.display(), e))
        })?;
        let config: AsserterConfiguration = serde_json::from_reader(file).map_err(|e| {
            AsserterError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        log::debug!("loaded asserter configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AsserterError::Config(e.to_string()))
    }
}
