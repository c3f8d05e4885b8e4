use serde::{Deserialize, Serialize};

use crate::identifiers::{BlockIdentifier, NetworkIdentifier};
use crate::operation::OperationStatus;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    pub rosetta_version: String,
    pub node_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middleware_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub peer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// An error a provider declares it may return, or one it actually returned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    pub retriable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>, retriable: bool) -> Self {
        Self {
            code,
            message: message.into(),
            retriable,
            details: None,
        }
    }
}

/// What a provider is able to emit: operation statuses, operation types and
/// errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Allow {
    pub operation_statuses: Vec<OperationStatus>,
    pub operation_types: Vec<String>,
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkListResponse {
    pub network_identifiers: Vec<NetworkIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_block_identifier: Option<BlockIdentifier>,
    pub current_block_timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genesis_block_identifier: Option<BlockIdentifier>,
    pub peers: Vec<Peer>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkOptionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<Allow>,
}
