use std::collections::{HashMap, HashSet};
use std::path::Path;

use rosetta_types::{
    ApiError, BlockIdentifier, NetworkOptionsResponse, NetworkStatusResponse, OperationStatus,
};

use crate::block::block_identifier;
use crate::config::AsserterConfiguration;
use crate::error::{AsserterError, Result};
use crate::network::{
    errors, network_options_response, network_status_response, operation_statuses,
    operation_types,
};

/// Validates provider responses against the capabilities the provider
/// declared during the handshake.
///
/// An `Asserter` can only be obtained through one of the `build_*`
/// constructors and is never mutated afterwards, so a single instance can be
/// shared by every thread of a process.
#[derive(Debug, Clone)]
pub struct Asserter {
    pub(crate) operation_types: HashSet<String>,
    pub(crate) operation_status_map: HashMap<String, bool>,
    pub(crate) error_type_map: HashMap<i32, ApiError>,
    pub(crate) genesis_block: BlockIdentifier,
}

impl Asserter {
    /// Build an asserter from already extracted capabilities.
    ///
    /// The genesis identifier and every declared capability are checked
    /// before anything is built. When a status tag is declared more than once
    /// the last declaration wins.
    pub fn build_from_capabilities(
        genesis_block: &BlockIdentifier,
        declared_operation_types: &[String],
        declared_operation_statuses: &[OperationStatus],
        declared_errors: &[ApiError],
    ) -> Result<Self> {
        block_identifier(Some(genesis_block))?;
        operation_statuses(declared_operation_statuses)?;
        operation_types(declared_operation_types)?;
        errors(declared_errors)?;

        let mut operation_status_map = HashMap::with_capacity(declared_operation_statuses.len());
        for status in declared_operation_statuses {
            let previous = operation_status_map.insert(status.status.clone(), status.successful);
            if let Some(previous) = previous {
                log::warn!(
                    "operation status {} declared more than once (successful {} replaced by {})",
                    status.status,
                    previous,
                    status.successful
                );
            }
        }

        let error_type_map = declared_errors
            .iter()
            .map(|err| (err.code, err.clone()))
            .collect::<HashMap<_, _>>();

        let asserter = Self {
            operation_types: declared_operation_types.iter().cloned().collect(),
            operation_status_map,
            error_type_map,
            genesis_block: genesis_block.clone(),
        };

        log::debug!(
            "asserter built with genesis index {} ({} operation types, {} statuses, {} errors)",
            asserter.genesis_block.index,
            asserter.operation_types.len(),
            asserter.operation_status_map.len(),
            asserter.error_type_map.len()
        );

        Ok(asserter)
    }

    /// Build an asserter from the provider's handshake responses.
    ///
    /// Both responses are validated first, so a caller learns whether the
    /// handshake itself is broken before any block is looked at.
    pub fn build_from_responses(
        network_status: &NetworkStatusResponse,
        network_options: &NetworkOptionsResponse,
    ) -> Result<Self> {
        network_status_response(network_status)?;
        network_options_response(network_options)?;

        let genesis = network_status
            .genesis_block_identifier
            .as_ref()
            .ok_or(AsserterError::BlockIdentifierMissing)?;
        let allow = network_options.allow.as_ref().ok_or(AsserterError::AllowMissing)?;

        Self::build_from_capabilities(
            genesis,
            &allow.operation_types,
            &allow.operation_statuses,
            &allow.errors,
        )
    }

    pub fn build_from_configuration(config: &AsserterConfiguration) -> Result<Self> {
        let genesis = config
            .genesis_block_identifier
            .as_ref()
            .ok_or(AsserterError::BlockIdentifierMissing)?;

        Self::build_from_capabilities(
            genesis,
            &config.allowed_operation_types,
            &config.allowed_operation_statuses,
            &config.allowed_errors,
        )
    }

    /// Load a JSON [`AsserterConfiguration`] from `path` and build from it.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = AsserterConfiguration::from_filepath(path)?;
        Self::build_from_configuration(&config)
    }

    /// The configuration this asserter was built from, in a stable order.
    pub fn configuration(&self) -> AsserterConfiguration {
        let mut allowed_operation_types = self.operation_types.iter().cloned().collect::<Vec<_>>();
        allowed_operation_types.sort();

        let mut allowed_operation_statuses = self
            .operation_status_map
            .iter()
            .map(|(status, successful)| OperationStatus::new(status.clone(), *successful))
            .collect::<Vec<_>>();
        allowed_operation_statuses.sort_by(|a, b| a.status.cmp(&b.status));

        let mut allowed_errors = self.error_type_map.values().cloned().collect::<Vec<_>>();
        allowed_errors.sort_by_key(|err| err.code);

        AsserterConfiguration {
            genesis_block_identifier: Some(self.genesis_block.clone()),
            allowed_operation_types,
            allowed_operation_statuses,
            allowed_errors,
        }
    }

    pub fn genesis_index(&self) -> i64 {
        self.genesis_block.index
    }

    pub fn genesis_block(&self) -> &BlockIdentifier {
        &self.genesis_block
    }

    pub fn operation_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.operation_types.iter().map(String::as_str)
    }

    pub fn operation_statuses(&self) -> impl Iterator<Item = &str> + '_ {
        self.operation_status_map.keys().map(String::as_str)
    }

    /// Look up a declared error definition by code.
    pub fn error_definition(&self, code: i32) -> Option<&ApiError> {
        self.error_type_map.get(&code)
    }
}

/// Resolve an asserter slot that may not have been filled yet.
///
/// Callers that build their asserter lazily (after the handshake) hold an
/// `Option`; this turns the empty case into
/// [`AsserterError::NotInitialized`] instead of a panic.
pub fn initialized(asserter: Option<&Asserter>) -> Result<&Asserter> {
    asserter.ok_or(AsserterError::NotInitialized)
}
