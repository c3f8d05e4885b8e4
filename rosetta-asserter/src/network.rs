use rosetta_types::{
    Allow, ApiError, NetworkIdentifier, NetworkListResponse, NetworkOptionsResponse,
    NetworkStatusResponse, OperationStatus, Peer, Version,
};

use crate::asserter::Asserter;
use crate::block::{block_identifier, timestamp};
use crate::error::{AsserterError, Result};

pub fn version(version: Option<&Version>) -> Result<()> {
    let version = version.ok_or(AsserterError::VersionMissing)?;

    if version.node_version.is_empty() {
        return Err(AsserterError::NodeVersionMissing);
    }

    match &version.middleware_version {
        Some(middleware) if middleware.is_empty() => Err(AsserterError::MiddlewareVersionMissing),
        _ => Ok(()),
    }
}

pub fn peer(peer: &Peer) -> Result<()> {
    if peer.peer_id.is_empty() {
        return Err(AsserterError::PeerIdMissing);
    }

    Ok(())
}

pub fn network_identifier(network: &NetworkIdentifier) -> Result<()> {
    if network.blockchain.is_empty() {
        return Err(AsserterError::NetworkBlockchainMissing);
    }

    if network.network.is_empty() {
        return Err(AsserterError::NetworkNameMissing);
    }

    match &network.sub_network_identifier {
        Some(sub_network) if sub_network.network.is_empty() => {
            Err(AsserterError::SubNetworkNameMissing)
        }
        _ => Ok(()),
    }
}

pub fn network_list_response(response: &NetworkListResponse) -> Result<()> {
    response.network_identifiers.iter().try_for_each(network_identifier)
}

pub fn network_status_response(response: &NetworkStatusResponse) -> Result<()> {
    block_identifier(response.current_block_identifier.as_ref())?;
    timestamp(response.current_block_timestamp)?;
    block_identifier(response.genesis_block_identifier.as_ref())?;
    response.peers.iter().try_for_each(peer)
}

/// A provider must declare at least one operation status, and no status
/// tag may be empty.
pub fn operation_statuses(statuses: &[OperationStatus]) -> Result<()> {
    if statuses.is_empty() {
        return Err(AsserterError::OperationStatusesEmpty);
    }

    if statuses.iter().any(|status| status.status.is_empty()) {
        return Err(AsserterError::OperationStatusMissing);
    }

    Ok(())
}

pub fn operation_types(types: &[String]) -> Result<()> {
    if types.iter().any(String::is_empty) {
        return Err(AsserterError::OperationTypeMissing);
    }

    Ok(())
}

pub fn error(err: &ApiError) -> Result<()> {
    if err.code < 0 {
        return Err(AsserterError::ErrorCodeNegative(err.code));
    }

    if err.message.is_empty() {
        return Err(AsserterError::ErrorMessageMissing);
    }

    Ok(())
}

/// Declared errors are templates; concrete details only appear on errors a
/// provider actually returns.
pub fn errors(errors: &[ApiError]) -> Result<()> {
    for err in errors {
        error(err)?;

        if err.details.is_some() {
            return Err(AsserterError::ErrorDetailsDeclared(err.code));
        }
    }

    Ok(())
}

pub fn allow(allowed: Option<&Allow>) -> Result<()> {
    let allowed = allowed.ok_or(AsserterError::AllowMissing)?;

    operation_statuses(&allowed.operation_statuses)?;
    operation_types(&allowed.operation_types)?;
    errors(&allowed.errors)
}

pub fn network_options_response(response: &NetworkOptionsResponse) -> Result<()> {
    version(response.version.as_ref())?;
    allow(response.allow.as_ref())
}

impl Asserter {
    /// Ensures an error returned by the provider is one it declared, with
    /// the declared message and retriable flag.
    pub fn error(&self, err: &ApiError) -> Result<()> {
        error(err)?;

        let declared = self
            .error_type_map
            .get(&err.code)
            .ok_or(AsserterError::ErrorCodeUndeclared(err.code))?;

        if declared.message != err.message {
            return Err(AsserterError::ErrorMessageMismatch(err.code));
        }

        if declared.retriable != err.retriable {
            return Err(AsserterError::ErrorRetriableMismatch(err.code));
        }

        Ok(())
    }
}
