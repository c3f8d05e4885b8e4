use thiserror::Error;

/// Broad class of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A validator-bound check ran without a constructed asserter.
    NotInitialized,
    /// A required sub-structure or string is absent or empty.
    MissingField,
    /// A value is present but not semantically valid.
    MalformedValue,
    /// A well-formed value outside a declared allow-list.
    NotAllowed,
    /// Ordering or cross-field consistency is violated.
    Consistency,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsserterError {
    #[error("asserter not initialized")]
    NotInitialized,

    #[error("invalid asserter configuration: {0}")]
    Config(String),

    // amounts
    #[error("Amount.Value is missing")]
    AmountValueMissing,

    #[error("Amount.Value not an integer {0}")]
    AmountValueNotInteger(String),

    #[error("Amount.Currency is nil")]
    AmountCurrencyMissing,

    #[error("Amount.Currency.Symbol is empty")]
    CurrencySymbolMissing,

    #[error("Amount.Currency.Decimals must be > 0, got {0}")]
    CurrencyDecimalsInvalid(i32),

    // operations
    #[error("Operation.OperationIdentifier is nil")]
    OperationIdentifierMissing,

    #[error("Operation.OperationIdentifier.Index invalid: expected {expected}, got {found}")]
    OperationIndexMismatch { expected: i64, found: i64 },

    #[error("Operation.OperationIdentifier.NetworkIndex invalid {0}")]
    NetworkIndexInvalid(i64),

    #[error("Operation.Type is missing")]
    OperationTypeMissing,

    #[error("Operation.Type {0} is invalid")]
    OperationTypeNotAllowed(String),

    #[error("Operation.Status is missing")]
    OperationStatusMissing,

    #[error("Operation.Status {0} is invalid")]
    OperationStatusNotAllowed(String),

    #[error("unrecognized operation status {0}")]
    OperationStatusUnrecognized(String),

    // accounts
    #[error("Account is nil")]
    AccountMissing,

    #[error("Account.Address is missing")]
    AccountAddressMissing,

    #[error("Account.SubAccount.Address is missing")]
    SubAccountAddressMissing,

    // identifiers
    #[error("BlockIdentifier is nil")]
    BlockIdentifierMissing,

    #[error("BlockIdentifier.Hash is missing")]
    BlockIdentifierHashMissing,

    #[error("BlockIdentifier.Index is negative: {0}")]
    BlockIdentifierIndexNegative(i64),

    #[error("PartialBlockIdentifier is nil")]
    PartialBlockIdentifierMissing,

    #[error("neither PartialBlockIdentifier.Hash nor PartialBlockIdentifier.Index is set")]
    PartialBlockIdentifierUnset,

    #[error("TransactionIdentifier is nil")]
    TransactionIdentifierMissing,

    #[error("TransactionIdentifier.Hash is missing")]
    TransactionIdentifierHashMissing,

    // blocks
    #[error("Timestamp is invalid {0}")]
    TimestampInvalid(i64),

    #[error("BlockIdentifier.Hash == ParentBlockIdentifier.Hash")]
    BlockHashSelfReferential,

    #[error("BlockIdentifier.Index <= ParentBlockIdentifier.Index")]
    BlockIndexNotIncreasing,

    // network handshake
    #[error("version is nil")]
    VersionMissing,

    #[error("Version.NodeVersion is missing")]
    NodeVersionMissing,

    #[error("Version.MiddlewareVersion is missing")]
    MiddlewareVersionMissing,

    #[error("Peer.PeerID is missing")]
    PeerIdMissing,

    #[error("NetworkIdentifier.Blockchain is missing")]
    NetworkBlockchainMissing,

    #[error("NetworkIdentifier.Network is missing")]
    NetworkNameMissing,

    #[error("NetworkIdentifier.SubNetworkIdentifier.Network is missing")]
    SubNetworkNameMissing,

    #[error("Allow is nil")]
    AllowMissing,

    #[error("no Allow.OperationStatuses found")]
    OperationStatusesEmpty,

    // errors
    #[error("Error.Code is negative: {0}")]
    ErrorCodeNegative(i32),

    #[error("Error.Message is missing")]
    ErrorMessageMissing,

    #[error("Error {0} declares details in network options")]
    ErrorDetailsDeclared(i32),

    #[error("Error.Code {0} not in network options")]
    ErrorCodeUndeclared(i32),

    #[error("Error.Message for code {0} does not match network options")]
    ErrorMessageMismatch(i32),

    #[error("Error.Retriable for code {0} does not match network options")]
    ErrorRetriableMismatch(i32),
}

impl AsserterError {
    pub fn kind(&self) -> ErrorKind {
        use AsserterError::*;

        match self {
            NotInitialized => ErrorKind::NotInitialized,

            AmountValueMissing
            | AmountCurrencyMissing
            | CurrencySymbolMissing
            | OperationIdentifierMissing
            | OperationTypeMissing
            | OperationStatusMissing
            | AccountMissing
            | AccountAddressMissing
            | SubAccountAddressMissing
            | BlockIdentifierMissing
            | BlockIdentifierHashMissing
            | PartialBlockIdentifierMissing
            | PartialBlockIdentifierUnset
            | TransactionIdentifierMissing
            | TransactionIdentifierHashMissing
            | VersionMissing
            | NodeVersionMissing
            | MiddlewareVersionMissing
            | PeerIdMissing
            | NetworkBlockchainMissing
            | NetworkNameMissing
            | SubNetworkNameMissing
            | AllowMissing
            | OperationStatusesEmpty
            | ErrorMessageMissing => ErrorKind::MissingField,

            Config(_)
            | AmountValueNotInteger(_)
            | CurrencyDecimalsInvalid(_)
            | NetworkIndexInvalid(_)
            | BlockIdentifierIndexNegative(_)
            | TimestampInvalid(_)
            | ErrorCodeNegative(_)
            | ErrorDetailsDeclared(_) => ErrorKind::MalformedValue,

            OperationTypeNotAllowed(_)
            | OperationStatusNotAllowed(_)
            | OperationStatusUnrecognized(_)
            | ErrorCodeUndeclared(_) => ErrorKind::NotAllowed,

            OperationIndexMismatch { .. }
            | BlockHashSelfReferential
            | BlockIndexNotIncreasing
            | ErrorMessageMismatch(_)
            | ErrorRetriableMismatch(_) => ErrorKind::Consistency,
        }
    }
}

pub type Result<T> = std::result::Result<T, AsserterError>;
