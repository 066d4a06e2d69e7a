use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Caller is not the contract owner (Error code: -4).
    Unauthorized,
    /// Minting and transfers are disabled (Error code: -5).
    ContractPaused,
    /// Quantity is zero or above the per-call ceiling (Error code: -6).
    InvalidQuantity,
    /// Minting would exceed the supply ceiling (Error code: -7).
    CapacityExceeded,
    /// Attached amount is below the required price (Error code: -8).
    InsufficientFunds,
    /// Merkle proof does not lead to the allowlist root (Error code: -9).
    InvalidProof,
    /// Address has already used its allowlist mint (Error code: -10).
    AlreadyClaimed,
    /// Token has not been issued (Error code: -11).
    NotFound,
    /// Failed to invoke a contract (Error code: -12).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -13).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
