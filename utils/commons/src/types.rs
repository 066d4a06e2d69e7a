use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Identifiers are issued sequentially starting from 1, so a `u32` is enough
/// for any realistic supply ceiling.
pub type ContractTokenId = TokenIdU32;

/// Contract token amount type.
/// Every identifier is a unique token, so a balance is either 0 or 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Keccak-256 digest used for allowlist leaves, nodes and roots.
pub type Hash256 = [u8; 32];

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

/// Parameter type for the CIS-2 function `tokenMetadata` specialized to the
/// subset of TokenIDs used by this contract.
pub type ContractTokenMetadataQueryParams = TokenMetadataQueryParams<ContractTokenId>;
