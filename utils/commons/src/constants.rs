/// Tag for the Claimed event.
pub const CLAIMED_TAG: u8 = 0;

/// Tag for the SetCost event.
pub const SET_COST_TAG: u8 = 1;

/// Tag for the SetMaxMintAmount event.
pub const SET_MAX_MINT_AMOUNT_TAG: u8 = 2;

/// Tag for the SetUriPrefix event.
pub const SET_URI_PREFIX_TAG: u8 = 3;

/// Tag for the SetUriSuffix event.
pub const SET_URI_SUFFIX_TAG: u8 = 4;

/// Tag for the SetPause event.
pub const SET_PAUSE_TAG: u8 = 5;

/// Tag for the SetMerkleRoot event.
pub const SET_MERKLE_ROOT_TAG: u8 = 6;

/// Tag for the OwnershipTransferred event.
pub const OWNERSHIP_TRANSFERRED_TAG: u8 = 7;

/// Tag for the Withdraw event.
pub const WITHDRAW_TAG: u8 = 8;

/// Highest accepted per-call mint ceiling. Every minted token logs two events
/// and `whiteListMint` logs one more, all within the 64 logs allowed per call.
pub const MAX_MINT_AMOUNT_LIMIT: u32 = 31;
