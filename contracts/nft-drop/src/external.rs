use super::*;

/// Initial configuration of a drop. Every value must be given explicitly.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct InitParams {
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Prepended to the token ID in metadata URLs.
    pub uri_prefix: String,
    /// Appended to the token ID in metadata URLs.
    pub uri_suffix: String,
    /// Price of a single token on the priced paths.
    pub cost: Amount,
    /// Maximum number of tokens that can ever be issued.
    pub max_supply: u32,
    /// Maximum number of tokens issued by a single call.
    pub max_mint_amount: u32,
    /// Whether the contract starts paused.
    pub paused: bool,
    /// Root of the allowlist merkle tree.
    pub merkle_root: Hash256,
}

#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct WhiteListMintParams {
    /// Sibling digests from the sender's leaf up to the merkle root.
    pub proof: Vec<Hash256>,
    /// Number of tokens to mint.
    pub quantity: u32,
}

#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct ZeroCostMintParams {
    /// Number of tokens to mint.
    pub quantity: u32,
    /// Receiver of the minted tokens.
    pub to: Address,
}
