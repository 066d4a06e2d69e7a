use super::*;

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum NftDropEvent<'e> {
    /// An address used its allowlist mint.
    Claimed(Address),
    /// Update the token price.
    SetCost(Amount),
    /// Update the per-call mint ceiling.
    SetMaxMintAmount(u32),
    /// Update the metadata URL prefix.
    SetUriPrefix(&'e String),
    /// Update the metadata URL suffix.
    SetUriSuffix(&'e String),
    /// Pause or resume minting and transfers.
    SetPause(bool),
    /// Replace the allowlist merkle root.
    SetMerkleRoot(&'e Hash256),
    /// Hand the contract over to a new owner.
    OwnershipTransferred {
        previous: AccountAddress,
        owner: AccountAddress,
    },
    /// Contract balance paid out to the owner.
    Withdraw { to: AccountAddress, amount: Amount },
}

impl<'e> Serial for NftDropEvent<'e> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            NftDropEvent::Claimed(claimant) => {
                out.write_u8(CLAIMED_TAG)?;
                claimant.serial(out)
            }
            NftDropEvent::SetCost(cost) => {
                out.write_u8(SET_COST_TAG)?;
                cost.serial(out)
            }
            NftDropEvent::SetMaxMintAmount(max_mint_amount) => {
                out.write_u8(SET_MAX_MINT_AMOUNT_TAG)?;
                max_mint_amount.serial(out)
            }
            NftDropEvent::SetUriPrefix(prefix) => {
                out.write_u8(SET_URI_PREFIX_TAG)?;
                prefix.serial(out)
            }
            NftDropEvent::SetUriSuffix(suffix) => {
                out.write_u8(SET_URI_SUFFIX_TAG)?;
                suffix.serial(out)
            }
            NftDropEvent::SetPause(paused) => {
                out.write_u8(SET_PAUSE_TAG)?;
                paused.serial(out)
            }
            NftDropEvent::SetMerkleRoot(root) => {
                out.write_u8(SET_MERKLE_ROOT_TAG)?;
                root.serial(out)
            }
            NftDropEvent::OwnershipTransferred { previous, owner } => {
                out.write_u8(OWNERSHIP_TRANSFERRED_TAG)?;
                previous.serial(out)?;
                owner.serial(out)
            }
            NftDropEvent::Withdraw { to, amount } => {
                out.write_u8(WITHDRAW_TAG)?;
                to.serial(out)?;
                amount.serial(out)
            }
        }
    }
}
