use super::*;

/// Price of `quantity` tokens at `cost` each, or `None` if it does not fit in
/// an `Amount`.
pub fn required_payment(cost: Amount, quantity: u32) -> Option<Amount> {
    cost.micro_ccd
        .checked_mul(u64::from(quantity))
        .map(Amount::from_micro_ccd)
}

/// Check that `attached` covers the price of `quantity` tokens.
///
/// Any amount above the price is kept by the contract.
pub fn charge(cost: Amount, quantity: u32, attached: Amount) -> ContractResult<()> {
    let required =
        required_payment(cost, quantity).ok_or(CustomContractError::InsufficientFunds)?;
    ensure!(
        attached.micro_ccd >= required.micro_ccd,
        CustomContractError::InsufficientFunds.into()
    );
    Ok(())
}

impl<S: HasStateApi> State<S> {
    /// Check the attached amount against the configured cost.
    #[inline(always)]
    pub fn charge(&self, quantity: u32, attached: Amount) -> ContractResult<()> {
        charge(self.config.cost, quantity, attached)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    fn cost() -> Amount {
        Amount::from_micro_ccd(69_000)
    }

    #[concordium_test]
    fn test_required_payment() {
        claim_eq!(
            required_payment(cost(), 5),
            Some(Amount::from_micro_ccd(345_000))
        );
        claim_eq!(required_payment(cost(), 0), Some(Amount::zero()));
        claim_eq!(
            required_payment(Amount::from_micro_ccd(u64::MAX), 2),
            None
        );
    }

    #[concordium_test]
    fn test_charge() {
        // Exact payment
        claim_eq!(charge(cost(), 5, Amount::from_micro_ccd(345_000)), Ok(()));
        // Overpayment is accepted
        claim_eq!(charge(cost(), 1, Amount::from_ccd(1)), Ok(()));
        // Underpayment
        claim_eq!(
            charge(cost(), 5, Amount::from_micro_ccd(10_000)),
            Err(CustomContractError::InsufficientFunds.into())
        );
        claim_eq!(
            charge(cost(), 5, Amount::from_micro_ccd(344_999)),
            Err(CustomContractError::InsufficientFunds.into())
        );
        // A price that overflows can never be paid
        claim_eq!(
            charge(
                Amount::from_micro_ccd(u64::MAX),
                2,
                Amount::from_micro_ccd(u64::MAX)
            ),
            Err(CustomContractError::InsufficientFunds.into())
        );
    }
}
