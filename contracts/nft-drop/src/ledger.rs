use super::*;

/// A block of consecutive token IDs that passed every supply check and can be
/// committed to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    /// First token ID of the block.
    pub first: u32,
    /// Number of token IDs in the block.
    pub quantity: u32,
}

impl Reservation {
    /// Last token ID of the block.
    #[inline(always)]
    pub fn last(&self) -> u32 {
        self.first + self.quantity - 1
    }

    pub fn token_ids(&self) -> impl Iterator<Item = ContractTokenId> {
        (self.first..=self.last()).map(TokenIdU32)
    }
}

// Functions for issuing, moving and querying tokens.
impl<S: HasStateApi> State<S> {
    /// Check that `quantity` more tokens can be issued by one call, without
    /// touching the state.
    ///
    /// It rejects if:
    /// - `quantity` is zero or above `max_mint_amount`;
    /// - Issuing `quantity` tokens would exceed `max_supply`.
    pub fn check_reservation(&self, quantity: u32) -> ContractResult<Reservation> {
        ensure!(
            quantity >= 1 && quantity <= self.config.max_mint_amount,
            CustomContractError::InvalidQuantity.into()
        );

        let total = self
            .total_supply
            .checked_add(quantity)
            .ok_or(CustomContractError::CapacityExceeded)?;
        ensure!(
            total <= self.config.max_supply,
            CustomContractError::CapacityExceeded.into()
        );

        Ok(Reservation {
            first: self.total_supply + 1,
            quantity,
        })
    }

    /// Issue the reserved tokens to `holder`.
    ///
    /// The reservation must come from `check_reservation` on the current state.
    pub fn commit(&mut self, reservation: &Reservation, holder: Address) {
        for token_id in reservation.token_ids() {
            self.tokens.insert(token_id, holder);
        }

        let mut owned = self.ids_of(&holder);
        owned.extend(reservation.token_ids());
        self.holdings.insert(holder, owned);

        self.total_supply = reservation.last();
    }

    /// Check that the token ID has been issued.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        token_id.0 >= 1 && token_id.0 <= self.total_supply
    }

    /// Current holder of an issued token.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> Option<Address> {
        self.tokens.get(token_id).map(|holder| *holder)
    }

    /// Tokens held by `holder`, in the order they were received.
    pub fn ids_of(&self, holder: &Address) -> Vec<ContractTokenId> {
        self.holdings
            .get(holder)
            .map(|owned| owned.to_vec())
            .unwrap_or_default()
    }

    /// Number of tokens held by `holder`.
    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.holdings
            .get(holder)
            .map_or(0, |owned| owned.len() as u64)
    }

    /// Move a token from `from` to `to`.
    ///
    /// It rejects if:
    /// - The token ID has not been issued;
    /// - `amount` is above 1, or `from` does not hold the token.
    ///
    /// A zero amount leaves the state untouched.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let holder = self
            .owner_of(token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        if amount == TokenAmountU8(0) {
            return Ok(());
        }
        ensure!(
            amount == TokenAmountU8(1) && holder == *from,
            ContractError::InsufficientFunds
        );

        if from == to {
            return Ok(());
        }

        self.tokens.insert(*token_id, *to);

        let mut from_owned = self.ids_of(from);
        from_owned.retain(|id| id != token_id);
        if from_owned.is_empty() {
            self.holdings.remove(from);
        } else {
            self.holdings.insert(*from, from_owned);
        }

        let mut to_owned = self.ids_of(to);
        to_owned.push(*token_id);
        self.holdings.insert(*to, to_owned);

        Ok(())
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADDRESS_0: Address = Address::Account(AccountAddress([0; 32]));
    const ADDRESS_1: Address = Address::Account(AccountAddress([1; 32]));
    const ADDRESS_2: Address = Address::Contract(ContractAddress {
        index: 2,
        subindex: 0,
    });

    fn new_state(max_supply: u32, max_mint_amount: u32) -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let params = InitParams {
            name: "Drop".into(),
            symbol: "DRP".into(),
            uri_prefix: String::new(),
            uri_suffix: String::new(),
            cost: Amount::zero(),
            max_supply,
            max_mint_amount,
            paused: false,
            merkle_root: [0; 32],
        };
        State::new(&mut state_builder, params, AccountAddress([0; 32]))
    }

    fn reserve(state: &mut State<TestStateApi>, holder: Address, quantity: u32) {
        let reservation = state
            .check_reservation(quantity)
            .expect_report("Reservation should pass");
        state.commit(&reservation, holder);
    }

    #[concordium_test]
    fn test_reservation_bounds() {
        let mut state = new_state(10, 4);

        claim_eq!(
            state.check_reservation(0),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(
            state.check_reservation(5),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(
            state.check_reservation(4),
            Ok(Reservation {
                first: 1,
                quantity: 4
            })
        );

        reserve(&mut state, ADDRESS_0, 4);
        reserve(&mut state, ADDRESS_0, 4);
        claim_eq!(
            state.check_reservation(3),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(
            state.check_reservation(2),
            Ok(Reservation {
                first: 9,
                quantity: 2
            })
        );
    }

    #[concordium_test]
    fn test_ids_are_sequential_per_holder() {
        let mut state = new_state(100, 10);

        reserve(&mut state, ADDRESS_0, 2);
        reserve(&mut state, ADDRESS_1, 3);
        reserve(&mut state, ADDRESS_0, 1);

        claim_eq!(state.total_supply, 6);
        claim_eq!(
            state.ids_of(&ADDRESS_0),
            vec![TokenIdU32(1), TokenIdU32(2), TokenIdU32(6)]
        );
        claim_eq!(
            state.ids_of(&ADDRESS_1),
            vec![TokenIdU32(3), TokenIdU32(4), TokenIdU32(5)]
        );
        claim_eq!(state.ids_of(&ADDRESS_2), Vec::new());
        claim_eq!(state.balance_of(&ADDRESS_2), 0);
        claim_eq!(state.owner_of(&TokenIdU32(5)), Some(ADDRESS_1));
        claim_eq!(state.owner_of(&TokenIdU32(7)), None);
        claim!(state.contains_token(&TokenIdU32(6)));
        claim!(!state.contains_token(&TokenIdU32(0)));
        claim!(!state.contains_token(&TokenIdU32(7)));
    }

    #[concordium_test]
    fn test_transfer_moves_token() {
        let mut state = new_state(100, 10);
        reserve(&mut state, ADDRESS_0, 3);

        let result = state.transfer(&TokenIdU32(2), TokenAmountU8(1), &ADDRESS_0, &ADDRESS_2);
        claim_eq!(result, Ok(()));
        claim_eq!(state.ids_of(&ADDRESS_0), vec![TokenIdU32(1), TokenIdU32(3)]);
        claim_eq!(state.ids_of(&ADDRESS_2), vec![TokenIdU32(2)]);
        claim_eq!(state.owner_of(&TokenIdU32(2)), Some(ADDRESS_2));
        claim_eq!(state.total_supply, 3);

        // Moving the last token of a holder leaves an empty wallet
        let result = state.transfer(&TokenIdU32(2), TokenAmountU8(1), &ADDRESS_2, &ADDRESS_1);
        claim_eq!(result, Ok(()));
        claim_eq!(state.ids_of(&ADDRESS_2), Vec::new());
        claim_eq!(state.balance_of(&ADDRESS_1), 1);
    }

    #[concordium_test]
    fn test_transfer_rejects_non_holder() {
        let mut state = new_state(100, 10);
        reserve(&mut state, ADDRESS_0, 1);

        let result = state.transfer(&TokenIdU32(1), TokenAmountU8(1), &ADDRESS_1, &ADDRESS_2);
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        let result = state.transfer(&TokenIdU32(1), TokenAmountU8(2), &ADDRESS_0, &ADDRESS_2);
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        let result = state.transfer(&TokenIdU32(2), TokenAmountU8(1), &ADDRESS_0, &ADDRESS_2);
        claim_eq!(result, Err(ContractError::InvalidTokenId));

        claim_eq!(state.ids_of(&ADDRESS_0), vec![TokenIdU32(1)]);
        claim_eq!(state.owner_of(&TokenIdU32(1)), Some(ADDRESS_0));
    }

    #[concordium_test]
    fn test_transfer_zero_amount_is_noop() {
        let mut state = new_state(100, 10);
        reserve(&mut state, ADDRESS_0, 1);

        let result = state.transfer(&TokenIdU32(1), TokenAmountU8(0), &ADDRESS_0, &ADDRESS_2);
        claim_eq!(result, Ok(()));
        // Not even the holder is checked
        let result = state.transfer(&TokenIdU32(1), TokenAmountU8(0), &ADDRESS_1, &ADDRESS_2);
        claim_eq!(result, Ok(()));
        // The token still has to exist
        let result = state.transfer(&TokenIdU32(2), TokenAmountU8(0), &ADDRESS_0, &ADDRESS_2);
        claim_eq!(result, Err(ContractError::InvalidTokenId));

        claim_eq!(state.ids_of(&ADDRESS_0), vec![TokenIdU32(1)]);
        claim_eq!(state.ids_of(&ADDRESS_2), Vec::new());
        claim_eq!(state.owner_of(&TokenIdU32(1)), Some(ADDRESS_0));
    }
}
