use super::*;

// Functions for the one-time allowlist mint.
impl<S: HasStateApi> State<S> {
    /// Check if `claimant` already used its allowlist mint.
    #[inline(always)]
    pub fn is_claimed(&self, claimant: &Address) -> bool {
        self.claimed.contains(claimant)
    }

    /// Check that `claimant` may use its allowlist mint, without touching the
    /// state.
    ///
    /// It rejects if:
    /// - `proof` does not lead from the claimant to the current merkle root;
    /// - The claimant already used its allowlist mint.
    pub fn check_claim(&self, claimant: &Address, proof: &[Hash256]) -> ContractResult<()> {
        ensure!(
            commons::verify(claimant, proof, &self.config.merkle_root),
            CustomContractError::InvalidProof.into()
        );
        ensure!(
            !self.is_claimed(claimant),
            CustomContractError::AlreadyClaimed.into()
        );
        Ok(())
    }

    /// Mark the allowlist mint of `claimant` as used.
    ///
    /// The flag is never cleared, not even when the merkle root changes.
    pub fn record_claim(&mut self, claimant: Address) {
        self.claimed.insert(claimant);
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const MEMBER_1: Address = Address::Account(AccountAddress([1; 32]));
    const MEMBER_2: Address = Address::Account(AccountAddress([2; 32]));
    const OUTSIDER: Address = Address::Account(AccountAddress([3; 32]));

    fn new_state(merkle_root: Hash256) -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let params = InitParams {
            name: "Drop".into(),
            symbol: "DRP".into(),
            uri_prefix: String::new(),
            uri_suffix: String::new(),
            cost: Amount::zero(),
            max_supply: 10,
            max_mint_amount: 10,
            paused: false,
            merkle_root,
        };
        State::new(&mut state_builder, params, AccountAddress([0; 32]))
    }

    #[concordium_test]
    fn test_claim_once() {
        let leaves = [hash_leaf(&MEMBER_1), hash_leaf(&MEMBER_2)];
        let proof = build_proof(&leaves, 0).expect_report("Index is in range");
        let mut state = new_state(compute_root(&leaves));

        claim_eq!(state.check_claim(&MEMBER_1, &proof), Ok(()));
        state.record_claim(MEMBER_1);
        claim!(state.is_claimed(&MEMBER_1));
        claim!(!state.is_claimed(&MEMBER_2));
        claim_eq!(
            state.check_claim(&MEMBER_1, &proof),
            Err(CustomContractError::AlreadyClaimed.into())
        );
    }

    #[concordium_test]
    fn test_invalid_proof_checked_first() {
        let leaves = [hash_leaf(&MEMBER_1), hash_leaf(&MEMBER_2)];
        let proof = build_proof(&leaves, 0).expect_report("Index is in range");
        let mut state = new_state(compute_root(&leaves));

        claim_eq!(
            state.check_claim(&OUTSIDER, &proof),
            Err(CustomContractError::InvalidProof.into())
        );
        claim_eq!(
            state.check_claim(&MEMBER_1, &[]),
            Err(CustomContractError::InvalidProof.into())
        );

        // A used claim with a bad proof still reports the bad proof
        state.record_claim(MEMBER_1);
        claim_eq!(
            state.check_claim(&MEMBER_1, &[[0; 32]]),
            Err(CustomContractError::InvalidProof.into())
        );
    }

    #[concordium_test]
    fn test_root_rotation_keeps_claims() {
        let old_leaves = [hash_leaf(&MEMBER_1), hash_leaf(&MEMBER_2)];
        let new_leaves = [hash_leaf(&MEMBER_1), hash_leaf(&OUTSIDER)];
        let old_proof = build_proof(&old_leaves, 1).expect_report("Index is in range");
        let new_proof = build_proof(&new_leaves, 0).expect_report("Index is in range");

        let mut state = new_state(compute_root(&old_leaves));
        state.record_claim(MEMBER_1);
        state.config.merkle_root = compute_root(&new_leaves);

        // Proofs against the old root stop working
        claim_eq!(
            state.check_claim(&MEMBER_2, &old_proof),
            Err(CustomContractError::InvalidProof.into())
        );
        // Earlier claims stay recorded
        claim_eq!(
            state.check_claim(&MEMBER_1, &new_proof),
            Err(CustomContractError::AlreadyClaimed.into())
        );
    }
}
