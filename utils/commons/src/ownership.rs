use crate::{errors::CustomContractError, types::ContractResult};
use concordium_std::*;

/// The single privileged account of a contract instance.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    /// Account allowed to configure the contract and withdraw its balance.
    owner: AccountAddress,
}

impl Ownership {
    pub fn new(owner: AccountAddress) -> Self {
        Self { owner }
    }

    #[inline(always)]
    pub fn owner(&self) -> AccountAddress {
        self.owner
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        matches!(address, Address::Account(account) if *account == self.owner)
    }

    /// Rejects with `Unauthorized` unless `sender` is the owner account.
    pub fn ensure_owner(&self, sender: &Address) -> ContractResult<()> {
        ensure!(
            self.is_owner(sender),
            CustomContractError::Unauthorized.into()
        );
        Ok(())
    }

    /// Hands the instance over to `new_owner`, returning the previous owner.
    pub fn transfer(
        &mut self,
        sender: &Address,
        new_owner: AccountAddress,
    ) -> ContractResult<AccountAddress> {
        self.ensure_owner(sender)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const USER: AccountAddress = AccountAddress([16; 32]);
    const CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    #[concordium_test]
    fn test_only_owner_account_passes() {
        let ownership = Ownership::new(OWNER);

        claim!(ownership.is_owner(&Address::Account(OWNER)));
        claim_eq!(ownership.ensure_owner(&Address::Account(OWNER)), Ok(()));
        claim_eq!(
            ownership.ensure_owner(&Address::Account(USER)),
            Err(CustomContractError::Unauthorized.into())
        );
        claim_eq!(
            ownership.ensure_owner(&Address::Contract(CONTRACT)),
            Err(CustomContractError::Unauthorized.into())
        );
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut ownership = Ownership::new(OWNER);

        let result = ownership.transfer(&Address::Account(OWNER), USER);
        claim_eq!(result, Ok(OWNER));
        claim_eq!(ownership.owner(), USER);
        claim!(!ownership.is_owner(&Address::Account(OWNER)));

        // The previous owner lost every right
        let result = ownership.transfer(&Address::Account(OWNER), OWNER);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim_eq!(ownership.owner(), USER);
    }
}
