use super::*;

/// Sale configuration, mutated only through the owner setters.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub uri_prefix: String,
    pub uri_suffix: String,
    pub cost: Amount,
    pub max_supply: u32,
    pub max_mint_amount: u32,
    pub paused: bool,
    pub merkle_root: Hash256,
}

impl From<InitParams> for Config {
    fn from(params: InitParams) -> Self {
        Self {
            name: params.name,
            symbol: params.symbol,
            uri_prefix: params.uri_prefix,
            uri_suffix: params.uri_suffix,
            cost: params.cost,
            max_supply: params.max_supply,
            max_mint_amount: params.max_mint_amount,
            paused: params.paused,
            merkle_root: params.merkle_root,
        }
    }
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Sale configuration.
    pub config: Config,
    /// Account allowed to configure the sale and withdraw funds.
    pub ownership: Ownership,
    /// Number of issued tokens, which is also the highest issued token ID.
    pub total_supply: u32,
    /// Current holder of every issued token.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// Tokens of every holder, in the order they were received.
    pub holdings: StateMap<Address, Vec<ContractTokenId>, S>,
    /// Addresses that already used their allowlist mint.
    pub claimed: StateSet<Address, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        params: InitParams,
        origin: AccountAddress,
    ) -> Self {
        Self {
            config: params.into(),
            ownership: Ownership::new(origin),
            total_supply: 0,
            tokens: state_builder.new_map(),
            holdings: state_builder.new_map(),
            claimed: state_builder.new_set(),
        }
    }

    /// Rejects with `ContractPaused` while the contract is paused.
    pub fn ensure_active(&self) -> ContractResult<()> {
        ensure!(
            !self.config.paused,
            CustomContractError::ContractPaused.into()
        );
        Ok(())
    }
}
