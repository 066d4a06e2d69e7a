use super::*;

/// Initialize contract instance with no tokens.
/// The account creating the instance becomes its owner.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - `max_mint_amount` is above `MAX_MINT_AMOUNT_LIMIT`.
#[init(contract = "NftDrop", parameter = "InitParams")]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    ensure!(
        params.max_mint_amount <= MAX_MINT_AMOUNT_LIMIT,
        CustomContractError::InvalidQuantity.into()
    );

    // Construct the initial contract state.
    let state = State::new(state_builder, params, ctx.init_origin());

    Ok(state)
}

/// Issue the reserved tokens to `holder`.
/// Logs a `Mint` and a `TokenMetadata` event for each token, then commits
/// the tokens to the state.
fn mint_tokens<S: HasStateApi>(
    state: &mut State<S>,
    reservation: &Reservation,
    holder: Address,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    for token_id in reservation.token_ids() {
        logger.log(&Cis2Event::Mint(MintEvent {
            token_id,
            amount: TokenAmountU8(1),
            owner: holder,
        }))?;

        logger.log(&token_metadata_event(
            token_id,
            state.build_token_uri(&token_id),
        ))?;
    }

    state.commit(reservation, holder);
    Ok(())
}

/// Public sale. Mints `quantity` tokens to the sender, who pays `cost` for
/// each of them. Any amount above the price stays in the contract.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - The contract is paused;
/// - The attached amount is below `cost * quantity`;
/// - `quantity` is zero or above the per-call ceiling;
/// - The mint would exceed the supply ceiling;
/// - Fails to log `Mint` or `TokenMetadata` event.
///
/// Note: The per-call ceiling is capped at `MAX_MINT_AMOUNT_LIMIT` (31) due to
/// the limit of 64 logs a smart contract can produce on each function call.
#[receive(
    contract = "NftDrop",
    name = "mint",
    parameter = "u32",
    mutable,
    payable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let quantity: u32 = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let state = host.state_mut();

    state.ensure_active()?;
    state.charge(quantity, amount)?;
    let reservation = state.check_reservation(quantity)?;

    mint_tokens(state, &reservation, sender, logger)
}

/// Allowlist sale. Same as `mint`, but only for addresses proving membership
/// of the allowlist merkle tree, and only once per address.
/// Logs a `Claimed` event on top of the mint events.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - The contract is paused;
/// - The proof does not lead to the current merkle root;
/// - The sender already used its allowlist mint;
/// - Any of the `mint` checks fails.
#[receive(
    contract = "NftDrop",
    name = "whiteListMint",
    parameter = "WhiteListMintParams",
    mutable,
    payable,
    enable_logger
)]
fn white_list_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: WhiteListMintParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let state = host.state_mut();

    state.ensure_active()?;
    state.check_claim(&sender, &params.proof)?;
    state.charge(params.quantity, amount)?;
    let reservation = state.check_reservation(params.quantity)?;

    logger.log(&NftDropEvent::Claimed(sender))?;
    mint_tokens(state, &reservation, sender, logger)?;
    state.record_claim(sender);

    Ok(())
}

/// Free mint of `quantity` tokens to any address, reserved for the owner.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - The contract is paused;
/// - The sender is not the owner;
/// - `quantity` is zero or above the per-call ceiling;
/// - The mint would exceed the supply ceiling;
/// - Fails to log `Mint` or `TokenMetadata` event.
#[receive(
    contract = "NftDrop",
    name = "zeroCostMint",
    parameter = "ZeroCostMintParams",
    mutable,
    enable_logger
)]
fn zero_cost_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ZeroCostMintParams = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    state.ensure_active()?;
    state.ownership.ensure_owner(&ctx.sender())?;
    let reservation = state.check_reservation(params.quantity)?;

    mint_tokens(state, &reservation, params.to, logger)
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook of every contract receiving a token.
///
/// It rejects if:
/// - It fails to parse the parameter;
/// - The contract is paused;
/// - Any of the transfers fail to be executed, which could be if:
///     - The sender is not the `from` address;
///     - The `token_id` does not exist;
///     - The token is not owned by the `from`, or the amount is above 1;
/// - Fails to log event;
/// - Any of the contracts receiving a transfer rejects.
#[receive(
    contract = "NftDrop",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    host.state().ensure_active()?;

    for transfer in transfers {
        // Authenticate the sender for this transfer
        ensure!(transfer.from == sender, ContractError::Unauthorized);

        let to_address = transfer.to.address();
        // Update the contract state
        host.state_mut().transfer(
            &transfer.token_id,
            transfer.amount,
            &transfer.from,
            &to_address,
        )?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, notify it about the transfer.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )
            .map_err(CustomContractError::from)?;
        }
    }

    Ok(())
}

/// Function to set the price of a single token.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - Fails to log `SetCost` event.
#[receive(
    contract = "NftDrop",
    name = "setCost",
    parameter = "Amount",
    mutable,
    enable_logger
)]
fn set_cost<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let cost: Amount = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;

    logger.log(&NftDropEvent::SetCost(cost))?;
    state.config.cost = cost;

    Ok(())
}

/// Function to set the maximum number of tokens minted by one call.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - The ceiling is above `MAX_MINT_AMOUNT_LIMIT`;
/// - Fails to log `SetMaxMintAmount` event.
#[receive(
    contract = "NftDrop",
    name = "setMaxMintAmount",
    parameter = "u32",
    mutable,
    enable_logger
)]
fn set_max_mint_amount<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let max_mint_amount: u32 = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;
    ensure!(
        max_mint_amount <= MAX_MINT_AMOUNT_LIMIT,
        CustomContractError::InvalidQuantity.into()
    );

    logger.log(&NftDropEvent::SetMaxMintAmount(max_mint_amount))?;
    state.config.max_mint_amount = max_mint_amount;

    Ok(())
}

/// Function to set the metadata URL prefix. The prefix is used as given, so
/// it has to carry its own trailing separator.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - Fails to log `SetUriPrefix` event.
#[receive(
    contract = "NftDrop",
    name = "setUriPrefix",
    parameter = "String",
    mutable,
    enable_logger
)]
fn set_uri_prefix<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let uri_prefix: String = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;

    logger.log(&NftDropEvent::SetUriPrefix(&uri_prefix))?;
    state.config.uri_prefix = uri_prefix;

    Ok(())
}

/// Function to set the metadata URL suffix.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - Fails to log `SetUriSuffix` event.
#[receive(
    contract = "NftDrop",
    name = "setUriSuffix",
    parameter = "String",
    mutable,
    enable_logger
)]
fn set_uri_suffix<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let uri_suffix: String = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;

    logger.log(&NftDropEvent::SetUriSuffix(&uri_suffix))?;
    state.config.uri_suffix = uri_suffix;

    Ok(())
}

/// Function to pause or resume minting and transfers.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - Fails to log `SetPause` event.
#[receive(
    contract = "NftDrop",
    name = "setPause",
    parameter = "bool",
    mutable,
    enable_logger
)]
fn set_pause<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let paused: bool = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;

    logger.log(&NftDropEvent::SetPause(paused))?;
    state.config.paused = paused;

    Ok(())
}

/// Function to replace the allowlist merkle root.
/// Proofs built for the previous root stop working, but addresses that
/// already claimed stay claimed.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - Fails to log `SetMerkleRoot` event.
#[receive(
    contract = "NftDrop",
    name = "setMerkleRoot",
    parameter = "Hash256",
    mutable,
    enable_logger
)]
fn set_merkle_root<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let merkle_root: Hash256 = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    state.ownership.ensure_owner(&ctx.sender())?;

    logger.log(&NftDropEvent::SetMerkleRoot(&merkle_root))?;
    state.config.merkle_root = merkle_root;

    Ok(())
}

/// Function to hand the contract over to another account.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the owner;
/// - Fails to log `OwnershipTransferred` event.
#[receive(
    contract = "NftDrop",
    name = "transferOwnership",
    parameter = "AccountAddress",
    mutable,
    enable_logger
)]
fn transfer_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let owner: AccountAddress = ctx.parameter_cursor().get()?;
    let state = host.state_mut();
    let previous = state.ownership.transfer(&ctx.sender(), owner)?;

    logger.log(&NftDropEvent::OwnershipTransferred { previous, owner })?;

    Ok(())
}

/// Function to pay the whole contract balance out to the owner.
/// Does nothing if the balance is empty.
///
/// It rejects if:
/// - Sender is not the owner;
/// - Fails to log `Withdraw` event;
/// - The transfer fails.
#[receive(contract = "NftDrop", name = "withdraw", mutable, enable_logger)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let ownership = host.state().ownership;
    ownership.ensure_owner(&ctx.sender())?;

    let amount = host.self_balance();
    if amount == Amount::zero() {
        return Ok(());
    }

    let to = ownership.owner();
    logger.log(&NftDropEvent::Withdraw { to, amount })?;
    host.invoke_transfer(&to, amount)
        .map_err(CustomContractError::from)?;

    Ok(())
}

#[receive(contract = "NftDrop", name = "name", return_value = "String")]
fn view_name<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().config.name.clone())
}

#[receive(contract = "NftDrop", name = "symbol", return_value = "String")]
fn view_symbol<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().config.symbol.clone())
}

#[receive(contract = "NftDrop", name = "owner", return_value = "AccountAddress")]
fn view_owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AccountAddress> {
    Ok(host.state().ownership.owner())
}

#[receive(contract = "NftDrop", name = "getCost", return_value = "Amount")]
fn get_cost<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    Ok(host.state().config.cost)
}

#[receive(contract = "NftDrop", name = "getMaxSupply", return_value = "u32")]
fn get_max_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().config.max_supply)
}

#[receive(contract = "NftDrop", name = "getMaxMintAmount", return_value = "u32")]
fn get_max_mint_amount<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().config.max_mint_amount)
}

#[receive(contract = "NftDrop", name = "getUriPrefix", return_value = "String")]
fn get_uri_prefix<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().config.uri_prefix.clone())
}

#[receive(contract = "NftDrop", name = "getUriSuffix", return_value = "String")]
fn get_uri_suffix<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().config.uri_suffix.clone())
}

#[receive(contract = "NftDrop", name = "isPaused", return_value = "bool")]
fn is_paused<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().config.paused)
}

#[receive(contract = "NftDrop", name = "merkleRoot", return_value = "Hash256")]
fn merkle_root<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Hash256> {
    Ok(host.state().config.merkle_root)
}

#[receive(contract = "NftDrop", name = "totalSupply", return_value = "u32")]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().total_supply)
}

/// Number of tokens held by an address.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "NftDrop",
    name = "balanceOf",
    parameter = "Address",
    return_value = "u64"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let holder: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().balance_of(&holder))
}

/// Token IDs held by an address, in the order they were received. An address
/// without tokens gets an empty list.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "NftDrop",
    name = "walletOfOwner",
    parameter = "Address",
    return_value = "Vec<ContractTokenId>"
)]
fn wallet_of_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<ContractTokenId>> {
    let holder: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().ids_of(&holder))
}

/// Check if an address already used its allowlist mint.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "NftDrop",
    name = "isClaimed",
    parameter = "Address",
    return_value = "bool"
)]
fn is_claimed<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let claimant: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().is_claimed(&claimant))
}

/// Metadata URL of an issued token: the prefix, the decimal token ID and the
/// suffix. Empty while no prefix is configured.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - The token ID has not been issued.
#[receive(
    contract = "NftDrop",
    name = "tokenURI",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token_uri(&token_id)
}

/// CIS-2 style metadata query for a list of token IDs.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Any of the token IDs has not been issued.
#[receive(
    contract = "NftDrop",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    let state = host.state();

    let mut response = Vec::with_capacity(params.queries.len());
    for token_id in params.queries {
        response.push(MetadataUrl {
            url: state.token_uri(&token_id)?,
            hash: None,
        });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0; 32]);
    const ACCOUNT_1: AccountAddress = AccountAddress([1; 32]);
    const ACCOUNT_2: AccountAddress = AccountAddress([2; 32]);
    const ADDRESS_OWNER: Address = Address::Account(OWNER);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ADDRESS_2: Address = Address::Account(ACCOUNT_2);

    /// 0.069 CCD
    fn cost() -> Amount {
        Amount::from_micro_ccd(69_000)
    }

    fn price_of(quantity: u64) -> Amount {
        Amount::from_micro_ccd(69_000 * quantity)
    }

    fn default_params() -> InitParams {
        InitParams {
            name: "NFFeet".into(),
            symbol: "Feet".into(),
            uri_prefix: "ipfs://QmdsHvfVX3EzXAzQMq7GYpGcaVSKm8YzqbBXmaDUwK3jUC/".into(),
            uri_suffix: ".json".into(),
            cost: cost(),
            max_supply: 6969,
            max_mint_amount: 15,
            paused: false,
            merkle_root: [0; 32],
        }
    }

    fn new_host_with(params: InitParams) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = contract_init(&ctx, &mut state_builder)
            .expect_report("Failed during init_NftDrop");

        TestHost::new(state, state_builder)
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        new_host_with(default_params())
    }

    fn call_mint(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        quantity: u32,
        amount: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&quantity);
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        mint(&ctx, host, amount, &mut logger)
    }

    fn call_white_list_mint(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        proof: Vec<Hash256>,
        quantity: u32,
        amount: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhiteListMintParams { proof, quantity });
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        white_list_mint(&ctx, host, amount, &mut logger)
    }

    fn call_zero_cost_mint(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        quantity: u32,
        to: Address,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&ZeroCostMintParams { quantity, to });
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        zero_cost_mint(&ctx, host, &mut logger)
    }

    fn call_transfer(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        token_id: u32,
        from: Address,
        to: AccountAddress,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU32(token_id),
            amount: TokenAmountU8(1),
            from,
            to: Receiver::from_account(to),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        transfer(&ctx, host, &mut logger)
    }

    fn call_set_pause(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        paused: bool,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&paused);
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        set_pause(&ctx, host, &mut logger)
    }

    fn call_set_merkle_root(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        root: Hash256,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&root);
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        set_merkle_root(&ctx, host, &mut logger)
    }

    fn call_token_uri(
        host: &TestHost<State<TestStateApi>>,
        token_id: u32,
    ) -> ContractResult<String> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenIdU32(token_id));
        ctx.set_parameter(&bytes);
        token_uri(&ctx, host)
    }

    /// Everything observable about the ledger for the given holders.
    #[derive(Debug, PartialEq)]
    struct Snapshot {
        config: Config,
        owner: AccountAddress,
        total_supply: u32,
        wallets: Vec<Vec<ContractTokenId>>,
        claimed: Vec<bool>,
    }

    fn snapshot(host: &TestHost<State<TestStateApi>>, holders: &[Address]) -> Snapshot {
        let state = host.state();
        Snapshot {
            config: state.config.clone(),
            owner: state.ownership.owner(),
            total_supply: state.total_supply,
            wallets: holders.iter().map(|holder| state.ids_of(holder)).collect(),
            claimed: holders.iter().map(|holder| state.is_claimed(holder)).collect(),
        }
    }

    /// Allowlist containing only `ADDRESS_1` and one other address, and the
    /// proof for `ADDRESS_1`.
    fn allowlist_of_address_1() -> (Hash256, Vec<Hash256>) {
        let leaves = [
            hash_leaf(&ADDRESS_1),
            hash_leaf(&Address::Account(AccountAddress([9; 32]))),
        ];
        let proof = build_proof(&leaves, 0).expect_report("Index is in range");
        (compute_root(&leaves), proof)
    }

    #[concordium_test]
    fn test_init() {
        let host = new_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(view_name(&ctx, &host), Ok("NFFeet".into()));
        claim_eq!(view_symbol(&ctx, &host), Ok("Feet".into()));
        claim_eq!(view_owner(&ctx, &host), Ok(OWNER));
        claim_eq!(get_cost(&ctx, &host), Ok(Amount::from_micro_ccd(69_000)));
        claim_eq!(get_max_supply(&ctx, &host), Ok(6969));
        claim_eq!(get_max_mint_amount(&ctx, &host), Ok(15));
        claim_eq!(
            get_uri_prefix(&ctx, &host),
            Ok("ipfs://QmdsHvfVX3EzXAzQMq7GYpGcaVSKm8YzqbBXmaDUwK3jUC/".into())
        );
        claim_eq!(get_uri_suffix(&ctx, &host), Ok(".json".into()));
        claim_eq!(is_paused(&ctx, &host), Ok(false));
        claim_eq!(merkle_root(&ctx, &host), Ok([0; 32]));
        claim_eq!(total_supply(&ctx, &host), Ok(0));

        // The initial pause state comes from the parameters
        let host = new_host_with(InitParams {
            paused: true,
            ..default_params()
        });
        claim_eq!(is_paused(&ctx, &host), Ok(true));
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = new_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&5u32);
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let result = mint(&ctx, &mut host, price_of(5), &mut logger);
        claim_eq!(result, Ok(()));

        let state = host.state();
        claim_eq!(state.total_supply, 5);
        claim_eq!(state.balance_of(&ADDRESS_1), 5);
        claim_eq!(
            state.ids_of(&ADDRESS_1),
            (1..=5).map(TokenIdU32).collect::<Vec<_>>()
        );

        // Mint and metadata events for every token
        claim_eq!(logger.logs.len(), 10);
        claim!(logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
            token_id: TokenIdU32(3),
            amount: TokenAmountU8(1),
            owner: ADDRESS_1,
        }))));
        claim!(logger
            .logs
            .contains(&to_bytes(&token_metadata_event(
                TokenIdU32(3),
                "ipfs://QmdsHvfVX3EzXAzQMq7GYpGcaVSKm8YzqbBXmaDUwK3jUC/3.json".into()
            ))));

        // Next mint continues the sequence
        claim_eq!(call_mint(&mut host, ADDRESS_2, 1, cost()), Ok(()));
        claim_eq!(host.state().ids_of(&ADDRESS_2), vec![TokenIdU32(6)]);
        claim_eq!(host.state().total_supply, 6);
    }

    #[concordium_test]
    fn test_mint_overpayment_is_kept() {
        let mut host = new_host();

        claim_eq!(
            call_mint(&mut host, ADDRESS_1, 1, Amount::from_ccd(1)),
            Ok(())
        );
        claim_eq!(host.state().balance_of(&ADDRESS_1), 1);
    }

    #[concordium_test]
    fn test_mint_invalid_quantity() {
        let mut host = new_host();
        let before = snapshot(&host, &[ADDRESS_1]);

        claim_eq!(
            call_mint(&mut host, ADDRESS_1, 16, price_of(16)),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(
            call_mint(&mut host, ADDRESS_1, 0, price_of(16)),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1]), before);
    }

    #[concordium_test]
    fn test_mint_insufficient_funds() {
        let mut host = new_host();
        let before = snapshot(&host, &[ADDRESS_1]);

        claim_eq!(
            call_mint(&mut host, ADDRESS_1, 5, Amount::from_micro_ccd(10_000)),
            Err(CustomContractError::InsufficientFunds.into())
        );
        claim_eq!(
            call_mint(&mut host, ADDRESS_1, 2, Amount::from_micro_ccd(137_999)),
            Err(CustomContractError::InsufficientFunds.into())
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1]), before);
    }

    #[concordium_test]
    fn test_mint_capacity() {
        let mut host = new_host_with(InitParams {
            max_supply: 10,
            max_mint_amount: 6,
            ..default_params()
        });

        claim_eq!(call_mint(&mut host, ADDRESS_1, 6, price_of(6)), Ok(()));
        let before = snapshot(&host, &[ADDRESS_1, ADDRESS_2]);
        claim_eq!(
            call_mint(&mut host, ADDRESS_2, 5, price_of(5)),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1, ADDRESS_2]), before);

        claim_eq!(call_mint(&mut host, ADDRESS_2, 4, price_of(4)), Ok(()));
        claim_eq!(host.state().total_supply, 10);

        // Nothing is left, whichever path is used
        claim_eq!(
            call_mint(&mut host, ADDRESS_2, 1, cost()),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(
            call_zero_cost_mint(&mut host, ADDRESS_OWNER, 1, ADDRESS_2),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(host.state().total_supply, 10);
    }

    #[concordium_test]
    fn test_white_list_mint() {
        let mut host = new_host();
        let (root, proof) = allowlist_of_address_1();
        claim_eq!(call_set_merkle_root(&mut host, ADDRESS_OWNER, root), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhiteListMintParams {
            proof: proof.clone(),
            quantity: 1,
        });
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let result = white_list_mint(&ctx, &mut host, cost(), &mut logger);
        claim_eq!(result, Ok(()));
        claim!(logger
            .logs
            .contains(&to_bytes(&NftDropEvent::Claimed(ADDRESS_1))));
        claim_eq!(host.state().balance_of(&ADDRESS_1), 1);
        claim_eq!(host.state().total_supply, 1);
        claim!(host.state().is_claimed(&ADDRESS_1));

        // Second claim with the same proof
        let before = snapshot(&host, &[ADDRESS_1, ADDRESS_2]);
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, proof.clone(), 1, cost()),
            Err(CustomContractError::AlreadyClaimed.into())
        );
        // Someone outside the allowlist
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_2, proof, 1, cost()),
            Err(CustomContractError::InvalidProof.into())
        );
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_2, Vec::new(), 1, cost()),
            Err(CustomContractError::InvalidProof.into())
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1, ADDRESS_2]), before);
    }

    #[concordium_test]
    fn test_white_list_mint_failure_keeps_claim() {
        let mut host = new_host();
        let (root, proof) = allowlist_of_address_1();
        claim_eq!(call_set_merkle_root(&mut host, ADDRESS_OWNER, root), Ok(()));
        let before = snapshot(&host, &[ADDRESS_1]);

        claim_eq!(
            call_white_list_mint(
                &mut host,
                ADDRESS_1,
                proof.clone(),
                1,
                Amount::from_micro_ccd(10_000)
            ),
            Err(CustomContractError::InsufficientFunds.into())
        );
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, proof.clone(), 16, price_of(16)),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1]), before);

        // The claim is still available
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, proof, 3, price_of(3)),
            Ok(())
        );
        claim_eq!(host.state().balance_of(&ADDRESS_1), 3);
    }

    #[concordium_test]
    fn test_white_list_root_rotation() {
        let mut host = new_host();
        let (root, proof) = allowlist_of_address_1();
        claim_eq!(call_set_merkle_root(&mut host, ADDRESS_OWNER, root), Ok(()));
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, proof.clone(), 1, cost()),
            Ok(())
        );

        let leaves = [hash_leaf(&ADDRESS_1), hash_leaf(&ADDRESS_2)];
        claim_eq!(
            call_set_merkle_root(&mut host, ADDRESS_OWNER, compute_root(&leaves)),
            Ok(())
        );

        // Stale proof
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, proof, 1, cost()),
            Err(CustomContractError::InvalidProof.into())
        );
        // Valid proof against the new root, but already claimed
        let new_proof = build_proof(&leaves, 0).expect_report("Index is in range");
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, new_proof, 1, cost()),
            Err(CustomContractError::AlreadyClaimed.into())
        );
        // Newly listed address
        let new_proof = build_proof(&leaves, 1).expect_report("Index is in range");
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_2, new_proof, 1, cost()),
            Ok(())
        );
        claim_eq!(host.state().total_supply, 2);
    }

    #[concordium_test]
    fn test_zero_cost_mint() {
        let mut host = new_host();

        claim_eq!(
            call_zero_cost_mint(&mut host, ADDRESS_OWNER, 2, ADDRESS_1),
            Ok(())
        );
        claim_eq!(host.state().balance_of(&ADDRESS_1), 2);
        claim_eq!(host.state().balance_of(&ADDRESS_OWNER), 0);
        claim_eq!(host.state().total_supply, 2);

        let before = snapshot(&host, &[ADDRESS_1, ADDRESS_2]);
        claim_eq!(
            call_zero_cost_mint(&mut host, ADDRESS_1, 1, ADDRESS_2),
            Err(CustomContractError::Unauthorized.into())
        );
        claim_eq!(
            call_zero_cost_mint(&mut host, ADDRESS_OWNER, 16, ADDRESS_2),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1, ADDRESS_2]), before);
    }

    #[concordium_test]
    fn test_paused() {
        let mut host = new_host();
        let (root, proof) = allowlist_of_address_1();
        claim_eq!(call_set_merkle_root(&mut host, ADDRESS_OWNER, root), Ok(()));
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));

        claim_eq!(
            call_set_pause(&mut host, ADDRESS_1, true),
            Err(CustomContractError::Unauthorized.into())
        );
        claim_eq!(call_set_pause(&mut host, ADDRESS_OWNER, true), Ok(()));
        let before = snapshot(&host, &[ADDRESS_OWNER, ADDRESS_1, ADDRESS_2]);

        claim_eq!(
            call_mint(&mut host, ADDRESS_1, 1, cost()),
            Err(CustomContractError::ContractPaused.into())
        );
        claim_eq!(
            call_white_list_mint(&mut host, ADDRESS_1, proof.clone(), 1, cost()),
            Err(CustomContractError::ContractPaused.into())
        );
        claim_eq!(
            call_zero_cost_mint(&mut host, ADDRESS_OWNER, 1, ADDRESS_2),
            Err(CustomContractError::ContractPaused.into())
        );
        claim_eq!(
            call_transfer(&mut host, ADDRESS_1, 1, ADDRESS_1, ACCOUNT_2),
            Err(CustomContractError::ContractPaused.into())
        );
        claim_eq!(
            snapshot(&host, &[ADDRESS_OWNER, ADDRESS_1, ADDRESS_2]),
            before
        );

        // Owner setters keep working while paused
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&Amount::from_micro_ccd(207_000));
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(set_cost(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(call_set_pause(&mut host, ADDRESS_OWNER, false), Ok(()));
        claim_eq!(
            call_white_list_mint(
                &mut host,
                ADDRESS_1,
                proof,
                1,
                Amount::from_micro_ccd(207_000)
            ),
            Ok(())
        );
        claim_eq!(host.state().balance_of(&ADDRESS_1), 2);
    }

    #[concordium_test]
    fn test_setters() {
        let mut host = new_host();
        let mut logger = TestLogger::init();

        let bytes = to_bytes(&Amount::from_micro_ccd(50_000));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(set_cost(&ctx, &mut host, &mut logger), Ok(()));

        let bytes = to_bytes(&5u32);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(set_max_mint_amount(&ctx, &mut host, &mut logger), Ok(()));

        let bytes = to_bytes(&String::from("ipfs://{CID}/"));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(set_uri_prefix(&ctx, &mut host, &mut logger), Ok(()));

        let bytes = to_bytes(&String::from(".png"));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(set_uri_suffix(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(call_set_merkle_root(&mut host, ADDRESS_OWNER, [7; 32]), Ok(()));
        claim_eq!(call_set_pause(&mut host, ADDRESS_OWNER, true), Ok(()));

        claim!(logger
            .logs
            .contains(&to_bytes(&NftDropEvent::SetCost(Amount::from_micro_ccd(50_000)))));
        claim!(logger
            .logs
            .contains(&to_bytes(&NftDropEvent::SetUriSuffix(&String::from(".png")))));

        let config = &host.state().config;
        claim_eq!(config.cost, Amount::from_micro_ccd(50_000));
        claim_eq!(config.max_mint_amount, 5);
        claim_eq!(config.uri_prefix, "ipfs://{CID}/");
        claim_eq!(config.uri_suffix, ".png");
        claim_eq!(config.merkle_root, [7; 32]);
        claim!(config.paused);
    }

    #[concordium_test]
    fn test_setters_owner_only() {
        let mut host = new_host();
        let mut logger = TestLogger::init();
        let before = snapshot(&host, &[]);

        let bytes = to_bytes(&Amount::from_micro_ccd(1));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        claim_eq!(
            set_cost(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );

        let bytes = to_bytes(&100u32);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        claim_eq!(
            set_max_mint_amount(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );

        let bytes = to_bytes(&String::from("ipfs://{CID}/"));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        claim_eq!(
            set_uri_prefix(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );
        claim_eq!(
            set_uri_suffix(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );

        let bytes = to_bytes(&ACCOUNT_1);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        claim_eq!(
            transfer_ownership(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );

        claim_eq!(
            call_set_merkle_root(&mut host, ADDRESS_1, [7; 32]),
            Err(CustomContractError::Unauthorized.into())
        );
        claim_eq!(
            call_set_pause(&mut host, ADDRESS_2, true),
            Err(CustomContractError::Unauthorized.into())
        );

        claim!(logger.logs.is_empty());
        claim_eq!(snapshot(&host, &[]), before);
    }

    #[concordium_test]
    fn test_withdraw() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));
        host.set_self_balance(cost());

        let mut logger = TestLogger::init();
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        claim_eq!(
            withdraw(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );
        claim!(host.get_transfers().is_empty());
        claim_eq!(host.self_balance(), cost());

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER);
        claim_eq!(withdraw(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.get_transfers(), vec![(OWNER, cost())]);
        claim_eq!(host.self_balance(), Amount::zero());
        claim!(logger.logs.contains(&to_bytes(&NftDropEvent::Withdraw {
            to: OWNER,
            amount: cost(),
        })));

        // Nothing left to pay out
        claim_eq!(withdraw(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.get_transfers().len(), 1);
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = new_host();
        host.set_self_balance(cost());
        let mut logger = TestLogger::init();

        let bytes = to_bytes(&ACCOUNT_1);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(transfer_ownership(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.state().ownership.owner(), ACCOUNT_1);

        // The previous owner lost its rights
        claim_eq!(
            call_set_pause(&mut host, ADDRESS_OWNER, true),
            Err(CustomContractError::Unauthorized.into())
        );
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER);
        claim_eq!(
            withdraw(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Unauthorized.into())
        );

        // The new owner gets the funds
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        claim_eq!(withdraw(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(host.get_transfers(), vec![(ACCOUNT_1, cost())]);
    }

    #[concordium_test]
    fn test_token_uri() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&String::from("ipfs://{CID}/"));
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(set_uri_prefix(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(call_token_uri(&host, 1), Ok("ipfs://{CID}/1.json".into()));
        claim_eq!(
            call_token_uri(&host, 2),
            Err(CustomContractError::NotFound.into())
        );
        claim_eq!(
            call_token_uri(&host, 0),
            Err(CustomContractError::NotFound.into())
        );

        // Metadata not published yet
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&String::new());
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(set_uri_prefix(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(call_token_uri(&host, 1), Ok(String::new()));
    }

    #[concordium_test]
    fn test_token_metadata() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 2, price_of(2)), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenMetadataQueryParams {
            queries: vec![TokenIdU32(2), TokenIdU32(1)],
        });
        ctx.set_parameter(&bytes);
        let result = token_metadata(&ctx, &host).expect_report("Failed to query metadata");
        let urls: Vec<&str> = result.0.iter().map(|metadata| metadata.url.as_str()).collect();
        claim_eq!(
            urls,
            vec![
                "ipfs://QmdsHvfVX3EzXAzQMq7GYpGcaVSKm8YzqbBXmaDUwK3jUC/2.json",
                "ipfs://QmdsHvfVX3EzXAzQMq7GYpGcaVSKm8YzqbBXmaDUwK3jUC/1.json",
            ]
        );
        claim!(result.0.iter().all(|metadata| metadata.hash.is_none()));

        let bytes = to_bytes(&TokenMetadataQueryParams {
            queries: vec![TokenIdU32(1), TokenIdU32(3)],
        });
        ctx.set_parameter(&bytes);
        claim_eq!(
            token_metadata(&ctx, &host).map(|_| ()),
            Err(CustomContractError::NotFound.into())
        );
    }

    #[concordium_test]
    fn test_wallet_and_balance_queries() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 5, price_of(5)), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&ADDRESS_1);
        ctx.set_parameter(&bytes);
        claim_eq!(balance_of(&ctx, &host), Ok(5));
        claim_eq!(
            wallet_of_owner(&ctx, &host),
            Ok((1..=5).map(TokenIdU32).collect::<Vec<_>>())
        );
        claim_eq!(is_claimed(&ctx, &host), Ok(false));

        let bytes = to_bytes(&ADDRESS_2);
        ctx.set_parameter(&bytes);
        claim_eq!(balance_of(&ctx, &host), Ok(0));
        claim_eq!(wallet_of_owner(&ctx, &host), Ok(Vec::new()));
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 3, price_of(3)), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU32(2),
            amount: TokenAmountU8(1),
            from: ADDRESS_1,
            to: Receiver::from_account(ACCOUNT_2),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(transfer(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(
            host.state().ids_of(&ADDRESS_1),
            vec![TokenIdU32(1), TokenIdU32(3)]
        );
        claim_eq!(host.state().ids_of(&ADDRESS_2), vec![TokenIdU32(2)]);
        claim_eq!(host.state().total_supply, 3);
        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU32(2),
                amount: TokenAmountU8(1),
                from: ADDRESS_1,
                to: ADDRESS_2,
            }))]
        );

        // New tokens do not reuse the moved identifier
        claim_eq!(call_mint(&mut host, ADDRESS_2, 1, cost()), Ok(()));
        claim_eq!(
            host.state().ids_of(&ADDRESS_2),
            vec![TokenIdU32(2), TokenIdU32(4)]
        );
    }

    #[concordium_test]
    fn test_transfer_rejected() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));
        let before = snapshot(&host, &[ADDRESS_1, ADDRESS_2]);

        // Sender is not the `from` address
        claim_eq!(
            call_transfer(&mut host, ADDRESS_2, 1, ADDRESS_1, ACCOUNT_2),
            Err(ContractError::Unauthorized)
        );
        // `from` does not hold the token
        claim_eq!(
            call_transfer(&mut host, ADDRESS_2, 1, ADDRESS_2, ACCOUNT_1),
            Err(ContractError::InsufficientFunds)
        );
        // Unknown token
        claim_eq!(
            call_transfer(&mut host, ADDRESS_1, 2, ADDRESS_1, ACCOUNT_2),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(snapshot(&host, &[ADDRESS_1, ADDRESS_2]), before);
    }

    #[concordium_test]
    fn test_init_rejects_mint_ceiling_above_limit() {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&InitParams {
            max_mint_amount: MAX_MINT_AMOUNT_LIMIT + 1,
            ..default_params()
        });
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let result = contract_init(&ctx, &mut state_builder);
        claim_eq!(
            result.map(|_| ()).map_err(|reject| reject.error_code),
            Err(Reject::from(CustomContractError::InvalidQuantity).error_code)
        );

        let host = new_host_with(InitParams {
            max_mint_amount: MAX_MINT_AMOUNT_LIMIT,
            ..default_params()
        });
        claim_eq!(host.state().config.max_mint_amount, MAX_MINT_AMOUNT_LIMIT);
    }

    #[concordium_test]
    fn test_max_mint_amount_fits_log_limit() {
        let mut host = new_host();
        let (root, proof) = allowlist_of_address_1();
        claim_eq!(call_set_merkle_root(&mut host, ADDRESS_OWNER, root), Ok(()));

        let mut logger = TestLogger::init();
        let bytes = to_bytes(&(MAX_MINT_AMOUNT_LIMIT + 1));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(
            set_max_mint_amount(&ctx, &mut host, &mut logger),
            Err(CustomContractError::InvalidQuantity.into())
        );
        claim_eq!(host.state().config.max_mint_amount, 15);

        let bytes = to_bytes(&MAX_MINT_AMOUNT_LIMIT);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_OWNER).set_parameter(&bytes);
        claim_eq!(set_max_mint_amount(&ctx, &mut host, &mut logger), Ok(()));

        // A full allowlist mint stays within the log limit
        let quantity = MAX_MINT_AMOUNT_LIMIT;
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhiteListMintParams { proof, quantity });
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let result = white_list_mint(&ctx, &mut host, price_of(quantity.into()), &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs.len(), 63);

        claim_eq!(
            call_mint(&mut host, ADDRESS_2, quantity, price_of(quantity.into())),
            Ok(())
        );
        claim_eq!(host.state().balance_of(&ADDRESS_1), 31);
        claim_eq!(host.state().balance_of(&ADDRESS_2), 31);
        claim_eq!(host.state().total_supply, 62);
    }

    #[concordium_test]
    fn test_transfer_zero_amount() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));
        let before = snapshot(&host, &[ADDRESS_1, ADDRESS_2]);

        let mut ctx = TestReceiveContext::empty();
        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU32(1),
            amount: TokenAmountU8(0),
            from: ADDRESS_1,
            to: Receiver::from_account(ACCOUNT_2),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(transfer(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(snapshot(&host, &[ADDRESS_1, ADDRESS_2]), before);
        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU32(1),
                amount: TokenAmountU8(0),
                from: ADDRESS_1,
                to: ADDRESS_2,
            }))]
        );
    }

    const RECEIVER: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };

    fn transfer_to_receiver(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU32(1),
            amount: TokenAmountU8(1),
            from: ADDRESS_1,
            to: Receiver::from_contract(
                RECEIVER,
                OwnedEntrypointName::new_unchecked("onReceivingCIS2".into()),
            ),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        transfer(&ctx, host, logger)
    }

    #[concordium_test]
    fn test_transfer_to_contract() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));

        // Accepts only the notification for this transfer
        host.setup_mock_entrypoint(
            RECEIVER,
            OwnedEntrypointName::new_unchecked("onReceivingCIS2".into()),
            MockFn::new(|parameter, _amount, _balance, _state| {
                let params =
                    OnReceivingCis2Params::<ContractTokenId, ContractTokenAmount>::deserial(
                        &mut Cursor::new(parameter),
                    )
                    .map_err(|_| CallContractError::Trap)?;
                if params.token_id != TokenIdU32(1)
                    || params.amount != TokenAmountU8(1)
                    || params.from != ADDRESS_1
                {
                    return Err(CallContractError::Trap);
                }
                Ok((false, Some(())))
            }),
        );

        let mut logger = TestLogger::init();
        claim_eq!(transfer_to_receiver(&mut host, &mut logger), Ok(()));
        claim_eq!(host.state().ids_of(&ADDRESS_1), Vec::new());
        claim_eq!(
            host.state().ids_of(&Address::Contract(RECEIVER)),
            vec![TokenIdU32(1)]
        );
        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU32(1),
                amount: TokenAmountU8(1),
                from: ADDRESS_1,
                to: Address::Contract(RECEIVER),
            }))]
        );
    }

    #[concordium_test]
    fn test_transfer_to_rejecting_contract() {
        let mut host = new_host();
        claim_eq!(call_mint(&mut host, ADDRESS_1, 1, cost()), Ok(()));

        host.setup_mock_entrypoint(
            RECEIVER,
            OwnedEntrypointName::new_unchecked("onReceivingCIS2".into()),
            MockFn::new(
                |_parameter, _amount, _balance, _state| -> CallContractResult<()> {
                    Err(CallContractError::Trap)
                },
            ),
        );

        let mut logger = TestLogger::init();
        claim_eq!(
            transfer_to_receiver(&mut host, &mut logger),
            Err(CustomContractError::InvokeContractError.into())
        );
    }
}
