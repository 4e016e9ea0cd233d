use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, token::TokenClient, Address, Env,
};

use crate::{
    storage::{extend_instance, DataKey},
    types::{DepositLog, EscrowConfig, EscrowError, EscrowInitLog},
};

#[contract]
pub struct FundingEscrow;

#[contractimpl]
impl FundingEscrow {
    /// Stores the escrow configuration and pulls `initial_deposit` of
    /// `token` from `owner` into the escrow.
    pub fn init(
        e: Env,
        owner: Address,
        deposit_address: Address,
        token: Address,
        ether_limit: i128,
        token_limit: i128,
        initial_deposit: i128,
    ) {
        if e.storage().instance().has(&DataKey::Config) {
            panic_with_error!(&e, EscrowError::AlreadyInitialized);
        }
        owner.require_auth();
        if initial_deposit < 0 {
            panic_with_error!(&e, EscrowError::InvalidAmount);
        }

        let config = EscrowConfig {
            owner: owner.clone(),
            deposit_address: deposit_address.clone(),
            token: token.clone(),
            ether_limit,
            token_limit,
        };
        e.storage().instance().set(&DataKey::Config, &config);
        extend_instance(&e);

        if initial_deposit > 0 {
            transfer_in(&e, &token, &owner, initial_deposit);
        }

        log!(&e, "escrow funded", owner, initial_deposit);

        e.events().publish(
            (symbol_short!("escrow"), symbol_short!("init")),
            EscrowInitLog {
                owner,
                deposit_address,
                token,
                ether_limit,
                token_limit,
                initial_deposit,
            },
        );
    }

    /// Accepts `amount` of the escrow token from anyone. The configured
    /// limits are not applied.
    pub fn deposit(e: Env, from: Address, amount: i128) {
        from.require_auth();
        let config = read_config_or_panic(&e);
        if amount <= 0 {
            panic_with_error!(&e, EscrowError::InvalidAmount);
        }
        transfer_in(&e, &config.token, &from, amount);
        extend_instance(&e);

        e.events().publish(
            (symbol_short!("escrow"), symbol_short!("deposit")),
            DepositLog { from, amount },
        );
    }

    pub fn owner(e: Env) -> Address {
        read_config_or_panic(&e).owner
    }

    pub fn deposit_address(e: Env) -> Address {
        read_config_or_panic(&e).deposit_address
    }

    pub fn token(e: Env) -> Address {
        read_config_or_panic(&e).token
    }

    pub fn ether_limit(e: Env) -> i128 {
        read_config_or_panic(&e).ether_limit
    }

    pub fn token_limit(e: Env) -> i128 {
        read_config_or_panic(&e).token_limit
    }

    pub fn config(e: Env) -> EscrowConfig {
        read_config_or_panic(&e)
    }

    /// Current holdings of the escrow in its token.
    pub fn balance(e: Env) -> i128 {
        let config = read_config_or_panic(&e);
        TokenClient::new(&e, &config.token).balance(&e.current_contract_address())
    }
}

fn transfer_in(e: &Env, token: &Address, from: &Address, amount: i128) {
    let client = TokenClient::new(e, token);
    client.transfer(from, &e.current_contract_address(), &amount);
}

fn read_config_or_panic(e: &Env) -> EscrowConfig {
    match e
        .storage()
        .instance()
        .get::<_, EscrowConfig>(&DataKey::Config)
    {
        Some(config) => config,
        None => panic_with_error!(e, EscrowError::NotInitialized),
    }
}
