use soroban_sdk::{contracterror, contracttype, Address};

/// Setup parameters, immutable once stored.
///
/// `ether_limit` and `token_limit` are recorded for off-chain tooling; no
/// entry point enforces them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EscrowConfig {
    pub owner: Address,
    pub deposit_address: Address,
    pub token: Address,
    pub ether_limit: i128,
    pub token_limit: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EscrowInitLog {
    pub owner: Address,
    pub deposit_address: Address,
    pub token: Address,
    pub ether_limit: i128,
    pub token_limit: i128,
    pub initial_deposit: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositLog {
    pub from: Address,
    pub amount: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracterror]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
}
