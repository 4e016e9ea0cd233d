use soroban_sdk::{Address, Env, String};

/// Strkey of the ed25519 account whose public key is all zero bytes.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the contract whose id is all zero bytes.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn is_zero_address(e: &Env, addr: &Address) -> bool {
    let account = Address::from_string(&String::from_str(e, ZERO_ACCOUNT));
    let contract = Address::from_string(&String::from_str(e, ZERO_CONTRACT));
    *addr == account || *addr == contract
}
