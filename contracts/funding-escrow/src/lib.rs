#![no_std]

mod contract;
mod storage;
mod types;

pub use contract::{FundingEscrow, FundingEscrowClient};
pub use types::{DepositLog, EscrowConfig, EscrowError, EscrowInitLog};

#[cfg(test)]
mod test;
