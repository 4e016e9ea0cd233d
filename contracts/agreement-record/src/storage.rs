use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::types::{Borrower, FinancialTerms, Lender, Ownership};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Agreement,
    Active,
}

/// Everything fixed at `init`. Only the activation flag lives outside it.
#[derive(Clone)]
#[contracttype]
pub struct AgreementState {
    pub contract_owner: Address,
    pub borrower: Borrower,
    pub lender: Lender,
    pub ownership: Ownership,
    pub financial_terms: FinancialTerms,
    pub purposes: Vec<String>,
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
