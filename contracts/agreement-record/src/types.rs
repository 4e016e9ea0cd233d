use soroban_sdk::{contracterror, contracttype, Address, String};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Borrower {
    pub wallet_address: Address,
    pub name: String,
    pub company: String,
    pub role: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Lender {
    pub wallet_address: Address,
    pub name: String,
    pub amount: i128,
    pub currency: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Ownership {
    pub owner: String,
    /// Whole percent, 0 through 100.
    pub ownership_percentage: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinancialTerms {
    pub amount: i128,
    pub shoe_production_target: u32,
    pub price_min: i128,
    pub price_max: i128,
    pub material: String,
}

/// Summary consumed by deployment and reporting tooling.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContractDetails {
    pub borrower_address: Address,
    pub lender_address: Address,
    pub active: bool,
    pub loan_amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DeployedLog {
    pub owner: Address,
    pub borrower: Address,
    pub lender: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ActivatedLog {
    pub owner: Address,
    pub activated_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TermsAcceptedLog {
    pub party: Address,
    pub timestamp: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracterror]
#[repr(u32)]
pub enum AgreementError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAddress = 3,
    Unauthorized = 4,
    AlreadyActive = 5,
    IndexOutOfBounds = 6,
}
