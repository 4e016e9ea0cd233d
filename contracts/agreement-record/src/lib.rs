#![no_std]

mod contract;
mod storage;
mod terms;
mod types;
mod utils;

pub use contract::{AgreementRecord, AgreementRecordClient};
pub use types::{
    ActivatedLog, AgreementError, Borrower, ContractDetails, DeployedLog, FinancialTerms, Lender,
    Ownership, TermsAcceptedLog,
};
pub use utils::{ZERO_ACCOUNT, ZERO_CONTRACT};
