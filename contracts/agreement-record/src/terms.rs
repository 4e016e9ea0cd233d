//! Fixed agreement data written at `init`. Only the two wallet addresses
//! come from the caller.

use soroban_sdk::{vec, Address, Env, String, Vec};

use crate::types::{Borrower, FinancialTerms, Lender, Ownership};

pub const LOAN_AMOUNT: i128 = 63_000_000;

pub fn borrower(e: &Env, wallet_address: Address) -> Borrower {
    Borrower {
        wallet_address,
        name: String::from_str(e, "Cory K Washington"),
        company: String::from_str(
            e,
            "Nells Carpool and Transportation Services C-Corporation Franchise",
        ),
        role: String::from_str(e, "Owner"),
    }
}

pub fn lender(e: &Env, wallet_address: Address) -> Lender {
    Lender {
        wallet_address,
        name: String::from_str(e, "Investor"),
        amount: LOAN_AMOUNT,
        currency: String::from_str(e, "USD"),
    }
}

pub fn ownership(e: &Env) -> Ownership {
    Ownership {
        owner: String::from_str(e, "Cory K Washington (Geo)"),
        ownership_percentage: 100,
    }
}

pub fn financial_terms(e: &Env) -> FinancialTerms {
    FinancialTerms {
        amount: 6_300_000,
        shoe_production_target: 7,
        price_min: 200,
        price_max: 500,
        material: String::from_str(e, "Raw Italian material and cotton"),
    }
}

pub fn purposes(e: &Env) -> Vec<String> {
    vec![
        e,
        String::from_str(
            e,
            "Expand, develop, purchase new equipment and an app for Nells Carpool and Transportation Services",
        ),
        String::from_str(
            e,
            "Pay franchise fee for a nearby company (this food is to die for)",
        ),
        String::from_str(e, "Relaunch fashion brand 4-Ever-Drip in Italy"),
    ]
}
