use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, Address, Env, String, Vec,
};

use crate::{
    storage::{extend_instance, AgreementState, DataKey},
    terms,
    types::{
        ActivatedLog, AgreementError, Borrower, ContractDetails, DeployedLog, FinancialTerms,
        Lender, Ownership, TermsAcceptedLog,
    },
    utils::is_zero_address,
};

#[contract]
pub struct AgreementRecord;

#[contractimpl]
impl AgreementRecord {
    /// Records the agreement between `borrower_address` and `lender_address`.
    ///
    /// `owner` signs the setup and becomes the only account allowed to
    /// activate the agreement. All other terms are fixed by the contract.
    pub fn init(e: Env, owner: Address, borrower_address: Address, lender_address: Address) {
        if e.storage().instance().has(&DataKey::Agreement) {
            panic_with_error!(&e, AgreementError::AlreadyInitialized);
        }
        owner.require_auth();

        if is_zero_address(&e, &borrower_address) {
            panic_with_error!(&e, AgreementError::InvalidAddress);
        }
        if is_zero_address(&e, &lender_address) {
            panic_with_error!(&e, AgreementError::InvalidAddress);
        }

        let state = AgreementState {
            contract_owner: owner.clone(),
            borrower: terms::borrower(&e, borrower_address.clone()),
            lender: terms::lender(&e, lender_address.clone()),
            ownership: terms::ownership(&e),
            financial_terms: terms::financial_terms(&e),
            purposes: terms::purposes(&e),
        };

        e.storage().instance().set(&DataKey::Agreement, &state);
        e.storage().instance().set(&DataKey::Active, &false);
        extend_instance(&e);

        log!(&e, "agreement recorded", borrower_address, lender_address);

        e.events().publish(
            (symbol_short!("agreement"), symbol_short!("deployed")),
            DeployedLog {
                owner,
                borrower: borrower_address,
                lender: lender_address,
            },
        );
    }

    /// One-way switch from inactive to active, owner only.
    pub fn activate_contract(e: Env, caller: Address) {
        caller.require_auth();
        let state = read_state_or_panic(&e);
        if caller != state.contract_owner {
            panic_with_error!(&e, AgreementError::Unauthorized);
        }
        if read_active(&e) {
            panic_with_error!(&e, AgreementError::AlreadyActive);
        }

        e.storage().instance().set(&DataKey::Active, &true);
        extend_instance(&e);

        log!(&e, "agreement activated", caller);

        e.events().publish(
            (symbol_short!("agreement"), symbol_short!("activated")),
            ActivatedLog {
                owner: caller,
                activated_at: e.ledger().timestamp(),
            },
        );
    }

    /// Announces that `party` accepts the terms. Acceptance is not stored,
    /// so either party may accept any number of times, active or not.
    pub fn accept_terms(e: Env, party: Address) {
        party.require_auth();
        let state = read_state_or_panic(&e);
        if party != state.borrower.wallet_address && party != state.lender.wallet_address {
            panic_with_error!(&e, AgreementError::Unauthorized);
        }
        extend_instance(&e);

        e.events().publish(
            (symbol_short!("agreement"), symbol_short!("accepted")),
            TermsAcceptedLog {
                party,
                timestamp: e.ledger().timestamp(),
            },
        );
    }

    pub fn get_purpose(e: Env, index: u32) -> String {
        let state = read_state_or_panic(&e);
        match state.purposes.get(index) {
            Some(purpose) => purpose,
            None => panic_with_error!(&e, AgreementError::IndexOutOfBounds),
        }
    }

    pub fn get_purposes_count(e: Env) -> u32 {
        read_state_or_panic(&e).purposes.len()
    }

    pub fn get_contract_details(e: Env) -> ContractDetails {
        let state = read_state_or_panic(&e);
        ContractDetails {
            borrower_address: state.borrower.wallet_address,
            lender_address: state.lender.wallet_address,
            active: read_active(&e),
            loan_amount: state.lender.amount,
        }
    }

    pub fn contract_owner(e: Env) -> Address {
        read_state_or_panic(&e).contract_owner
    }

    pub fn borrower(e: Env) -> Borrower {
        read_state_or_panic(&e).borrower
    }

    pub fn lender(e: Env) -> Lender {
        read_state_or_panic(&e).lender
    }

    pub fn ownership(e: Env) -> Ownership {
        read_state_or_panic(&e).ownership
    }

    pub fn financial_terms(e: Env) -> FinancialTerms {
        read_state_or_panic(&e).financial_terms
    }

    pub fn purposes(e: Env) -> Vec<String> {
        read_state_or_panic(&e).purposes
    }

    pub fn is_active(e: Env) -> bool {
        read_state_or_panic(&e);
        read_active(&e)
    }
}

fn read_state_or_panic(e: &Env) -> AgreementState {
    match e
        .storage()
        .instance()
        .get::<_, AgreementState>(&DataKey::Agreement)
    {
        Some(state) => state,
        None => panic_with_error!(e, AgreementError::NotInitialized),
    }
}

fn read_active(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&DataKey::Active)
        .unwrap_or(false)
}
