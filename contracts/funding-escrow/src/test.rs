extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::{
    DepositLog, EscrowConfig, EscrowError, EscrowInitLog, FundingEscrow, FundingEscrowClient,
};

/// One whole unit of a 7-decimal Stellar asset.
const UNIT: i128 = 10_000_000;
const ETHER_LIMIT: i128 = 10 * UNIT;
const TOKEN_LIMIT: i128 = 100_000 * UNIT;
const INITIAL_DEPOSIT: i128 = 100 * UNIT;

fn register_contract(e: &Env) -> FundingEscrowClient<'_> {
    let contract_id = e.register(FundingEscrow, ());
    FundingEscrowClient::new(e, &contract_id)
}

fn create_token<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

struct Setup<'a> {
    escrow: FundingEscrowClient<'a>,
    token: token::Client<'a>,
    minter: token::StellarAssetClient<'a>,
    owner: Address,
    deposit_address: Address,
}

fn setup(e: &Env) -> Setup<'_> {
    e.mock_all_auths();
    let escrow = register_contract(e);
    let (token, minter) = create_token(e, &Address::generate(e));
    let owner = Address::generate(e);
    let deposit_address = Address::generate(e);

    minter.mint(&owner, &(INITIAL_DEPOSIT * 2));
    escrow.init(
        &owner,
        &deposit_address,
        &token.address,
        &ETHER_LIMIT,
        &TOKEN_LIMIT,
        &INITIAL_DEPOSIT,
    );

    Setup {
        escrow,
        token,
        minter,
        owner,
        deposit_address,
    }
}

#[test]
fn init_stores_config_and_takes_initial_deposit() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(s.escrow.owner(), s.owner);
    assert_eq!(s.escrow.deposit_address(), s.deposit_address);
    assert_eq!(s.escrow.token(), s.token.address);
    assert_eq!(s.escrow.ether_limit(), ETHER_LIMIT);
    assert_eq!(s.escrow.token_limit(), TOKEN_LIMIT);
    assert_eq!(
        s.escrow.config(),
        EscrowConfig {
            owner: s.owner.clone(),
            deposit_address: s.deposit_address.clone(),
            token: s.token.address.clone(),
            ether_limit: ETHER_LIMIT,
            token_limit: TOKEN_LIMIT,
        }
    );

    assert_eq!(s.escrow.balance(), INITIAL_DEPOSIT);
    assert_eq!(s.token.balance(&s.escrow.address), INITIAL_DEPOSIT);
    assert_eq!(s.token.balance(&s.owner), INITIAL_DEPOSIT);
}

#[test]
fn init_publishes_event() {
    let e = Env::default();
    let s = setup(&e);

    let all_events = e.events().all();
    let last_event = all_events.last().expect("no events published");
    assert_eq!(last_event.0, s.escrow.address);
    let expected_topics = vec![
        &e,
        symbol_short!("escrow").into_val(&e),
        symbol_short!("init").into_val(&e),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: EscrowInitLog = last_event.2.try_into_val(&e).unwrap();
    assert_eq!(data.owner, s.owner);
    assert_eq!(data.initial_deposit, INITIAL_DEPOSIT);
    assert_eq!(data.ether_limit, ETHER_LIMIT);
}

#[test]
fn init_without_initial_deposit() {
    let e = Env::default();
    e.mock_all_auths();
    let escrow = register_contract(&e);
    let (token, _) = create_token(&e, &Address::generate(&e));

    escrow.init(
        &Address::generate(&e),
        &Address::generate(&e),
        &token.address,
        &ETHER_LIMIT,
        &TOKEN_LIMIT,
        &0,
    );
    assert_eq!(escrow.balance(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn init_only_once() {
    let e = Env::default();
    let s = setup(&e);
    s.escrow.init(
        &s.owner,
        &s.deposit_address,
        &s.token.address,
        &ETHER_LIMIT,
        &TOKEN_LIMIT,
        &0,
    );
}

#[test]
fn negative_initial_deposit_rejected() {
    let e = Env::default();
    e.mock_all_auths();
    let escrow = register_contract(&e);
    let (token, _) = create_token(&e, &Address::generate(&e));

    let result = escrow.try_init(
        &Address::generate(&e),
        &Address::generate(&e),
        &token.address,
        &ETHER_LIMIT,
        &TOKEN_LIMIT,
        &-1,
    );
    assert_eq!(result, Err(Ok(EscrowError::InvalidAmount.into())));
    assert_eq!(
        escrow.try_owner(),
        Err(Ok(EscrowError::NotInitialized.into()))
    );
}

#[test]
fn anyone_can_deposit() {
    let e = Env::default();
    let s = setup(&e);
    let user = Address::generate(&e);
    s.minter.mint(&user, &(5 * UNIT));

    s.escrow.deposit(&user, &UNIT);

    let all_events = e.events().all();
    let last_event = all_events.last().expect("no events published");
    let expected_topics = vec![
        &e,
        symbol_short!("escrow").into_val(&e),
        symbol_short!("deposit").into_val(&e),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: DepositLog = last_event.2.try_into_val(&e).unwrap();
    assert_eq!(
        data,
        DepositLog {
            from: user.clone(),
            amount: UNIT,
        }
    );

    assert_eq!(s.escrow.balance(), INITIAL_DEPOSIT + UNIT);
    assert_eq!(s.token.balance(&user), 4 * UNIT);
}

#[test]
fn deposits_beyond_ether_limit_are_accepted() {
    let e = Env::default();
    let s = setup(&e);
    let whale = Address::generate(&e);
    let amount = ETHER_LIMIT * 3;
    s.minter.mint(&whale, &amount);

    s.escrow.deposit(&whale, &amount);
    assert_eq!(s.escrow.balance(), INITIAL_DEPOSIT + amount);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn zero_deposit_rejected() {
    let e = Env::default();
    let s = setup(&e);
    s.escrow.deposit(&s.owner, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn deposit_requires_init() {
    let e = Env::default();
    e.mock_all_auths();
    let escrow = register_contract(&e);
    escrow.deposit(&Address::generate(&e), &1);
}

#[test]
fn uninitialized_escrow_reports_not_initialized_before_amount() {
    let e = Env::default();
    e.mock_all_auths();
    let escrow = register_contract(&e);

    assert_eq!(
        escrow.try_deposit(&Address::generate(&e), &0),
        Err(Ok(EscrowError::NotInitialized.into()))
    );
}
