pub mod bidding_test;

use crate::types::Condition;
use crate::{AuctionContract, AuctionContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub fn setup_test() -> (
    Env,
    AuctionContractClient<'static>,
    Address,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);

    mint_to(&env, &token_address, &seller, 10_000_000);
    mint_to(&env, &token_address, &buyer, 10_000_000);

    client.initialize(&admin, &250);

    (env, client, admin, seller, buyer, token_address, token_client)
}

pub fn setup_uninitialized() -> (Env, AuctionContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    (env, client, admin)
}

pub fn mint_to(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

/// Immediately-open one-day auction: starting price 2500, increment 100,
/// buy-now 4500.
pub fn create_default_auction(
    env: &Env,
    client: &AuctionContractClient<'static>,
    seller: &Address,
    token: &Address,
) -> u64 {
    client.create_auction(
        seller,
        token,
        &String::from_str(env, "Catan board game, like new"),
        &Condition::LikeNew,
        &2500,
        &100,
        &Some(4500),
        &0,
        &86400,
        &String::from_str(env, "Free shipping within US"),
    )
}
