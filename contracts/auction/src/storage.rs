use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    Auction, Bid, Config, StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get marketplace configuration
pub fn get_config(env: &Env) -> Option<Config> {
    let key = StorageKey::Config;
    let config = env.storage().persistent().get::<_, Config>(&key);
    if config.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set marketplace configuration
pub fn set_config(env: &Env, config: &Config) {
    let key = StorageKey::Config;
    env.storage().persistent().set(&key, config);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get auction data by ID
pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Set auction data
pub fn save_auction(env: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// BID HISTORY STORAGE
// ============================================================================

/// Get the bid history for an auction, in arrival order
pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = StorageKey::BidHistory(auction_id);
    let history = env
        .storage()
        .persistent()
        .get::<_, Vec<Bid>>(&key)
        .unwrap_or(Vec::new(env));
    if !history.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    history
}

/// Append one bid to an auction's history
pub fn push_bid(env: &Env, auction_id: u64, bid: &Bid) {
    let key = StorageKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid.clone());
    env.storage().persistent().set(&key, &history);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ESCROW STORAGE
// ============================================================================

/// Funds held for a bidder on an auction
pub fn get_escrowed_funds(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = StorageKey::EscrowedFunds(auction_id, bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_escrowed_funds(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = StorageKey::EscrowedFunds(auction_id, bidder.clone());
    env.storage().persistent().set(&key, &amount);
}

pub fn remove_escrowed_funds(env: &Env, auction_id: u64, bidder: &Address) {
    let key = StorageKey::EscrowedFunds(auction_id, bidder.clone());
    env.storage().persistent().remove(&key);
}

// ============================================================================
// SELLER AUCTIONS STORAGE
// ============================================================================

/// Get all auction IDs for a seller
pub fn get_seller_auctions(env: &Env, seller: &Address) -> Vec<u64> {
    let key = StorageKey::SellerAuctions(seller.clone());
    let auctions = env
        .storage()
        .persistent()
        .get::<_, Vec<u64>>(&key)
        .unwrap_or(Vec::new(env));
    if !auctions.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auctions
}

/// Add auction to seller's list
pub fn add_seller_auction(env: &Env, seller: &Address, auction_id: u64) {
    let key = StorageKey::SellerAuctions(seller.clone());
    let mut auctions = get_seller_auctions(env, seller);
    auctions.push_back(auction_id);
    env.storage().persistent().set(&key, &auctions);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// WATCHER STORAGE
// ============================================================================

/// Get all watcher addresses for an auction
pub fn get_watchers(env: &Env, auction_id: u64) -> Vec<Address> {
    let key = StorageKey::Watchers(auction_id);
    env.storage()
        .persistent()
        .get::<_, Vec<Address>>(&key)
        .unwrap_or(Vec::new(env))
}

pub fn set_watchers(env: &Env, auction_id: u64, watchers: &Vec<Address>) {
    let key = StorageKey::Watchers(auction_id);
    env.storage().persistent().set(&key, watchers);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// AUCTION COUNTER STORAGE
// ============================================================================

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCounter, &counter);
    counter
}
