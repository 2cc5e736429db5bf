use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ============================================================================
// Event Topic Constants
// ============================================================================

pub const TOPIC_INITIALIZED: Symbol = symbol_short!("INIT");
pub const TOPIC_FEE_RATE_UPDATED: Symbol = symbol_short!("FEE_UPD");
pub const TOPIC_PAUSED: Symbol = symbol_short!("PAUSED");
pub const TOPIC_AUCTION_CREATED: Symbol = symbol_short!("AUC_CRT");
pub const TOPIC_BID_PLACED: Symbol = symbol_short!("BID_PLC");
pub const TOPIC_BID_REFUNDED: Symbol = symbol_short!("BID_RFD");
pub const TOPIC_AUCTION_ENDED: Symbol = symbol_short!("AUC_END");
pub const TOPIC_AUCTION_SETTLED: Symbol = symbol_short!("AUC_STL");
pub const TOPIC_AUCTION_CANCELLED: Symbol = symbol_short!("AUC_CAN");
pub const TOPIC_AUCTION_WATCHED: Symbol = symbol_short!("AUC_WCH");
pub const TOPIC_AUCTION_UNWATCHED: Symbol = symbol_short!("AUC_UWCH");

// ============================================================================
// Event Data
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub base_fee_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdatedEvent {
    pub admin: Address,
    pub new_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEvent {
    pub admin: Address,
    pub is_paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub auction_id: u64,
    pub seller: Address,
    pub starting_price: i128,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub placed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEvent {
    pub auction_id: u64,
    pub final_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEvent {
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEvent {
    pub auction_id: u64,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WatcherEvent {
    pub auction_id: u64,
    pub watcher: Address,
}

// ============================================================================
// Emission Helpers
// ============================================================================

pub fn emit_initialized(env: &Env, admin: Address, base_fee_bps: u32) {
    let event = InitializedEvent {
        admin: admin.clone(),
        base_fee_bps,
    };
    env.events().publish((TOPIC_INITIALIZED, admin), event);
}

pub fn emit_fee_rate_updated(env: &Env, admin: Address, new_bps: u32) {
    let event = FeeRateUpdatedEvent {
        admin: admin.clone(),
        new_bps,
    };
    env.events().publish((TOPIC_FEE_RATE_UPDATED, admin), event);
}

pub fn emit_paused(env: &Env, admin: Address, is_paused: bool) {
    let event = PausedEvent {
        admin: admin.clone(),
        is_paused,
    };
    env.events().publish((TOPIC_PAUSED, admin), event);
}

pub fn emit_auction_created(
    env: &Env,
    auction_id: u64,
    seller: Address,
    starting_price: i128,
    end_time: u64,
) {
    let event = AuctionCreatedEvent {
        auction_id,
        seller: seller.clone(),
        starting_price,
        end_time,
    };
    env.events()
        .publish((TOPIC_AUCTION_CREATED, auction_id, seller), event);
}

pub fn emit_bid_placed(env: &Env, auction_id: u64, bidder: Address, amount: i128, placed_at: u64) {
    let event = BidPlacedEvent {
        auction_id,
        bidder: bidder.clone(),
        amount,
        placed_at,
    };
    env.events()
        .publish((TOPIC_BID_PLACED, auction_id, bidder), event);
}

pub fn emit_bid_refunded(env: &Env, auction_id: u64, bidder: Address, amount: i128) {
    let event = BidRefundedEvent {
        auction_id,
        bidder: bidder.clone(),
        amount,
    };
    env.events()
        .publish((TOPIC_BID_REFUNDED, auction_id, bidder), event);
}

pub fn emit_auction_ended(env: &Env, auction_id: u64, final_price: i128) {
    let event = AuctionEndedEvent {
        auction_id,
        final_price,
    };
    env.events().publish((TOPIC_AUCTION_ENDED, auction_id), event);
}

pub fn emit_auction_settled(env: &Env, auction_id: u64, winner: Option<Address>, amount: i128) {
    let event = AuctionSettledEvent {
        auction_id,
        winner,
        amount,
    };
    env.events()
        .publish((TOPIC_AUCTION_SETTLED, auction_id), event);
}

pub fn emit_auction_cancelled(env: &Env, auction_id: u64, seller: Address) {
    let event = AuctionCancelledEvent {
        auction_id,
        seller: seller.clone(),
    };
    env.events()
        .publish((TOPIC_AUCTION_CANCELLED, auction_id, seller), event);
}

pub fn emit_auction_watched(env: &Env, auction_id: u64, watcher: Address) {
    let event = WatcherEvent {
        auction_id,
        watcher: watcher.clone(),
    };
    env.events()
        .publish((TOPIC_AUCTION_WATCHED, auction_id, watcher), event);
}

pub fn emit_auction_unwatched(env: &Env, auction_id: u64, watcher: Address) {
    let event = WatcherEvent {
        auction_id,
        watcher: watcher.clone(),
    };
    env.events()
        .publish((TOPIC_AUCTION_UNWATCHED, auction_id, watcher), event);
}
