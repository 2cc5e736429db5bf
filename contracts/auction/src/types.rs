use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the auction contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Marketplace configuration
    Config,
    /// Auction data by ID
    Auction(u64),
    /// Ordered bid history by auction ID
    BidHistory(u64),
    /// Funds held for the current highest bidder
    EscrowedFunds(u64, Address),
    /// Auction IDs by seller address
    SellerAuctions(Address),
    /// Watcher addresses by auction ID
    Watchers(u64),
    /// Last auction ID counter
    AuctionCounter,
}

/// Lifecycle status of an auction
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Bidding window has not opened yet
    Scheduled = 0,
    /// Accepting bids
    Active = 1,
    /// Bidding closed, winner not yet recorded
    Ended = 2,
    /// Winner recorded and funds released
    Settled = 3,
    /// Closed without a sale
    Cancelled = 4,
}

/// Physical condition of the listed game
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Condition {
    New = 0,
    LikeNew = 1,
    VeryGood = 2,
    Good = 3,
    Acceptable = 4,
}

/// A single timed listing
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Unique auction identifier
    pub id: u64,
    /// Seller's address
    pub seller: Address,
    /// Token used for bids and payout
    pub token: Address,
    /// Listing title
    pub title: String,
    /// Condition of the item
    pub condition: Condition,
    /// Price the bidding opens at
    pub starting_price: i128,
    /// Minimum amount a new bid must exceed the current price by
    pub bid_increment: i128,
    /// Optional price at which a bid wins immediately
    pub buy_now_price: Option<i128>,
    /// When the bidding window opens
    pub start_time: u64,
    /// When the bidding window closes
    pub end_time: u64,
    /// Current lifecycle status
    pub status: AuctionStatus,
    /// Amount of the leading bid, 0 before the first bid
    pub highest_bid: i128,
    /// Leading bidder, if any
    pub highest_bidder: Option<Address>,
    /// Marketplace fee in basis points, snapshotted at creation
    pub fee_bps: u32,
    /// Creation timestamp
    pub created_at: u64,
    /// Optional metadata (shipping info etc., JSON encoded)
    pub metadata: String,
}

/// One accepted bid
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    /// Ledger timestamp the bid was accepted at
    pub placed_at: u64,
}

/// Remaining time before an auction closes, decomposed for display.
/// Every component is present even when zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub total_seconds: u64,
    pub is_expired: bool,
}

/// Marketplace configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Admin address with special privileges
    pub admin: Address,
    /// Marketplace fee in basis points
    pub base_fee_bps: u32,
    /// Whether the marketplace is paused
    pub is_paused: bool,
    /// Total number of auctions created
    pub total_auctions: u64,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
