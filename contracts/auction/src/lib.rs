#![no_std]

mod clock;
mod errors;
mod events;
mod ledger;
mod lifecycle;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

use crate::errors::Error;
use crate::types::{Auction, AuctionStatus, Bid, Condition, Config, Countdown, DAY_IN_LEDGERS};

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Maximum basis points for fees
const MAX_FEE_RATE: u32 = 10000; // 100%

/// Page size cap for listing scans
const MAX_PAGE_LIMIT: u32 = 100;

/// Timed-auction engine for the board-game marketplace.
///
/// Handles the full listing lifecycle: countdown toward a fixed end time,
/// bid validation against the minimum-increment rule, an append-only bid
/// history with escrowed funds, buy-now short-circuiting, and settlement
/// that pays the seller and records the winner.
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========================================================================
    // INITIALIZATION & CONFIGURATION
    // ========================================================================

    /// Initialize the contract.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(env: Env, admin: Address, base_fee_bps: u32) -> Result<(), Error> {
        admin.require_auth();

        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        if base_fee_bps > MAX_FEE_RATE {
            return Err(Error::InvalidInput);
        }

        let config = Config {
            admin: admin.clone(),
            base_fee_bps,
            is_paused: false,
            total_auctions: 0,
            updated_at: env.ledger().timestamp(),
        };

        storage::set_config(&env, &config);
        storage::set_initialized(&env);

        events::emit_initialized(&env, admin, base_fee_bps);

        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Get marketplace configuration
    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Update the marketplace fee rate (admin only). Running auctions keep
    /// the rate they were created with.
    pub fn set_fee_rate(env: Env, admin: Address, new_bps: u32) -> Result<(), Error> {
        admin.require_auth();

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        if new_bps > MAX_FEE_RATE {
            return Err(Error::InvalidInput);
        }

        config.base_fee_bps = new_bps;
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);

        events::emit_fee_rate_updated(&env, admin, new_bps);

        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Pause or unpause auction creation and bidding (admin only)
    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), Error> {
        admin.require_auth();

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        config.is_paused = paused;
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);

        events::emit_paused(&env, admin, paused);

        Self::extend_instance_ttl(&env);
        Ok(())
    }

    // ========================================================================
    // LISTING CREATION
    // ========================================================================

    /// Create a timed auction for a listed item.
    ///
    /// # Arguments
    /// * `seller` - Address listing the item
    /// * `token` - Token used for bids and payout
    /// * `title` - Listing title
    /// * `condition` - Condition of the item
    /// * `starting_price` - Price the bidding opens at
    /// * `bid_increment` - Minimum raise over the current price
    /// * `buy_now_price` - Optional immediate-win price
    /// * `start_delay_seconds` - 0 opens bidding immediately, otherwise the
    ///   auction is created scheduled
    /// * `duration_seconds` - Length of the bidding window
    /// * `metadata` - Optional JSON metadata (shipping info etc.)
    ///
    /// # Returns
    /// * Auction ID if successful
    pub fn create_auction(
        env: Env,
        seller: Address,
        token: Address,
        title: String,
        condition: Condition,
        starting_price: i128,
        bid_increment: i128,
        buy_now_price: Option<i128>,
        start_delay_seconds: u64,
        duration_seconds: u64,
        metadata: String,
    ) -> Result<u64, Error> {
        seller.require_auth();

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::MarketPaused);
        }

        if title.is_empty() {
            return Err(Error::InvalidMetadata);
        }

        if starting_price <= 0 {
            return Err(Error::InvalidStartingPrice);
        }

        if bid_increment <= 0 {
            return Err(Error::InvalidBidIncrement);
        }

        if duration_seconds == 0 {
            return Err(Error::InvalidDuration);
        }

        if let Some(buy_now) = buy_now_price {
            if buy_now <= starting_price {
                return Err(Error::InvalidBuyNowPrice);
            }
        }

        let now = env.ledger().timestamp();
        let start_time = now + start_delay_seconds;
        let auction_id = storage::increment_auction_counter(&env);

        let status = if start_delay_seconds == 0 {
            AuctionStatus::Active
        } else {
            AuctionStatus::Scheduled
        };

        let auction = Auction {
            id: auction_id,
            seller: seller.clone(),
            token,
            title,
            condition,
            starting_price,
            bid_increment,
            buy_now_price,
            start_time,
            end_time: start_time + duration_seconds,
            status,
            highest_bid: 0,
            highest_bidder: None,
            fee_bps: config.base_fee_bps,
            created_at: now,
            metadata,
        };

        storage::save_auction(&env, &auction);
        storage::add_seller_auction(&env, &seller, auction_id);

        config.total_auctions += 1;
        config.updated_at = now;
        storage::set_config(&env, &config);

        events::emit_auction_created(&env, auction_id, seller, starting_price, auction.end_time);

        Self::extend_instance_ttl(&env);
        Ok(auction_id)
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Place a bid.
    ///
    /// The bid must land inside an open bidding window, raise the current
    /// price by at least the auction's increment, and come from someone who
    /// is not already the highest bidder. On success the amount is escrowed,
    /// the previous leader is refunded, and the bid is appended to the
    /// history with the current ledger timestamp. A bid at or above the
    /// buy-now price closes the auction on the spot.
    pub fn place_bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::MarketPaused);
        }

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let now = env.ledger().timestamp();

        ledger::validate_bid(&auction, &bidder, amount, now)?;

        if let Some(previous) = auction.highest_bidder.clone() {
            refund_escrow(&env, &auction, &previous);
        }
        escrow_bid(&env, &auction, &bidder, amount);

        let bid = Bid {
            bidder: bidder.clone(),
            amount,
            placed_at: now,
        };
        ledger::append(&env, &auction, &bid)?;

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        // An accepted bid proves the window is open; a stored Scheduled
        // status is promoted here.
        auction.status = AuctionStatus::Active;

        let mut closed = false;
        if let Some(buy_now) = auction.buy_now_price {
            if amount >= buy_now {
                auction.status = AuctionStatus::Ended;
                auction.end_time = now;
                closed = true;
            }
        }

        storage::save_auction(&env, &auction);

        events::emit_bid_placed(&env, auction_id, bidder, amount, now);
        if closed {
            events::emit_auction_ended(&env, auction_id, amount);
        }

        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Win the auction outright at the buy-now price. Goes through the same
    /// validation as any bid, then settles immediately.
    pub fn buy_now(env: Env, auction_id: u64, buyer: Address) -> Result<(), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let buy_now = auction.buy_now_price.ok_or(Error::BuyNowUnavailable)?;

        Self::place_bid(env.clone(), auction_id, buyer, buy_now)?;
        Self::settle_auction(env, auction_id)?;

        Ok(())
    }

    // ========================================================================
    // SETTLEMENT & CANCELLATION
    // ========================================================================

    /// Record the winner and release funds once the bidding window has
    /// closed. Pays the seller the winning amount minus the marketplace
    /// fee, and the fee to the admin.
    ///
    /// Settling an already-settled auction is a no-op that reports the same
    /// winner again; the history is immutable so the resolution cannot
    /// change.
    pub fn settle_auction(env: Env, auction_id: u64) -> Result<Option<Address>, Error> {
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let now = env.ledger().timestamp();

        if auction.status == AuctionStatus::Settled {
            return Ok(ledger::resolve_winner(&env, auction_id).map(|bid| bid.bidder));
        }

        lifecycle::ensure_can_settle(&auction, now)?;

        // A time-based expiry is observed lazily; announce it if no earlier
        // call did.
        if auction.status != AuctionStatus::Ended {
            events::emit_auction_ended(&env, auction_id, ledger::current_price(&auction));
        }

        let winner = ledger::resolve_winner(&env, auction_id);

        match winner {
            None => {
                auction.status = AuctionStatus::Settled;
                storage::save_auction(&env, &auction);
                events::emit_auction_settled(&env, auction_id, None, 0);
                Ok(None)
            }
            Some(bid) => {
                let fee = fee_amount(auction.highest_bid, auction.fee_bps);
                let seller_amount = auction.highest_bid - fee;

                let token_client = token::TokenClient::new(&env, &auction.token);
                let contract_address = env.current_contract_address();

                token_client.transfer(&contract_address, &auction.seller, &seller_amount);

                if fee > 0 {
                    let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
                    token_client.transfer(&contract_address, &config.admin, &fee);
                }

                storage::remove_escrowed_funds(&env, auction_id, &bid.bidder);

                auction.status = AuctionStatus::Settled;
                storage::save_auction(&env, &auction);

                events::emit_auction_settled(
                    &env,
                    auction_id,
                    Some(bid.bidder.clone()),
                    auction.highest_bid,
                );

                Self::extend_instance_ttl(&env);
                Ok(Some(bid.bidder))
            }
        }
    }

    /// Withdraw a bid-free listing (seller only). Illegal once the bidding
    /// window has closed.
    pub fn cancel_auction(env: Env, auction_id: u64, seller: Address) -> Result<(), Error> {
        seller.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.seller != seller {
            return Err(Error::Unauthorized);
        }

        let now = env.ledger().timestamp();
        lifecycle::ensure_can_cancel(&auction, now)?;

        if auction.highest_bidder.is_some() {
            return Err(Error::CannotCancelWithBids);
        }

        auction.status = AuctionStatus::Cancelled;
        storage::save_auction(&env, &auction);

        events::emit_auction_cancelled(&env, auction_id, seller);

        Ok(())
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Get auction data
    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Lifecycle status as observed at the current ledger time
    pub fn get_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(lifecycle::effective_status(&auction, env.ledger().timestamp()))
    }

    /// Remaining time before the auction closes, decomposed for display
    pub fn get_countdown(env: Env, auction_id: u64) -> Result<Countdown, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(clock::countdown(auction.end_time, env.ledger().timestamp()))
    }

    /// Remaining time rendered as `"01d 02h 03m 04s"`
    pub fn get_time_left(env: Env, auction_id: u64) -> Result<String, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let countdown = clock::countdown(auction.end_time, env.ledger().timestamp());
        Ok(clock::format_countdown(&env, &countdown))
    }

    /// Current price: last accepted bid, or the starting price before any
    pub fn get_current_price(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(ledger::current_price(&auction))
    }

    /// Smallest amount the next bid may carry
    pub fn get_min_next_bid(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(ledger::min_next_bid(&auction))
    }

    /// Whether `place_bid` with the same arguments would be accepted now
    pub fn can_bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<bool, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let now = env.ledger().timestamp();
        Ok(ledger::validate_bid(&auction, &bidder, amount, now).is_ok())
    }

    /// Leading bidder and amount
    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    /// Full bid history, most recent first
    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(ledger::history_newest_first(&env, auction_id))
    }

    /// Winner under highest-amount, earliest-arrival rules. Only valid once
    /// the auction has ended; `None` when it closed without bids.
    pub fn get_winner(env: Env, auction_id: u64) -> Result<Option<Address>, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let now = env.ledger().timestamp();

        match lifecycle::effective_status(&auction, now) {
            AuctionStatus::Ended | AuctionStatus::Settled => {
                Ok(ledger::resolve_winner(&env, auction_id).map(|bid| bid.bidder))
            }
            _ => Err(Error::AuctionNotEnded),
        }
    }

    /// All auction IDs listed by a seller
    pub fn get_auctions_by_seller(env: Env, seller: Address) -> Vec<u64> {
        storage::get_seller_auctions(&env, &seller)
    }

    /// Auctions currently accepting bids (paginated)
    ///
    /// # Arguments
    /// * `offset` - Pagination offset
    /// * `limit` - Maximum results to return
    pub fn get_open_auctions(env: Env, offset: u32, limit: u32) -> Result<Vec<Auction>, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(Error::InvalidInput);
        }

        let now = env.ledger().timestamp();
        let mut results: Vec<Auction> = Vec::new(&env);
        let mut count = 0u32;
        let mut returned = 0u32;

        for id in 1..=config.total_auctions {
            if returned >= limit {
                break;
            }

            if let Some(auction) = storage::get_auction(&env, id) {
                if lifecycle::is_active(&auction, now) {
                    if count >= offset {
                        results.push_back(auction);
                        returned += 1;
                    }
                    count += 1;
                }
            }
        }

        Ok(results)
    }

    // ========================================================================
    // WATCHERS
    // ========================================================================

    /// Follow an auction. Watching twice is a no-op.
    pub fn watch_auction(env: Env, auction_id: u64, watcher: Address) -> Result<(), Error> {
        watcher.require_auth();

        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }

        let mut watchers = storage::get_watchers(&env, auction_id);
        if watchers.first_index_of(watcher.clone()).is_none() {
            watchers.push_back(watcher.clone());
            storage::set_watchers(&env, auction_id, &watchers);
            events::emit_auction_watched(&env, auction_id, watcher);
        }

        Ok(())
    }

    /// Stop following an auction
    pub fn unwatch_auction(env: Env, auction_id: u64, watcher: Address) -> Result<(), Error> {
        watcher.require_auth();

        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }

        let mut watchers = storage::get_watchers(&env, auction_id);
        if let Some(index) = watchers.first_index_of(watcher.clone()) {
            watchers.remove(index);
            storage::set_watchers(&env, auction_id, &watchers);
            events::emit_auction_unwatched(&env, auction_id, watcher);
        }

        Ok(())
    }

    /// Number of addresses watching an auction
    pub fn get_watcher_count(env: Env, auction_id: u64) -> Result<u32, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_watchers(&env, auction_id).len())
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

fn fee_amount(amount: i128, fee_bps: u32) -> i128 {
    (amount * fee_bps as i128) / 10000
}

fn escrow_bid(env: &Env, auction: &Auction, bidder: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &auction.token);
    token_client.transfer(bidder, &env.current_contract_address(), &amount);
    storage::set_escrowed_funds(env, auction.id, bidder, amount);
}

fn refund_escrow(env: &Env, auction: &Auction, bidder: &Address) {
    let escrowed_amount = storage::get_escrowed_funds(env, auction.id, bidder);
    if escrowed_amount > 0 {
        let token_client = token::TokenClient::new(env, &auction.token);
        token_client.transfer(&env.current_contract_address(), bidder, &escrowed_amount);
        storage::remove_escrowed_funds(env, auction.id, bidder);
        events::emit_bid_refunded(env, auction.id, bidder.clone(), escrowed_amount);
    }
}
