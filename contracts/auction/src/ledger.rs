use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::lifecycle;
use crate::storage;
use crate::types::{Auction, Bid};

/// Current price of the auction: the most recent accepted bid, or the
/// starting price while the history is empty.
pub fn current_price(auction: &Auction) -> i128 {
    if auction.highest_bidder.is_some() {
        auction.highest_bid
    } else {
        auction.starting_price
    }
}

/// Smallest amount the next bid may carry.
pub fn min_next_bid(auction: &Auction) -> i128 {
    current_price(auction) + auction.bid_increment
}

/// Decide whether `bidder` may put `amount` on `auction` at `now`.
/// Preconditions run in order and the first failure wins. Pure: nothing is
/// appended or mutated here.
pub fn validate_bid(auction: &Auction, bidder: &Address, amount: i128, now: u64) -> Result<(), Error> {
    lifecycle::ensure_active(auction, now)?;
    if amount < min_next_bid(auction) {
        return Err(Error::BidTooLow);
    }
    if auction.highest_bidder.as_ref() == Some(bidder) {
        return Err(Error::AlreadyHighestBidder);
    }
    Ok(())
}

/// Append an accepted bid to the history. Amounts must strictly increase;
/// entries are never edited or removed afterwards.
pub fn append(env: &Env, auction: &Auction, bid: &Bid) -> Result<(), Error> {
    if auction.highest_bidder.is_some() && bid.amount <= auction.highest_bid {
        return Err(Error::BidTooLow);
    }
    storage::push_bid(env, auction.id, bid);
    Ok(())
}

/// Winning bid under highest-amount, earliest-arrival rules. The history
/// is stored in arrival order, so replacing only on a strictly greater
/// amount keeps the earliest bid at any tied amount. `None` when no bid
/// was ever accepted.
pub fn resolve_winner(env: &Env, auction_id: u64) -> Option<Bid> {
    let history = storage::get_bid_history(env, auction_id);
    let mut winner: Option<Bid> = None;
    for bid in history.iter() {
        let leads = match &winner {
            Some(best) => bid.amount > best.amount,
            None => true,
        };
        if leads {
            winner = Some(bid);
        }
    }
    winner
}

/// Full bid history, most recent first, for display. The stored order is
/// left untouched.
pub fn history_newest_first(env: &Env, auction_id: u64) -> Vec<Bid> {
    let stored = storage::get_bid_history(env, auction_id);
    let mut reversed = Vec::new(env);
    for bid in stored.iter() {
        reversed.push_front(bid);
    }
    reversed
}
