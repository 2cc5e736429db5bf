use crate::errors::Error;
use crate::types::{Auction, AuctionStatus};

/// Status of `auction` as observed at `now`.
///
/// `Scheduled` and `Active` are derived from the bidding window on every
/// read, so the scheduled-to-active and active-to-ended transitions take
/// effect without a dedicated call. `Ended`, `Settled` and `Cancelled`
/// stick once stored.
pub fn effective_status(auction: &Auction, now: u64) -> AuctionStatus {
    match auction.status {
        AuctionStatus::Scheduled | AuctionStatus::Active => {
            if now >= auction.end_time {
                AuctionStatus::Ended
            } else if now >= auction.start_time {
                AuctionStatus::Active
            } else {
                AuctionStatus::Scheduled
            }
        }
        stored => stored,
    }
}

pub fn is_active(auction: &Auction, now: u64) -> bool {
    effective_status(auction, now) == AuctionStatus::Active
}

/// The bidding window must be open for any bid to be considered.
pub fn ensure_active(auction: &Auction, now: u64) -> Result<(), Error> {
    if is_active(auction, now) {
        Ok(())
    } else {
        Err(Error::AuctionNotActive)
    }
}

/// Settlement is legal only once the bidding window has closed. The
/// already-settled case is handled upstream as an idempotent no-op.
pub fn ensure_can_settle(auction: &Auction, now: u64) -> Result<(), Error> {
    match effective_status(auction, now) {
        AuctionStatus::Ended => Ok(()),
        _ => Err(Error::InvalidTransition),
    }
}

/// Cancellation is legal only before the bidding window closes.
pub fn ensure_can_cancel(auction: &Auction, now: u64) -> Result<(), Error> {
    match effective_status(auction, now) {
        AuctionStatus::Scheduled | AuctionStatus::Active => Ok(()),
        _ => Err(Error::InvalidTransition),
    }
}
