use soroban_sdk::contracterror;

/// Error codes for the auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not have required permissions
    Unauthorized = 3,
    /// Marketplace is paused for maintenance
    MarketPaused = 4,
    /// Auction not found
    AuctionNotFound = 5,
    /// Auction is not currently accepting bids
    AuctionNotActive = 6,
    /// Bid is below the current price plus the minimum increment
    BidTooLow = 7,
    /// Bidder already holds the highest bid
    AlreadyHighestBidder = 8,
    /// Requested lifecycle transition is not legal from the current status
    InvalidTransition = 9,
    /// Auction has not ended yet
    AuctionNotEnded = 10,
    /// Starting price must be positive
    InvalidStartingPrice = 11,
    /// Bid increment must be positive
    InvalidBidIncrement = 12,
    /// Buy-now price must exceed the starting price
    InvalidBuyNowPrice = 13,
    /// Auction duration must be non-zero
    InvalidDuration = 14,
    /// Auction with bids cannot be cancelled
    CannotCancelWithBids = 15,
    /// No buy-now price is offered for this auction
    BuyNowUnavailable = 16,
    /// Invalid input parameters provided
    InvalidInput = 17,
    /// Invalid metadata provided
    InvalidMetadata = 18,
}
