use crate::errors::Error;
use crate::test::{advance_ledger, create_default_auction, mint_to, setup_test};
use crate::types::{AuctionStatus, Condition};
use soroban_sdk::{testutils::Address as _, Address, String};

#[test]
fn test_place_valid_bid() {
    let (env, client, _, seller, buyer, token_address, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.place_bid(&auction_id, &buyer, &2600);

    let (highest_bidder, highest_bid) = client.get_highest_bid(&auction_id);
    assert_eq!(highest_bidder, Some(buyer.clone()));
    assert_eq!(highest_bid, 2600);
    assert_eq!(client.get_current_price(&auction_id), 2600);

    // The bid amount is escrowed with the contract.
    assert_eq!(token.balance(&buyer), 10_000_000 - 2600);
    assert_eq!(token.balance(&client.address), 2600);
}

#[test]
fn test_first_bid_below_min_rejected() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    // Starting price 2500 plus increment 100.
    assert_eq!(client.get_min_next_bid(&auction_id), 2600);

    let result = client.try_place_bid(&auction_id, &buyer, &2550);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_bid_one_unit_below_min_rejected() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    let result = client.try_place_bid(&auction_id, &buyer, &2599);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_bid_exactly_min_accepted() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.place_bid(&auction_id, &buyer, &2600);

    assert_eq!(client.get_current_price(&auction_id), 2600);
    assert_eq!(client.get_min_next_bid(&auction_id), 2700);
}

#[test]
fn test_self_outbid_rejected() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.place_bid(&auction_id, &buyer, &2600);

    let result = client.try_place_bid(&auction_id, &buyer, &2800);
    assert_eq!(result, Err(Ok(Error::AlreadyHighestBidder)));
}

#[test]
fn test_outbid_refunds_previous_bidder() {
    let (env, client, _, seller, buyer, token_address, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    let rival = Address::generate(&env);
    mint_to(&env, &token_address, &rival, 1_000_000);

    client.place_bid(&auction_id, &buyer, &2600);
    client.place_bid(&auction_id, &rival, &2700);

    assert_eq!(token.balance(&buyer), 10_000_000);
    assert_eq!(token.balance(&rival), 1_000_000 - 2700);
    assert_eq!(token.balance(&client.address), 2700);
}

#[test]
fn test_bid_on_scheduled_auction_rejected() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();

    let auction_id = client.create_auction(
        &seller,
        &token_address,
        &String::from_str(&env, "Gloomhaven, complete"),
        &Condition::VeryGood,
        &2500,
        &100,
        &None,
        &600,
        &86400,
        &String::from_str(&env, ""),
    );

    let result = client.try_place_bid(&auction_id, &buyer, &2600);
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));

    // Window opens at start_time.
    advance_ledger(&env, 600);
    client.place_bid(&auction_id, &buyer, &2600);
    assert_eq!(client.get_current_price(&auction_id), 2600);
}

#[test]
fn test_bid_after_end_fails() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    advance_ledger(&env, 86400);

    let result = client.try_place_bid(&auction_id, &buyer, &2600);
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));
}

#[test]
fn test_bid_on_cancelled_auction_rejected() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.cancel_auction(&auction_id, &seller);

    let result = client.try_place_bid(&auction_id, &buyer, &2600);
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));
}

#[test]
fn test_bid_while_paused_rejected() {
    let (env, client, admin, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.set_paused(&admin, &true);

    let result = client.try_place_bid(&auction_id, &buyer, &2600);
    assert_eq!(result, Err(Ok(Error::MarketPaused)));
}

#[test]
fn test_can_bid_view() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    assert!(!client.can_bid(&auction_id, &buyer, &2550));
    assert!(client.can_bid(&auction_id, &buyer, &2600));

    client.place_bid(&auction_id, &buyer, &2600);
    // Now the highest bidder; raising own bid is not allowed.
    assert!(!client.can_bid(&auction_id, &buyer, &2700));
}

#[test]
fn test_bid_at_buy_now_closes_auction() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.place_bid(&auction_id, &buyer, &4500);

    assert_eq!(client.get_status(&auction_id), AuctionStatus::Ended);
    assert_eq!(client.get_winner(&auction_id), Some(buyer.clone()));

    let countdown = client.get_countdown(&auction_id);
    assert!(countdown.is_expired);
    assert_eq!(countdown.total_seconds, 0);

    // No further bids once the auction has ended.
    let rival = Address::generate(&env);
    mint_to(&env, &token_address, &rival, 1_000_000);
    let result = client.try_place_bid(&auction_id, &rival, &5000);
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));
}

#[test]
fn test_bid_above_buy_now_closes_auction() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.place_bid(&auction_id, &buyer, &5000);

    assert_eq!(client.get_status(&auction_id), AuctionStatus::Ended);
    assert_eq!(client.get_winner(&auction_id), Some(buyer.clone()));
}

#[test]
fn test_buy_now_settles_immediately() {
    let (env, client, admin, seller, buyer, token_address, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    let initial_seller_balance = token.balance(&seller);
    client.buy_now(&auction_id, &buyer);

    assert_eq!(client.get_status(&auction_id), AuctionStatus::Settled);

    let fee = (4500 * 250) / 10000;
    assert_eq!(token.balance(&seller), initial_seller_balance + 4500 - fee);
    assert_eq!(token.balance(&admin), fee);
    assert_eq!(token.balance(&buyer), 10_000_000 - 4500);
}

#[test]
fn test_buy_now_unavailable() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();

    let auction_id = client.create_auction(
        &seller,
        &token_address,
        &String::from_str(&env, "Azul, good condition"),
        &Condition::Good,
        &2500,
        &100,
        &None,
        &0,
        &86400,
        &String::from_str(&env, ""),
    );

    let result = client.try_buy_now(&auction_id, &buyer);
    assert_eq!(result, Err(Ok(Error::BuyNowUnavailable)));
}

#[test]
fn test_buy_now_after_bidding_exceeds_ceiling() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    let rival = Address::generate(&env);
    mint_to(&env, &token_address, &rival, 1_000_000);

    // 4450 + increment 100 puts the minimum above the 4500 ceiling.
    client.place_bid(&auction_id, &rival, &4450);

    let result = client.try_buy_now(&auction_id, &buyer);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_buy_now_by_current_leader_rejected() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    client.place_bid(&auction_id, &buyer, &2600);

    let result = client.try_buy_now(&auction_id, &buyer);
    assert_eq!(result, Err(Ok(Error::AlreadyHighestBidder)));
}

#[test]
fn test_bid_history_newest_first() {
    let (env, client, _, seller, buyer, token_address, _token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller, &token_address);

    let rival = Address::generate(&env);
    mint_to(&env, &token_address, &rival, 1_000_000);

    client.place_bid(&auction_id, &rival, &2600);
    advance_ledger(&env, 30);
    client.place_bid(&auction_id, &buyer, &2700);

    let history = client.get_bid_history(&auction_id);
    assert_eq!(history.len(), 2);

    let latest = history.get(0).unwrap();
    let earliest = history.get(1).unwrap();
    assert_eq!(latest.amount, 2700);
    assert_eq!(latest.bidder, buyer);
    assert_eq!(earliest.amount, 2600);
    assert_eq!(earliest.bidder, rival);
    assert!(latest.placed_at > earliest.placed_at);
}
