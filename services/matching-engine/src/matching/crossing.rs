//! Crossing detection logic
//!
//! Determines whether an aggressor may take a level given its price limit.

use types::numeric::Price;
use types::order::Side;

/// Check whether a level price is within the aggressor's limit
///
/// `None` means no limit (market-order semantics): every level is takeable.
/// With a limit, a buyer takes levels at or below it and a seller takes
/// levels at or above it. A zero limit is a real price, not a wildcard.
pub fn within_limit(aggressor_side: Side, limit: Option<Price>, level_price: Price) -> bool {
    let Some(limit) = limit else {
        return true;
    };

    match aggressor_side {
        Side::Buy => level_price <= limit,
        Side::Sell => level_price >= limit,
    }
}

/// Check if a bid and ask price cross
pub fn crosses(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}
