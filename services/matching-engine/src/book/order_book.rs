//! Per-symbol order book with price-time priority
//!
//! Owns both sides plus an id index for O(1) locate. Each resting order is
//! owned by exactly one price level; the index holds only a (side, price)
//! locator. Levels are evicted in the same operation that empties them.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::fill::Fill;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::time;

use super::ask_book::AskBook;
use super::bid_book::BidBook;

/// Locator for a resting order: which side and at what price
#[derive(Debug, Clone, Copy)]
struct OrderLocation {
    side: Side,
    price: Price,
}

/// Snapshot of one price level: price, total, and constituent orders in
/// time priority
#[derive(Debug, Clone)]
pub struct LevelSnapshot {
    pub price: Price,
    pub total_quantity: Quantity,
    pub orders: Vec<Order>,
}

/// Order book for a single symbol
#[derive(Debug, Clone)]
pub struct OrderBook {
    symbol: Symbol,
    bids: BidBook,
    asks: AskBook,
    /// order id → locator; never owns the order
    index: HashMap<OrderId, OrderLocation>,
}

impl OrderBook {
    /// Create an empty book for a symbol
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: BidBook::new(),
            asks: AskBook::new(),
            index: HashMap::new(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Add a resting order to the book
    ///
    /// Returns false (with no state change) when the order has nothing
    /// remaining or its id is already resting.
    pub fn add_order(&mut self, order: Order) -> bool {
        if order.remaining().is_zero() || self.index.contains_key(&order.id) {
            return false;
        }

        self.index.insert(
            order.id,
            OrderLocation {
                side: order.side,
                price: order.price,
            },
        );
        match order.side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        }
        true
    }

    /// Cancel a resting order by id
    ///
    /// Returns false on unknown id; cancelling twice is a no-op.
    pub fn cancel_order(&mut self, order_id: OrderId) -> bool {
        let Some(location) = self.index.remove(&order_id) else {
            return false;
        };

        let removed = match location.side {
            Side::Buy => self.bids.remove(order_id, location.price),
            Side::Sell => self.asks.remove(order_id, location.price),
        };
        debug_assert!(removed.is_some(), "index pointed at a missing order");
        removed.is_some()
    }

    /// Modify a resting order
    ///
    /// `None` leaves a field unchanged. A price change re-queues the order:
    /// it moves to the tail of the new level with a fresh timestamp, losing
    /// time priority. A quantity-only change keeps the queue slot. A new
    /// quantity at or below the filled amount is rejected.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        new_price: Option<Price>,
        new_quantity: Option<Quantity>,
    ) -> bool {
        let Some(location) = self.index.get(&order_id).copied() else {
            return false;
        };

        match new_price {
            Some(price) if price != location.price => {
                // Re-queue across prices. Validate before touching state so a
                // rejection leaves the book untouched.
                if let Some(quantity) = new_quantity {
                    let Some(current) = self.get_order(order_id) else {
                        return false;
                    };
                    if quantity <= current.filled {
                        return false;
                    }
                }

                let removed = match location.side {
                    Side::Buy => self.bids.remove(order_id, location.price),
                    Side::Sell => self.asks.remove(order_id, location.price),
                };
                let Some(mut order) = removed else {
                    debug_assert!(false, "index pointed at a missing order");
                    return false;
                };
                self.index.remove(&order_id);

                order.price = price;
                if let Some(quantity) = new_quantity {
                    order.quantity = quantity;
                }
                order.timestamp = time::now_nanos();
                self.add_order(order)
            }
            _ => match new_quantity {
                Some(quantity) => {
                    let level = match location.side {
                        Side::Buy => self.bids.level_mut(location.price),
                        Side::Sell => self.asks.level_mut(location.price),
                    };
                    level.is_some_and(|l| l.modify_quantity(order_id, quantity))
                }
                // Nothing to change
                None => true,
            },
        }
    }

    /// Best bid as (price, level total)
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best()
    }

    /// Best ask as (price, level total)
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best()
    }

    /// Ask minus bid; empty unless both sides are populated
    pub fn spread(&self) -> Option<Decimal> {
        let (bid, _) = self.best_bid()?;
        let (ask, _) = self.best_ask()?;
        Some(ask.as_decimal() - bid.as_decimal())
    }

    /// Midpoint of the best bid and ask; empty unless both sides are populated
    pub fn mid_price(&self) -> Option<Decimal> {
        let (bid, _) = self.best_bid()?;
        let (ask, _) = self.best_ask()?;
        Some((bid.as_decimal() + ask.as_decimal()) / Decimal::from(2))
    }

    /// Look up a resting order by id
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        let location = self.index.get(&order_id)?;
        let level = match location.side {
            Side::Buy => self.bids.level(location.price),
            Side::Sell => self.asks.level(location.price),
        }?;
        level.order(order_id)
    }

    /// Snapshot up to `depth` bid levels from the best outward
    pub fn bid_levels(&self, depth: usize) -> Vec<LevelSnapshot> {
        self.bids
            .levels_from_best()
            .take(depth)
            .map(|level| LevelSnapshot {
                price: level.price(),
                total_quantity: level.total_quantity(),
                orders: level.orders().cloned().collect(),
            })
            .collect()
    }

    /// Snapshot up to `depth` ask levels from the best outward
    pub fn ask_levels(&self, depth: usize) -> Vec<LevelSnapshot> {
        self.asks
            .levels_from_best()
            .take(depth)
            .map(|level| LevelSnapshot {
                price: level.price(),
                total_quantity: level.total_quantity(),
                orders: level.orders().cloned().collect(),
            })
            .collect()
    }

    /// Resting liquidity available to an aggressor within its limit.
    ///
    /// Walks the opposite side from the best level outward, stopping at the
    /// price gate or once `needed` is covered.
    pub fn available_quantity(
        &self,
        aggressor_side: Side,
        limit: Option<Price>,
        needed: Quantity,
    ) -> Quantity {
        let mut available = Quantity::zero();
        match aggressor_side {
            Side::Buy => {
                for level in self.asks.levels_from_best() {
                    if !crate::matching::crossing::within_limit(Side::Buy, limit, level.price()) {
                        break;
                    }
                    available = available + level.total_quantity();
                    if available >= needed {
                        break;
                    }
                }
            }
            Side::Sell => {
                for level in self.bids.levels_from_best() {
                    if !crate::matching::crossing::within_limit(Side::Sell, limit, level.price()) {
                        break;
                    }
                    available = available + level.total_quantity();
                    if available >= needed {
                        break;
                    }
                }
            }
        }
        available
    }

    /// Match a price-bounded quantity request against resting liquidity.
    ///
    /// Consumes the opposite side best level first, FIFO within each level.
    /// `limit: None` disables the price gate. Fills are emitted in matching
    /// order at the resting orders' prices; fully filled passive orders and
    /// emptied levels are evicted as they occur.
    pub fn match_order(
        &mut self,
        aggressor_side: Side,
        quantity: Quantity,
        limit: Option<Price>,
        aggressor_id: OrderId,
    ) -> Vec<Fill> {
        match aggressor_side {
            Side::Buy => self.match_against_asks(quantity, limit, aggressor_id),
            Side::Sell => self.match_against_bids(quantity, limit, aggressor_id),
        }
    }

    /// Match an incoming buy against the ask side
    fn match_against_asks(
        &mut self,
        quantity: Quantity,
        limit: Option<Price>,
        aggressor_id: OrderId,
    ) -> Vec<Fill> {
        let mut fills = Vec::new();
        let mut remaining = quantity;

        while !remaining.is_zero() {
            let Some(best_price) = self.asks.best_price() else {
                break;
            };
            if !crate::matching::crossing::within_limit(Side::Buy, limit, best_price) {
                break;
            }

            if let Some(level) = self.asks.level_mut(best_price) {
                while !remaining.is_zero() {
                    let Some(head) = level.front() else {
                        break;
                    };
                    let passive_id = head.id;
                    let fill_quantity = remaining.min(head.remaining());

                    fills.push(Fill::new(
                        aggressor_id,
                        passive_id,
                        self.symbol.clone(),
                        Side::Buy,
                        best_price,
                        fill_quantity,
                    ));

                    remaining = remaining - fill_quantity;
                    if let Some(filled_id) = level.fill_front(fill_quantity) {
                        self.index.remove(&filled_id);
                    }
                }
            }
            self.asks.remove_level_if_empty(best_price);
        }

        fills
    }

    /// Match an incoming sell against the bid side
    fn match_against_bids(
        &mut self,
        quantity: Quantity,
        limit: Option<Price>,
        aggressor_id: OrderId,
    ) -> Vec<Fill> {
        let mut fills = Vec::new();
        let mut remaining = quantity;

        while !remaining.is_zero() {
            let Some(best_price) = self.bids.best_price() else {
                break;
            };
            if !crate::matching::crossing::within_limit(Side::Sell, limit, best_price) {
                break;
            }

            if let Some(level) = self.bids.level_mut(best_price) {
                while !remaining.is_zero() {
                    let Some(head) = level.front() else {
                        break;
                    };
                    let passive_id = head.id;
                    let fill_quantity = remaining.min(head.remaining());

                    fills.push(Fill::new(
                        aggressor_id,
                        passive_id,
                        self.symbol.clone(),
                        Side::Sell,
                        best_price,
                        fill_quantity,
                    ));

                    remaining = remaining - fill_quantity;
                    if let Some(filled_id) = level.fill_front(fill_quantity) {
                        self.index.remove(&filled_id);
                    }
                }
            }
            self.bids.remove_level_if_empty(best_price);
        }

        fills
    }

    /// Number of resting buy orders
    pub fn bid_order_count(&self) -> usize {
        self.bids.order_count()
    }

    /// Number of resting sell orders
    pub fn ask_order_count(&self) -> usize {
        self.asks.order_count()
    }

    /// Number of resting orders on both sides
    pub fn total_order_count(&self) -> usize {
        self.index.len()
    }
}
