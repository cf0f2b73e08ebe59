//! Ask (sell-side) order book
//!
//! Maintains sell orders sorted by price ascending (best ask first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Ask (sell) side of the book
///
/// The lowest price is the best ask. At each price level, orders are
/// maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    /// Price levels; iteration is ascending, so best is first
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert an order, creating its price level if absent
    pub fn insert(&mut self, order: Order) {
        let level = self
            .levels
            .entry(order.price)
            .or_insert_with(|| PriceLevel::new(order.price));
        level.push_back(order);
    }

    /// Remove an order from the level at the given price
    ///
    /// Evicts the level if it becomes empty.
    pub fn remove(&mut self, order_id: OrderId, price: Price) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove(order_id);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        removed
    }

    /// Get the best ask (lowest price) as (price, level total)
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.levels
            .iter()
            .next()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Get the best ask price
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Get a level by price
    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    /// Get a mutable level by price
    pub fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Evict the level at the given price if it holds no orders
    pub fn remove_level_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(|l| l.is_empty()) {
            self.levels.remove(&price);
        }
    }

    /// Iterate levels from the best ask outward
    pub fn levels_from_best(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get the total number of resting orders
    pub fn order_count(&self) -> usize {
        self.levels.values().map(|l| l.order_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::Symbol;
    use types::order::{OrderType, Side};

    fn sell(id: u64, price: u64, qty: i64) -> Order {
        Order::new(
            OrderId::new(id),
            Symbol::new("AAPL"),
            Side::Sell,
            OrderType::Limit,
            Price::from_u64(price),
            Quantity::new(qty),
        )
    }

    #[test]
    fn test_best_is_lowest_price() {
        let mut book = AskBook::new();
        book.insert(sell(1, 150, 100));
        book.insert(sell(2, 151, 200));
        book.insert(sell(3, 152, 150));

        let (best_price, best_qty) = book.best().unwrap();
        assert_eq!(best_price, Price::from_u64(150));
        assert_eq!(best_qty, Quantity::new(100));
    }

    #[test]
    fn test_remove_evicts_empty_level() {
        let mut book = AskBook::new();
        book.insert(sell(1, 150, 100));
        book.insert(sell(2, 150, 50));

        book.remove(OrderId::new(1), Price::from_u64(150));
        assert_eq!(book.level_count(), 1);

        book.remove(OrderId::new(2), Price::from_u64(150));
        assert!(book.is_empty());
    }

    #[test]
    fn test_levels_from_best_ascends() {
        let mut book = AskBook::new();
        book.insert(sell(1, 152, 100));
        book.insert(sell(2, 150, 200));
        book.insert(sell(3, 151, 50));

        let prices: Vec<_> = book.levels_from_best().map(|l| l.price()).collect();
        assert_eq!(
            prices,
            vec![
                Price::from_u64(150),
                Price::from_u64(151),
                Price::from_u64(152)
            ]
        );
    }
}
