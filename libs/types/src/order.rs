//! Order lifecycle types

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use crate::time;
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Position sign: +1 for buys, -1 for sells
    pub fn sign(&self) -> i64 {
        match self {
            Side::Buy => 1,
            Side::Sell => -1,
        }
    }
}

/// Order execution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Execute at the specified price or better; residue rests in the book
    Limit,
    /// Execute at the best available price; residue is cancelled
    Market,
    /// Immediate-or-Cancel: match what is possible now, cancel the residue
    Ioc,
    /// Fill-or-Kill: match the full quantity immediately or do nothing
    Fok,
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted, no fills yet
    New,
    /// Partially matched
    PartiallyFilled,
    /// Completely matched (terminal)
    Filled,
    /// Cancelled by user or residue policy (terminal)
    Cancelled,
    /// Failed validation or a risk check (terminal)
    Rejected,
}

impl OrderStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled | OrderStatus::Cancelled | OrderStatus::Rejected
        )
    }
}

/// A limit-order-book order
///
/// `filled` is monotonically non-decreasing and never exceeds `quantity`.
/// A resting order always has `remaining() > 0` and an active status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: OrderType,
    /// Limit price; zero placeholder for market orders
    pub price: Price,
    /// Original order quantity
    pub quantity: Quantity,
    /// Quantity already filled
    pub filled: Quantity,
    pub status: OrderStatus,
    /// Unix nanos; set at creation, re-stamped by a price-changing modify
    pub timestamp: i64,
}

impl Order {
    /// Create a new order, stamped with the current time
    pub fn new(
        id: OrderId,
        symbol: Symbol,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            symbol,
            side,
            order_type,
            price,
            quantity,
            filled: Quantity::zero(),
            status: OrderStatus::New,
            timestamp: time::now_nanos(),
        }
    }

    /// Quantity still to be filled
    pub fn remaining(&self) -> Quantity {
        self.quantity - self.filled
    }

    /// Check if order is completely filled
    pub fn is_filled(&self) -> bool {
        self.filled >= self.quantity
    }

    /// Check if order can still be matched
    pub fn is_active(&self) -> bool {
        matches!(self.status, OrderStatus::New | OrderStatus::PartiallyFilled)
    }

    /// Apply a fill and adjust status
    pub fn apply_fill(&mut self, fill_quantity: Quantity) {
        debug_assert!(
            fill_quantity <= self.remaining(),
            "fill would exceed order quantity"
        );

        self.filled = self.filled + fill_quantity;

        if self.is_filled() {
            self.status = OrderStatus::Filled;
        } else if !self.filled.is_zero() {
            self.status = OrderStatus::PartiallyFilled;
        }
    }

    /// Cancel the order
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Cancelled;
    }

    /// Reject the order
    pub fn reject(&mut self) {
        self.status = OrderStatus::Rejected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order(qty: i64) -> Order {
        Order::new(
            OrderId::new(1),
            Symbol::new("AAPL"),
            Side::Buy,
            OrderType::Limit,
            Price::from_u64(150),
            Quantity::new(qty),
        )
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Buy.sign(), 1);
        assert_eq!(Side::Sell.sign(), -1);
    }

    #[test]
    fn test_order_creation() {
        let order = make_order(100);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.remaining(), Quantity::new(100));
        assert!(order.is_active());
        assert!(!order.is_filled());
        assert!(order.timestamp > 0);
    }

    #[test]
    fn test_order_partial_fill() {
        let mut order = make_order(100);
        order.apply_fill(Quantity::new(30));

        assert_eq!(order.status, OrderStatus::PartiallyFilled);
        assert_eq!(order.filled, Quantity::new(30));
        assert_eq!(order.remaining(), Quantity::new(70));
        assert!(order.is_active());
    }

    #[test]
    fn test_order_complete_fill() {
        let mut order = make_order(100);
        order.apply_fill(Quantity::new(30));
        order.apply_fill(Quantity::new(70));

        assert_eq!(order.status, OrderStatus::Filled);
        assert!(order.is_filled());
        assert!(!order.is_active());
        assert!(order.remaining().is_zero());
    }

    #[test]
    fn test_order_cancel() {
        let mut order = make_order(100);
        order.cancel();

        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.status.is_terminal());
        assert!(!order.is_active());
    }

    #[test]
    fn test_order_reject() {
        let mut order = make_order(100);
        order.reject();

        assert_eq!(order.status, OrderStatus::Rejected);
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_order_serialization() {
        let order = make_order(100);
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(order, deserialized);
        assert!(json.contains("\"BUY\""));
        assert!(json.contains("\"LIMIT\""));
        assert!(json.contains("\"NEW\""));
    }
}
