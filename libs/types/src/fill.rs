//! Trade execution types
//!
//! A fill records one trade event between the aggressor order and a single
//! passive order at one price. Fills are immutable once created.

use crate::ids::{FillId, OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use crate::time;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trade event between an aggressor and a passive order
///
/// The price is always the passive (resting) order's price — the aggressor
/// takes the book price, never its own limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub fill_id: FillId,
    pub aggressor_order_id: OrderId,
    pub passive_order_id: OrderId,
    pub symbol: Symbol,
    /// Side of the aggressor order
    pub aggressor_side: Side,
    /// Execution price (the passive order's resting price)
    pub price: Price,
    pub quantity: Quantity,
    /// Unix nanos
    pub timestamp: i64,
}

impl Fill {
    /// Create a new fill, stamped with the current time
    pub fn new(
        aggressor_order_id: OrderId,
        passive_order_id: OrderId,
        symbol: Symbol,
        aggressor_side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            fill_id: FillId::new(),
            aggressor_order_id,
            passive_order_id,
            symbol,
            aggressor_side,
            price,
            quantity,
            timestamp: time::now_nanos(),
        }
    }

    /// Fill notional (price × quantity)
    pub fn notional(&self) -> Decimal {
        self.quantity * self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_creation() {
        let fill = Fill::new(
            OrderId::new(3),
            OrderId::new(1),
            Symbol::new("AAPL"),
            Side::Buy,
            Price::from_u64(150),
            Quantity::new(100),
        );

        assert_eq!(fill.aggressor_order_id, OrderId::new(3));
        assert_eq!(fill.passive_order_id, OrderId::new(1));
        assert_eq!(fill.quantity, Quantity::new(100));
        assert!(fill.timestamp > 0);
    }

    #[test]
    fn test_fill_notional() {
        let fill = Fill::new(
            OrderId::new(3),
            OrderId::new(1),
            Symbol::new("AAPL"),
            Side::Sell,
            Price::from_str("150.5").unwrap(),
            Quantity::new(10),
        );

        assert_eq!(fill.notional(), Decimal::from(1505));
    }

    #[test]
    fn test_fill_ids_are_unique() {
        let f1 = Fill::new(
            OrderId::new(1),
            OrderId::new(2),
            Symbol::new("AAPL"),
            Side::Buy,
            Price::from_u64(150),
            Quantity::new(1),
        );
        let f2 = Fill::new(
            OrderId::new(1),
            OrderId::new(3),
            Symbol::new("AAPL"),
            Side::Buy,
            Price::from_u64(150),
            Quantity::new(1),
        );

        assert_ne!(f1.fill_id, f2.fill_id);
    }

    #[test]
    fn test_fill_serialization() {
        let fill = Fill::new(
            OrderId::new(3),
            OrderId::new(1),
            Symbol::new("AAPL"),
            Side::Buy,
            Price::from_u64(150),
            Quantity::new(100),
        );

        let json = serde_json::to_string(&fill).unwrap();
        let deserialized: Fill = serde_json::from_str(&json).unwrap();
        assert_eq!(fill, deserialized);
    }
}
