//! Error taxonomy for the risk gate
//!
//! Risk rejections are values carried back to the engine, never panics.
//! Book and lookup failures use boolean/Option returns at the API boundary
//! and are not represented here.

use crate::ids::Symbol;
use crate::numeric::Quantity;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reason an order was rejected by the pre-trade risk gate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("order rate limit exceeded: {limit} orders/sec")]
    RateLimitExceeded { limit: u64 },

    #[error("order size limit exceeded for {symbol}: {quantity} > {limit}")]
    OrderSizeLimitExceeded {
        symbol: Symbol,
        quantity: Quantity,
        limit: Quantity,
    },

    #[error("position limit exceeded for {symbol}: |{new_position}| > {limit}")]
    PositionLimitExceeded {
        symbol: Symbol,
        new_position: i64,
        limit: i64,
    },

    #[error("global position limit exceeded: {total} > {limit}")]
    GlobalPositionLimitExceeded { total: i64, limit: i64 },

    #[error("notional limit exceeded for {symbol}: |{new_exposure}| > {limit}")]
    NotionalLimitExceeded {
        symbol: Symbol,
        new_exposure: Decimal,
        limit: Decimal,
    },

    #[error("global notional limit exceeded: {total} > {limit}")]
    GlobalNotionalLimitExceeded { total: Decimal, limit: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_error_display() {
        let err = RiskError::RateLimitExceeded { limit: 100 };
        assert_eq!(err.to_string(), "order rate limit exceeded: 100 orders/sec");
    }

    #[test]
    fn test_order_size_error_display() {
        let err = RiskError::OrderSizeLimitExceeded {
            symbol: Symbol::new("AAPL"),
            quantity: Quantity::new(20_000),
            limit: Quantity::new(10_000),
        };
        assert!(err.to_string().contains("AAPL"));
        assert!(err.to_string().contains("20000"));
    }

    #[test]
    fn test_position_error_display() {
        let err = RiskError::PositionLimitExceeded {
            symbol: Symbol::new("MSFT"),
            new_position: -150_000,
            limit: 100_000,
        };
        assert!(err.to_string().contains("-150000"));
    }
}
