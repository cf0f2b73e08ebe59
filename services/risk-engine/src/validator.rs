//! Pre-trade checks
//!
//! Each check computes the hypothetical post-fill state from the current
//! ledger and rejects when a limit would be breached. Checks are pure reads;
//! nothing here mutates accounting.

use rust_decimal::Decimal;
use types::errors::RiskError;
use types::order::Order;

use crate::exposure::ExposureLedger;
use crate::limits::RiskLimits;

/// Reject orders larger than the per-symbol order size limit
pub fn check_order_size(limits: &RiskLimits, order: &Order) -> Result<(), RiskError> {
    let limit = limits.order_size_limit(&order.symbol);
    if order.quantity > limit {
        return Err(RiskError::OrderSizeLimitExceeded {
            symbol: order.symbol.clone(),
            quantity: order.quantity,
            limit,
        });
    }
    Ok(())
}

/// Reject orders whose hypothetical new position breaches the per-symbol or
/// global position limit
pub fn check_position(
    limits: &RiskLimits,
    ledger: &ExposureLedger,
    order: &Order,
) -> Result<(), RiskError> {
    let current = ledger.position(&order.symbol);
    let new_position = current + order.side.sign() * order.quantity.as_i64();

    let limit = limits.position_limit(&order.symbol);
    if new_position.abs() > limit {
        return Err(RiskError::PositionLimitExceeded {
            symbol: order.symbol.clone(),
            new_position,
            limit,
        });
    }

    let global_limit = limits.global_position_limit();
    if global_limit > 0 {
        let total = ledger.total_abs_position_with(&order.symbol, new_position);
        if total > global_limit {
            return Err(RiskError::GlobalPositionLimitExceeded {
                total,
                limit: global_limit,
            });
        }
    }

    Ok(())
}

/// Reject orders whose hypothetical new exposure breaches the per-symbol or
/// global notional limit
pub fn check_notional(
    limits: &RiskLimits,
    ledger: &ExposureLedger,
    order: &Order,
) -> Result<(), RiskError> {
    let current = ledger.notional_exposure(&order.symbol);
    let order_notional = order.quantity * order.price;
    let new_exposure = current + Decimal::from(order.side.sign()) * order_notional;

    let limit = limits.notional_limit(&order.symbol);
    if new_exposure.abs() > limit {
        return Err(RiskError::NotionalLimitExceeded {
            symbol: order.symbol.clone(),
            new_exposure,
            limit,
        });
    }

    let global_limit = limits.global_notional_limit();
    if global_limit > Decimal::ZERO {
        let total = ledger.total_abs_notional_with(&order.symbol, new_exposure);
        if total > global_limit {
            return Err(RiskError::GlobalNotionalLimitExceeded {
                total,
                limit: global_limit,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{OrderId, Symbol};
    use types::numeric::{Price, Quantity};
    use types::order::{OrderType, Side};

    fn make_order(side: Side, price: u64, qty: i64) -> Order {
        Order::new(
            OrderId::new(1),
            Symbol::new("AAPL"),
            side,
            OrderType::Limit,
            Price::from_u64(price),
            Quantity::new(qty),
        )
    }

    #[test]
    fn test_order_size_within_limit() {
        let limits = RiskLimits::new();
        let order = make_order(Side::Buy, 150, 10_000);
        assert!(check_order_size(&limits, &order).is_ok());
    }

    #[test]
    fn test_order_size_over_limit() {
        let limits = RiskLimits::new();
        let order = make_order(Side::Buy, 150, 10_001);
        assert!(matches!(
            check_order_size(&limits, &order),
            Err(RiskError::OrderSizeLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_position_check_uses_hypothetical() {
        let mut limits = RiskLimits::new();
        limits.set_position_limit(Symbol::new("AAPL"), 100);

        let mut ledger = ExposureLedger::new();
        ledger.apply_fill(
            &Symbol::new("AAPL"),
            Side::Buy,
            Quantity::new(80),
            Price::from_u64(150),
        );

        // 80 + 20 = 100, at the limit: passes
        let order = make_order(Side::Buy, 150, 20);
        assert!(check_position(&limits, &ledger, &order).is_ok());

        // 80 + 21 = 101: rejected
        let order = make_order(Side::Buy, 150, 21);
        assert!(matches!(
            check_position(&limits, &ledger, &order),
            Err(RiskError::PositionLimitExceeded { new_position: 101, .. })
        ));
    }

    #[test]
    fn test_position_check_short_side() {
        let mut limits = RiskLimits::new();
        limits.set_position_limit(Symbol::new("AAPL"), 100);

        let ledger = ExposureLedger::new();
        let order = make_order(Side::Sell, 150, 150);
        assert!(matches!(
            check_position(&limits, &ledger, &order),
            Err(RiskError::PositionLimitExceeded { new_position: -150, .. })
        ));
    }

    #[test]
    fn test_global_position_limit() {
        let mut limits = RiskLimits::new();
        limits.set_global_position_limit(500);

        let mut ledger = ExposureLedger::new();
        ledger.apply_fill(
            &Symbol::new("MSFT"),
            Side::Sell,
            Quantity::new(400),
            Price::from_u64(300),
        );

        // |200| + |-400| = 600 > 500
        let order = make_order(Side::Buy, 150, 200);
        assert!(matches!(
            check_position(&limits, &ledger, &order),
            Err(RiskError::GlobalPositionLimitExceeded { total: 600, .. })
        ));

        // Unset global limit skips the check
        limits.set_global_position_limit(0);
        assert!(check_position(&limits, &ledger, &order).is_ok());
    }

    #[test]
    fn test_notional_check() {
        let mut limits = RiskLimits::new();
        limits.set_notional_limit(Symbol::new("AAPL"), Decimal::from(10_000));

        let ledger = ExposureLedger::new();

        // 150 × 50 = 7500: passes
        let order = make_order(Side::Buy, 150, 50);
        assert!(check_notional(&limits, &ledger, &order).is_ok());

        // 150 × 100 = 15000: rejected
        let order = make_order(Side::Buy, 150, 100);
        assert!(matches!(
            check_notional(&limits, &ledger, &order),
            Err(RiskError::NotionalLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_notional_check_nets_against_exposure() {
        let mut limits = RiskLimits::new();
        limits.set_notional_limit(Symbol::new("AAPL"), Decimal::from(10_000));

        let mut ledger = ExposureLedger::new();
        ledger.apply_fill(
            &Symbol::new("AAPL"),
            Side::Buy,
            Quantity::new(60),
            Price::from_u64(150),
        );

        // Current exposure 9000; selling 40 × 150 nets to 3000: passes
        let order = make_order(Side::Sell, 150, 40);
        assert!(check_notional(&limits, &ledger, &order).is_ok());
    }

    #[test]
    fn test_global_notional_limit() {
        let mut limits = RiskLimits::new();
        limits.set_global_notional_limit(Decimal::from(20_000));

        let mut ledger = ExposureLedger::new();
        ledger.apply_fill(
            &Symbol::new("MSFT"),
            Side::Buy,
            Quantity::new(50),
            Price::from_u64(300),
        );

        // 15000 (MSFT) + 7500 (AAPL hypothetical) = 22500 > 20000
        let order = make_order(Side::Buy, 150, 50);
        assert!(matches!(
            check_notional(&limits, &ledger, &order),
            Err(RiskError::GlobalNotionalLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_market_order_has_zero_notional() {
        let limits = RiskLimits::new();
        let ledger = ExposureLedger::new();

        let order = Order::new(
            OrderId::new(1),
            Symbol::new("AAPL"),
            Side::Buy,
            OrderType::Market,
            Price::zero(),
            Quantity::new(100),
        );
        // Price 0 ⇒ notional 0 ⇒ always within limits
        assert!(check_notional(&limits, &ledger, &order).is_ok());
    }
}
