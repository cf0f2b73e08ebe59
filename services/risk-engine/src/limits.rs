//! Risk limit configuration
//!
//! Per-symbol limits fall back to engine-wide defaults when unset.
//! Global limits and the order-rate limit use 0 to mean "no check".

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::ids::Symbol;
use types::numeric::Quantity;

/// Default per-symbol position limit (absolute shares)
pub const DEFAULT_POSITION_LIMIT: i64 = 100_000;
/// Default per-symbol order size limit (shares)
pub const DEFAULT_ORDER_SIZE_LIMIT: i64 = 10_000;
/// Default per-symbol notional limit
pub const DEFAULT_NOTIONAL_LIMIT: i64 = 10_000_000;

/// Limit tables consulted by the pre-trade checks
#[derive(Debug, Clone)]
pub struct RiskLimits {
    position_limits: HashMap<Symbol, i64>,
    order_size_limits: HashMap<Symbol, Quantity>,
    notional_limits: HashMap<Symbol, Decimal>,

    // 0 / zero means unset
    global_position_limit: i64,
    global_notional_limit: Decimal,
    order_rate_limit: u64,
}

impl RiskLimits {
    pub fn new() -> Self {
        Self {
            position_limits: HashMap::new(),
            order_size_limits: HashMap::new(),
            notional_limits: HashMap::new(),
            global_position_limit: 0,
            global_notional_limit: Decimal::ZERO,
            order_rate_limit: 0,
        }
    }

    pub fn set_position_limit(&mut self, symbol: Symbol, limit: i64) {
        self.position_limits.insert(symbol, limit);
    }

    pub fn position_limit(&self, symbol: &Symbol) -> i64 {
        self.position_limits
            .get(symbol)
            .copied()
            .unwrap_or(DEFAULT_POSITION_LIMIT)
    }

    pub fn set_order_size_limit(&mut self, symbol: Symbol, limit: Quantity) {
        self.order_size_limits.insert(symbol, limit);
    }

    pub fn order_size_limit(&self, symbol: &Symbol) -> Quantity {
        self.order_size_limits
            .get(symbol)
            .copied()
            .unwrap_or(Quantity::new(DEFAULT_ORDER_SIZE_LIMIT))
    }

    pub fn set_notional_limit(&mut self, symbol: Symbol, limit: Decimal) {
        self.notional_limits.insert(symbol, limit);
    }

    pub fn notional_limit(&self, symbol: &Symbol) -> Decimal {
        self.notional_limits
            .get(symbol)
            .copied()
            .unwrap_or_else(|| Decimal::from(DEFAULT_NOTIONAL_LIMIT))
    }

    pub fn set_global_position_limit(&mut self, limit: i64) {
        self.global_position_limit = limit;
    }

    pub fn global_position_limit(&self) -> i64 {
        self.global_position_limit
    }

    pub fn set_global_notional_limit(&mut self, limit: Decimal) {
        self.global_notional_limit = limit;
    }

    pub fn global_notional_limit(&self) -> Decimal {
        self.global_notional_limit
    }

    pub fn set_order_rate_limit(&mut self, orders_per_second: u64) {
        self.order_rate_limit = orders_per_second;
    }

    pub fn order_rate_limit(&self) -> u64 {
        self.order_rate_limit
    }
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self::new()
    }
}
