//! Risk manager — the pre-trade gate facade
//!
//! Ties together the limit tables, exposure ledger, and rate window.
//! `check_order` runs the checks in a fixed order and short-circuits on the
//! first failure: rate, order size, position, notional. Only the rate
//! counter mutates during a check; accounting moves only via `apply_fill`.

use rust_decimal::Decimal;
use tracing::debug;
use types::errors::RiskError;
use types::ids::Symbol;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::exposure::ExposureLedger;
use crate::limits::RiskLimits;
use crate::rate::RateWindow;
use crate::validator;

/// Pre-trade risk gate with post-fill position accounting
#[derive(Debug, Clone)]
pub struct RiskManager {
    limits: RiskLimits,
    ledger: ExposureLedger,
    rate: RateWindow,
}

impl RiskManager {
    pub fn new() -> Self {
        Self {
            limits: RiskLimits::new(),
            ledger: ExposureLedger::new(),
            rate: RateWindow::new(),
        }
    }

    /// Run all pre-trade checks against the current state.
    ///
    /// The rate counter is incremented iff the rate check passes; all other
    /// state is read-only here.
    pub fn check_order(&mut self, order: &Order) -> Result<(), RiskError> {
        let rate_limit = self.limits.order_rate_limit();
        if !self.rate.try_admit(rate_limit) {
            return Err(RiskError::RateLimitExceeded { limit: rate_limit });
        }

        validator::check_order_size(&self.limits, order)?;
        validator::check_position(&self.limits, &self.ledger, order)?;
        validator::check_notional(&self.limits, &self.ledger, order)?;

        Ok(())
    }

    /// Update position accounting with an executed fill
    pub fn apply_fill(&mut self, symbol: &Symbol, side: Side, quantity: Quantity, price: Price) {
        self.ledger.apply_fill(symbol, side, quantity, price);
        debug!(
            symbol = %symbol,
            position = self.ledger.position(symbol),
            "position updated"
        );
    }

    /// Clear positions, exposures, and the rate window. Limits are preserved.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.rate.reset();
    }

    // ── Limit configuration ──

    pub fn set_position_limit(&mut self, symbol: Symbol, limit: i64) {
        self.limits.set_position_limit(symbol, limit);
    }

    pub fn position_limit(&self, symbol: &Symbol) -> i64 {
        self.limits.position_limit(symbol)
    }

    pub fn set_order_size_limit(&mut self, symbol: Symbol, limit: Quantity) {
        self.limits.set_order_size_limit(symbol, limit);
    }

    pub fn order_size_limit(&self, symbol: &Symbol) -> Quantity {
        self.limits.order_size_limit(symbol)
    }

    pub fn set_notional_limit(&mut self, symbol: Symbol, limit: Decimal) {
        self.limits.set_notional_limit(symbol, limit);
    }

    pub fn notional_limit(&self, symbol: &Symbol) -> Decimal {
        self.limits.notional_limit(symbol)
    }

    pub fn set_order_rate_limit(&mut self, orders_per_second: u64) {
        self.limits.set_order_rate_limit(orders_per_second);
    }

    pub fn order_rate_limit(&self) -> u64 {
        self.limits.order_rate_limit()
    }

    pub fn set_global_position_limit(&mut self, limit: i64) {
        self.limits.set_global_position_limit(limit);
    }

    pub fn set_global_notional_limit(&mut self, limit: Decimal) {
        self.limits.set_global_notional_limit(limit);
    }

    // ── Position queries ──

    pub fn position(&self, symbol: &Symbol) -> i64 {
        self.ledger.position(symbol)
    }

    pub fn notional_exposure(&self, symbol: &Symbol) -> Decimal {
        self.ledger.notional_exposure(symbol)
    }

    pub fn total_notional_exposure(&self) -> Decimal {
        self.ledger.total_notional_exposure()
    }
}

impl Default for RiskManager {
    fn default() -> Self {
        Self::new()
    }
}
