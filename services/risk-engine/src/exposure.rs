//! Position and notional exposure ledger
//!
//! Tracks, per symbol, the signed position (long positive, short negative)
//! and the signed running sum of fill notionals. Updated only from applied
//! fills; the pre-trade checks read it to compute hypothetical state.

use rust_decimal::Decimal;
use std::collections::HashMap;
use types::ids::Symbol;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Per-symbol signed position and notional exposure
#[derive(Debug, Clone, Default)]
pub struct ExposureLedger {
    positions: HashMap<Symbol, i64>,
    notional_exposures: HashMap<Symbol, Decimal>,
}

impl ExposureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a fill to the ledger
    pub fn apply_fill(&mut self, symbol: &Symbol, side: Side, quantity: Quantity, price: Price) {
        let signed_quantity = side.sign() * quantity.as_i64();
        *self.positions.entry(symbol.clone()).or_insert(0) += signed_quantity;

        let signed_notional = Decimal::from(side.sign()) * (quantity * price);
        *self
            .notional_exposures
            .entry(symbol.clone())
            .or_insert(Decimal::ZERO) += signed_notional;
    }

    /// Signed position for a symbol (0 if never traded)
    pub fn position(&self, symbol: &Symbol) -> i64 {
        self.positions.get(symbol).copied().unwrap_or(0)
    }

    /// Signed notional exposure for a symbol (0 if never traded)
    pub fn notional_exposure(&self, symbol: &Symbol) -> Decimal {
        self.notional_exposures
            .get(symbol)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of absolute positions across all symbols, with the given symbol's
    /// position replaced by a hypothetical value
    pub fn total_abs_position_with(&self, symbol: &Symbol, hypothetical: i64) -> i64 {
        let mut total = hypothetical.abs();
        for (sym, pos) in &self.positions {
            if sym != symbol {
                total += pos.abs();
            }
        }
        total
    }

    /// Sum of absolute notional exposures across all symbols, with the given
    /// symbol's exposure replaced by a hypothetical value
    pub fn total_abs_notional_with(&self, symbol: &Symbol, hypothetical: Decimal) -> Decimal {
        let mut total = hypothetical.abs();
        for (sym, exposure) in &self.notional_exposures {
            if sym != symbol {
                total += exposure.abs();
            }
        }
        total
    }

    /// Sum of absolute notional exposures across all symbols
    pub fn total_notional_exposure(&self) -> Decimal {
        self.notional_exposures
            .values()
            .map(|exposure| exposure.abs())
            .sum()
    }

    /// Clear all accumulated positions and exposures
    pub fn clear(&mut self) {
        self.positions.clear();
        self.notional_exposures.clear();
    }
}
