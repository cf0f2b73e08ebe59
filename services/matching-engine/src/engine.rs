//! Matching engine core
//!
//! Orchestrator for the per-symbol books: routes submissions through the
//! risk gate, matches against resting liquidity, applies the order-type
//! residue policy, feeds fills back to risk accounting, and notifies
//! observers. Single-threaded; all work completes before a call returns.

use std::collections::HashMap;
use tracing::{debug, warn};
use types::fill::Fill;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType};

use risk_engine::RiskManager;

use crate::book::OrderBook;
use crate::events::{FillCallback, OrderCallback};

/// Price-time priority matching engine
pub struct MatchingEngine {
    /// Order books per symbol, created lazily on first submission
    books: HashMap<Symbol, OrderBook>,
    risk_manager: Option<RiskManager>,

    fill_callback: Option<FillCallback>,
    order_callback: Option<OrderCallback>,

    total_orders: u64,
    total_fills: u64,

    /// Set while callbacks run; guards against re-entrant engine calls
    notifying: bool,
}

impl MatchingEngine {
    /// Create a new engine with no books and no risk gate
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
            risk_manager: None,
            fill_callback: None,
            order_callback: None,
            total_orders: 0,
            total_fills: 0,
            notifying: false,
        }
    }

    /// Submit an order for matching.
    ///
    /// The order is risk-checked, matched against the book, and its residue
    /// handled per order type. Returns the fills generated for the
    /// aggressor, in price-time order. Status and fill notifications fire
    /// inline before this returns.
    pub fn submit_order(&mut self, mut order: Order) -> Vec<Fill> {
        debug_assert!(!self.notifying, "engine re-entered from a callback");
        self.total_orders += 1;

        // Duplicate resting id is a caller error, not a risk rejection
        if self.is_duplicate(&order) {
            warn!(order_id = %order.id, symbol = %order.symbol, "duplicate order id");
            order.reject();
            self.notify_order(&order);
            return Vec::new();
        }

        if let Some(risk) = self.risk_manager.as_mut() {
            if let Err(reason) = risk.check_order(&order) {
                warn!(order_id = %order.id, %reason, "order rejected by risk gate");
                order.reject();
                self.notify_order(&order);
                return Vec::new();
            }
        }

        // Market orders bypass the price gate entirely
        let effective_limit = match order.order_type {
            OrderType::Market => None,
            _ => Some(order.price),
        };

        self.books
            .entry(order.symbol.clone())
            .or_insert_with(|| OrderBook::new(order.symbol.clone()));

        // Fill-or-kill is all-or-nothing: peek at reachable liquidity and
        // kill the whole order if it cannot complete
        if order.order_type == OrderType::Fok {
            let available = self.books[&order.symbol].available_quantity(
                order.side,
                effective_limit,
                order.remaining(),
            );
            if available < order.remaining() {
                debug!(order_id = %order.id, %available, "fill-or-kill order killed");
                order.cancel();
                self.notify_order(&order);
                return Vec::new();
            }
        }

        let book = self
            .books
            .get_mut(&order.symbol)
            .expect("book created above");
        let fills = book.match_order(order.side, order.remaining(), effective_limit, order.id);

        for fill in &fills {
            order.apply_fill(fill.quantity);
            self.total_fills += 1;
            self.notify_fill(fill);
            if let Some(risk) = self.risk_manager.as_mut() {
                risk.apply_fill(&fill.symbol, fill.aggressor_side, fill.quantity, fill.price);
            }
        }

        // Residue policy
        if !order.remaining().is_zero() {
            match order.order_type {
                OrderType::Limit => {
                    let book = self
                        .books
                        .get_mut(&order.symbol)
                        .expect("book created above");
                    let rested = book.add_order(order.clone());
                    debug_assert!(rested, "residual limit order failed to rest");
                    debug!(order_id = %order.id, remaining = %order.remaining(), "residual rested");
                }
                OrderType::Market | OrderType::Ioc | OrderType::Fok => {
                    order.cancel();
                }
            }
        }

        self.notify_order(&order);
        fills
    }

    /// Cancel a resting order
    ///
    /// Returns false on unknown symbol or id.
    pub fn cancel_order(&mut self, symbol: &Symbol, order_id: OrderId) -> bool {
        debug_assert!(!self.notifying, "engine re-entered from a callback");
        let Some(book) = self.books.get_mut(symbol) else {
            return false;
        };
        book.cancel_order(order_id)
    }

    /// Modify a resting order; `None` leaves a field unchanged
    ///
    /// Returns false on unknown symbol or id, or an invalid new quantity.
    pub fn modify_order(
        &mut self,
        symbol: &Symbol,
        order_id: OrderId,
        new_price: Option<Price>,
        new_quantity: Option<Quantity>,
    ) -> bool {
        debug_assert!(!self.notifying, "engine re-entered from a callback");
        let Some(book) = self.books.get_mut(symbol) else {
            return false;
        };
        book.modify_order(order_id, new_price, new_quantity)
    }

    /// Get the order book for a symbol, if one exists
    pub fn get_order_book(&self, symbol: &Symbol) -> Option<&OrderBook> {
        self.books.get(symbol)
    }

    /// Get or lazily create the order book for a symbol
    pub fn get_or_create_order_book(&mut self, symbol: &Symbol) -> &mut OrderBook {
        self.books
            .entry(symbol.clone())
            .or_insert_with(|| OrderBook::new(symbol.clone()))
    }

    /// Install the fill callback, replacing any previous one
    pub fn set_fill_callback(&mut self, callback: impl FnMut(&Fill) + 'static) {
        self.fill_callback = Some(Box::new(callback));
    }

    /// Install the order-status callback, replacing any previous one
    pub fn set_order_callback(&mut self, callback: impl FnMut(&Order) + 'static) {
        self.order_callback = Some(Box::new(callback));
    }

    /// Install the pre-trade risk gate
    pub fn set_risk_manager(&mut self, risk_manager: RiskManager) {
        self.risk_manager = Some(risk_manager);
    }

    pub fn risk_manager(&self) -> Option<&RiskManager> {
        self.risk_manager.as_ref()
    }

    pub fn risk_manager_mut(&mut self) -> Option<&mut RiskManager> {
        self.risk_manager.as_mut()
    }

    /// Count of submissions, including rejected ones
    pub fn total_orders_processed(&self) -> u64 {
        self.total_orders
    }

    /// Count of emitted fills
    pub fn total_fills_generated(&self) -> u64 {
        self.total_fills
    }

    fn is_duplicate(&self, order: &Order) -> bool {
        self.books
            .get(&order.symbol)
            .is_some_and(|book| book.get_order(order.id).is_some())
    }

    fn notify_fill(&mut self, fill: &Fill) {
        if let Some(callback) = self.fill_callback.as_mut() {
            self.notifying = true;
            callback(fill);
            self.notifying = false;
        }
    }

    fn notify_order(&mut self, order: &Order) {
        if let Some(callback) = self.order_callback.as_mut() {
            self.notifying = true;
            callback(order);
            self.notifying = false;
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
