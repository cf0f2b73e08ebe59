//! Price level implementation with FIFO queue
//!
//! A price level owns all resting orders at a specific price. Orders are
//! maintained in FIFO order to enforce time priority; the cached total
//! always equals the sum of resting remainders.

use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

/// A price level owning the resting orders at one price
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    /// Queue of resting orders (FIFO order)
    orders: VecDeque<Order>,
    /// Total remaining quantity at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Append an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        debug_assert_eq!(order.price, self.price);
        self.total_quantity = self.total_quantity + order.remaining();
        self.orders.push_back(order);
    }

    /// Remove an order from the queue by id
    ///
    /// Returns the removed order, or None if not found
    pub fn remove(&mut self, order_id: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.id == order_id)?;
        let order = self.orders.remove(position)?;
        self.total_quantity = self.total_quantity - order.remaining();
        Some(order)
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Fill the front order by the given quantity.
    ///
    /// If the front order becomes fully filled it is evicted and its id is
    /// returned so the caller can drop its index entry.
    pub fn fill_front(&mut self, quantity: Quantity) -> Option<OrderId> {
        let head = self.orders.front_mut()?;
        head.apply_fill(quantity);
        self.total_quantity = self.total_quantity - quantity;

        if head.is_filled() {
            let id = head.id;
            self.orders.pop_front();
            return Some(id);
        }
        None
    }

    /// Change an order's total quantity in place, preserving its queue slot.
    ///
    /// Rejects a new quantity at or below the already-filled amount: that
    /// would leave a resting order with nothing remaining.
    pub fn modify_quantity(&mut self, order_id: OrderId, new_quantity: Quantity) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return false;
        };
        if new_quantity <= order.filled {
            return false;
        }

        let old_remaining = order.remaining();
        order.quantity = new_quantity;
        self.total_quantity = self.total_quantity - old_remaining + order.remaining();
        true
    }

    /// Look up an order by id
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Iterate resting orders in time priority
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total remaining quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
