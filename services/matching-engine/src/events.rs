//! Observer callback surfaces
//!
//! The engine emits two synchronous streams: one fill event per trade and
//! one order-status event per submission outcome. Callbacks run inline on
//! the submitting thread, in emission order, before `submit_order` returns.
//! Re-entering the engine from a callback is undefined.

use types::fill::Fill;
use types::order::Order;

/// Callback invoked for every emitted fill
pub type FillCallback = Box<dyn FnMut(&Fill)>;

/// Callback invoked on order status changes
pub type OrderCallback = Box<dyn FnMut(&Order)>;
