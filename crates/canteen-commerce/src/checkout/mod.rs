//! Checkout module.
//!
//! Contains order placement, order stages, and the order tracker.

mod order;
mod tracker;

pub use order::{place_order, OrderStage, OrderTrackingState};
pub use tracker::{OrderTracker, TrackerSchedule, DEFAULT_DELAYS_MS};
