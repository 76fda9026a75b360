//! Order stages and tracking state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// Stages an order moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStage {
    /// Order received.
    Confirmed = 1,
    /// Canteen accepted the order.
    Accepted = 2,
    /// Food being prepared.
    Preparing = 3,
    /// Waiting at the counter.
    ReadyForPickup = 4,
    /// Picked up.
    Completed = 5,
}

impl OrderStage {
    /// All stages, first to last.
    pub const ALL: [OrderStage; 5] = [
        OrderStage::Confirmed,
        OrderStage::Accepted,
        OrderStage::Preparing,
        OrderStage::ReadyForPickup,
        OrderStage::Completed,
    ];

    /// Get the stage number (1-indexed).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Stage for a 1-indexed number.
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1..=5 => Some(Self::ALL[usize::from(rank) - 1]),
            _ => None,
        }
    }

    /// The following stage, or `None` at the end.
    pub fn next(&self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// Check if no further stage follows.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStage::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStage::Confirmed => "confirmed",
            OrderStage::Accepted => "accepted",
            OrderStage::Preparing => "preparing",
            OrderStage::ReadyForPickup => "ready_for_pickup",
            OrderStage::Completed => "completed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OrderStage::Confirmed => "Order Confirmed",
            OrderStage::Accepted => "Order Accepted",
            OrderStage::Preparing => "Preparing",
            OrderStage::ReadyForPickup => "Ready for Pickup",
            OrderStage::Completed => "Completed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OrderStage::Confirmed => "Your order has been received",
            OrderStage::Accepted => "Restaurant has accepted your order",
            OrderStage::Preparing => "Your food is being prepared",
            OrderStage::ReadyForPickup => "Your order is ready for pickup",
            OrderStage::Completed => "Order completed successfully",
        }
    }
}

impl std::fmt::Display for OrderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A placed order and how far along it is.
///
/// The total is fixed at checkout. The stage only ever moves forward, one
/// step at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTrackingState {
    order_id: OrderId,
    total: Money,
    stage: OrderStage,
}

impl OrderTrackingState {
    /// Start tracking at the first stage.
    pub fn new(order_id: OrderId, total: Money) -> Self {
        Self {
            order_id,
            total,
            stage: OrderStage::Confirmed,
        }
    }

    /// Order number.
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Total charged at checkout.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Current stage.
    pub fn stage(&self) -> OrderStage {
        self.stage
    }

    /// Move to the next stage. Returns the new stage, or `None` if already
    /// terminal.
    pub fn advance(&mut self) -> Option<OrderStage> {
        let next = self.stage.next()?;
        self.stage = next;
        Some(next)
    }

    /// Check if the order is complete.
    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Every stage paired with whether it has been reached.
    pub fn timeline(&self) -> Vec<(OrderStage, bool)> {
        OrderStage::ALL
            .iter()
            .map(|s| (*s, *s <= self.stage))
            .collect()
    }
}

/// Turn the cart into a tracked order.
///
/// Draws a six-digit order number and copies the cart total. The cart is
/// left as it is.
pub fn place_order<R>(cart: &CartStore, rng: &mut R) -> Result<OrderTrackingState, CommerceError>
where
    R: Rng + ?Sized,
{
    if cart.is_empty() {
        return Err(CommerceError::CartEmpty);
    }
    let order_id = OrderId::random(rng);
    let total = cart.total();
    tracing::info!(order_id = %order_id, total = %total, items = cart.item_count(), "Order placed");
    Ok(OrderTrackingState::new(order_id, total))
}
