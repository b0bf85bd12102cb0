//! Order lifecycle status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Pending ───► Confirmed ───► Shipped ───► Delivered ───► Closed
///    │             │             │             │             ▲
///    ▼             ▼             ▼             ▼             │
/// Cancelled ◄──────┘          Returned ◄───────┘             │
///                                └───────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order has been placed and awaits confirmation.
    #[default]
    Pending,

    /// Order has been confirmed and awaits shipment.
    Confirmed,

    /// Order is in transit.
    Shipped,

    /// Order has reached the customer.
    Delivered,

    /// Order was sent back by the customer.
    Returned,

    /// Order was cancelled before shipment (terminal state).
    Cancelled,

    /// Order is settled (terminal state).
    Closed,
}

/// Error returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Returned,
        OrderStatus::Cancelled,
        OrderStatus::Closed,
    ];

    /// Resolves a status from external input, ignoring ASCII case.
    ///
    /// Surrounding whitespace is not stripped. Returns `None` when no status
    /// matches; the caller decides how to react.
    pub fn parse(name: &str) -> Option<OrderStatus> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the statuses reachable from this one in a single hop.
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered, OrderStatus::Returned],
            OrderStatus::Delivered => &[OrderStatus::Closed, OrderStatus::Returned],
            OrderStatus::Returned => &[OrderStatus::Closed],
            OrderStatus::Cancelled | OrderStatus::Closed => &[],
        }
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Closed)
    }

    /// Returns true if reaching this status stamps the fulfillment time.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Closed)
    }

    /// Returns the canonical status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Returned => "Returned",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
