//! Single-order record and execution bookkeeping.
//!
//! [`Order`] is the mutable record of one resting order. The book mutates it
//! in place through [`Order::execute`] and [`Order::cancel`]; everything else
//! is plain data the gateway fills in and reads back.

use crate::types::{OrderStatus, OrderType, Side};
use rust_decimal::Decimal;

/// One order and its fill bookkeeping.
///
/// Prices and quantities are [`Decimal`]; repeated additions of fill
/// quantities must not accumulate rounding error.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Order {
    /// Client order id, unique per counterparty connection.
    pub cl_ord_id: String,
    pub symbol: String,
    /// Routing identifiers, opaque to the core. The gateway reverses them
    /// when it turns a fill or cancel snapshot into an outbound report.
    pub sender_comp_id: String,
    pub target_comp_id: String,
    pub side: Side,
    pub ord_type: OrderType,
    pub price: Decimal,
    /// Original order size. Never mutated after construction.
    pub quantity: Decimal,
    /// Cumulative filled size, monotonically non-decreasing.
    pub executed_quantity: Decimal,
    /// Volume-weighted average fill price, recomputed on every fill.
    pub avg_px: Decimal,
    /// Most recent single fill, for reporting.
    pub last_executed_price: Decimal,
    pub last_executed_quantity: Decimal,
    status: OrderStatus,
    /// Arrival stamp assigned by the book at insert; strictly increasing per
    /// book, so time priority among equal prices is never ambiguous.
    insert_seq: u64,
}

impl Order {
    /// Builds a new order from a parsed order message. Execution state starts
    /// empty; the arrival stamp is assigned when a book accepts the order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cl_ord_id: impl Into<String>,
        symbol: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
        side: Side,
        ord_type: OrderType,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            symbol: symbol.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
            side,
            ord_type,
            price,
            quantity,
            executed_quantity: Decimal::ZERO,
            avg_px: Decimal::ZERO,
            last_executed_price: Decimal::ZERO,
            last_executed_quantity: Decimal::ZERO,
            status: OrderStatus::New,
            insert_seq: 0,
        }
    }

    /// Unfilled remainder. Zero once canceled, independent of the arithmetic.
    pub fn open_quantity(&self) -> Decimal {
        if self.status == OrderStatus::Canceled {
            return Decimal::ZERO;
        }
        self.quantity - self.executed_quantity
    }

    /// True iff nothing is left to fill.
    pub fn is_closed(&self) -> bool {
        self.open_quantity().is_zero()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Applies one fill. Thin primitive: the caller guarantees
    /// `quantity <= open_quantity()`; no bounds check is performed here.
    pub fn execute(&mut self, price: Decimal, quantity: Decimal) {
        let executed = self.executed_quantity + quantity;
        if !executed.is_zero() {
            self.avg_px = (self.avg_px * self.executed_quantity + price * quantity) / executed;
        }
        self.executed_quantity = executed;
        self.last_executed_price = price;
        self.last_executed_quantity = quantity;
        self.status = if self.executed_quantity >= self.quantity {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
    }

    /// Marks the order canceled. Idempotent; `executed_quantity` keeps its
    /// value so the fill history stays readable after cancellation.
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Canceled;
    }

    pub(crate) fn insert_seq(&self) -> u64 {
        self.insert_seq
    }

    pub(crate) fn set_insert_seq(&mut self, seq: u64) {
        self.insert_seq = seq;
    }
}
