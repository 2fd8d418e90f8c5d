//! Shared enums for the matching core.
//!
//! [`Side`] picks the book list an order rests on. [`OrderType`] is carried
//! opaquely for the gateway; the book applies the same price-time rules to
//! every order regardless of type. [`OrderStatus`] is the order lifecycle
//! state machine.

/// Order side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// Order type as received from the counterparty. The core matches everything
/// as a limit order; this field only travels back out on reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OrderType {
    Limit,
    Market,
}

/// Order lifecycle status.
///
/// `Canceled` is terminal and overrides the open-quantity arithmetic: a
/// canceled order reports zero open quantity while keeping its executed
/// quantity as a historical record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
}
