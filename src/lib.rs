//! # ordermatch
//!
//! In-memory order matching core: per-symbol limit order books under
//! price-time priority. The core accepts fully-parsed order intents, runs the
//! matching loop, and hands back post-fill order snapshots; it performs no
//! network I/O, no persistence, and no message formatting. The protocol
//! gateway that feeds it is an external collaborator.
//!
//! ## Entry point
//!
//! Use [`Matcher`] as the single entry point: [`Matcher::insert`] to rest an
//! order, [`Matcher::match_orders`] to cross the book, [`Matcher::cancel`] to
//! pull an order.
//!
//! ## Example
//!
//! ```rust
//! use ordermatch::{Matcher, Order, OrderType, Side};
//! use rust_decimal::Decimal;
//!
//! let mut matcher = Matcher::new();
//! matcher.insert(Order::new(
//!     "B1", "ABC", "CLIENT1", "MATCHER",
//!     Side::Buy, OrderType::Limit,
//!     Decimal::from(100), Decimal::from(10),
//! ));
//! matcher.insert(Order::new(
//!     "S1", "ABC", "CLIENT2", "MATCHER",
//!     Side::Sell, OrderType::Limit,
//!     Decimal::from(100), Decimal::from(10),
//! ));
//! let fills = matcher.match_orders("ABC");
//! assert_eq!(fills.len(), 2); // one pair: bid snapshot, then offer snapshot
//! assert!(fills.iter().all(|o| o.is_closed()));
//! ```
//!
//! ## Lower-level API
//!
//! [`Book`] is usable directly for a single symbol if you do not need the
//! registry.

pub mod book;
pub mod feed;
pub mod matcher;
pub mod order;
pub mod types;

pub use book::Book;
pub use feed::{Feed, FeedConfig};
pub use matcher::Matcher;
pub use order::Order;
pub use types::{OrderStatus, OrderType, Side};
