//! Multi-symbol registry: routes inserts, cancels, and match runs to the
//! per-symbol [`Book`], creating books lazily on first use.
//!
//! Books are never evicted once created; the registry is process-lifetime
//! state driven sequentially by the protocol gateway.

use crate::book::Book;
use crate::order::Order;
use crate::types::Side;
use log::info;
use std::collections::HashMap;

/// Symbol -> book registry, the gateway's single entry point into the core.
#[derive(Default)]
pub struct Matcher {
    books: HashMap<String, Book>,
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
        }
    }

    /// Inserts an order into the book for its symbol, creating the book on
    /// first sight of the symbol.
    pub fn insert(&mut self, order: Order) {
        info!(
            "order inserted cl_ord_id={} symbol={} side={:?} price={} quantity={}",
            order.cl_ord_id, order.symbol, order.side, order.price, order.quantity
        );
        self.books
            .entry(order.symbol.clone())
            .or_default()
            .insert(order);
    }

    /// Cancels by client order id. Returns `None` when the symbol has no book
    /// or the id is not resting on the named side.
    pub fn cancel(&mut self, cl_ord_id: &str, symbol: &str, side: Side) -> Option<Order> {
        let canceled = self.books.get_mut(symbol)?.cancel(cl_ord_id, side);
        if let Some(order) = &canceled {
            info!(
                "order canceled cl_ord_id={} symbol={} executed={}",
                order.cl_ord_id, order.symbol, order.executed_quantity
            );
        }
        canceled
    }

    /// Runs matching for one symbol. An unknown symbol yields no fills.
    pub fn match_orders(&mut self, symbol: &str) -> Vec<Order> {
        let Some(book) = self.books.get_mut(symbol) else {
            return Vec::new();
        };
        let matched = book.match_orders();
        for pair in matched.chunks(2) {
            if let [bid, offer] = pair {
                info!(
                    "fill symbol={} bid={} offer={} price={} quantity={}",
                    symbol,
                    bid.cl_ord_id,
                    offer.cl_ord_id,
                    offer.last_executed_price,
                    offer.last_executed_quantity
                );
            }
        }
        matched
    }

    /// Symbols with a book, for diagnostics and display tooling.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.books.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Read-only view of one symbol's book, for display tooling.
    pub fn book(&self, symbol: &str) -> Option<&Book> {
        self.books.get(symbol)
    }
}
