//! Single-symbol order book: bids and offers under price-time priority.
//!
//! Each side is an ordered list of resting [`Order`]s; best bid is highest
//! price, best offer is lowest, FIFO among equal prices. [`Book::match_orders`]
//! crosses the top of book and returns post-fill snapshots.

use crate::order::Order;
use crate::types::Side;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// One side of the book. `better` decides price priority between two orders;
/// arrival order breaks ties.
struct SideList {
    orders: Vec<Order>,
    better: fn(&Decimal, &Decimal) -> Ordering,
}

impl SideList {
    fn new(better: fn(&Decimal, &Decimal) -> Ordering) -> Self {
        Self {
            orders: Vec::new(),
            better,
        }
    }

    /// Ordered insert: after every call the list is sorted by (price priority,
    /// arrival). Arrival stamps are strictly increasing, so a new order lands
    /// behind everything already resting at its price.
    fn insert(&mut self, order: Order) {
        let better = self.better;
        let idx = self.orders.partition_point(|resting| {
            match better(&resting.price, &order.price) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => resting.insert_seq() < order.insert_seq(),
            }
        });
        self.orders.insert(idx, order);
    }

    fn remove(&mut self, cl_ord_id: &str) -> Option<Order> {
        let idx = self
            .orders
            .iter()
            .position(|o| o.cl_ord_id == cl_ord_id)?;
        Some(self.orders.remove(idx))
    }
}

fn bid_priority(a: &Decimal, b: &Decimal) -> Ordering {
    // Higher bid is better.
    b.cmp(a)
}

fn offer_priority(a: &Decimal, b: &Decimal) -> Ordering {
    // Lower offer is better.
    a.cmp(b)
}

/// Per-symbol limit order book.
pub struct Book {
    bids: SideList,
    offers: SideList,
    next_arrival: u64,
}

impl Book {
    pub fn new() -> Self {
        Self {
            bids: SideList::new(bid_priority),
            offers: SideList::new(offer_priority),
            next_arrival: 0,
        }
    }

    /// Inserts an order on its side, stamping its arrival position. No
    /// validation of price or quantity happens here; the gateway supplies a
    /// well-formed limit order.
    pub fn insert(&mut self, mut order: Order) {
        order.set_insert_seq(self.next_arrival);
        self.next_arrival += 1;
        match order.side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.offers.insert(order),
        }
    }

    /// Removes the order with `cl_ord_id` from the named side, cancels it, and
    /// returns the snapshot. Unknown ids are a no-op, not a fault.
    pub fn cancel(&mut self, cl_ord_id: &str, side: Side) -> Option<Order> {
        let mut order = match side {
            Side::Buy => self.bids.remove(cl_ord_id),
            Side::Sell => self.offers.remove(cl_ord_id),
        }?;
        order.cancel();
        Some(order)
    }

    /// Runs the matching loop and returns post-execution snapshots, two per
    /// crossed pair (bid first, then offer).
    ///
    /// The trade price is always the resting offer's price; price improvement
    /// accrues to the bid. The loop runs whenever both sides are populated
    /// and does not compare bid and offer prices before crossing.
    pub fn match_orders(&mut self) -> Vec<Order> {
        let mut matched = Vec::new();
        while !self.bids.orders.is_empty() && !self.offers.orders.is_empty() {
            let best_bid = &mut self.bids.orders[0];
            let best_offer = &mut self.offers.orders[0];

            let price = best_offer.price;
            let quantity = best_bid.open_quantity().min(best_offer.open_quantity());

            best_bid.execute(price, quantity);
            best_offer.execute(price, quantity);

            matched.push(best_bid.clone());
            matched.push(best_offer.clone());

            if best_bid.is_closed() {
                self.bids.orders.remove(0);
            }
            if self.offers.orders[0].is_closed() {
                self.offers.orders.remove(0);
            }
        }
        matched
    }

    /// Resting bids, best first. Read-only, for display tooling.
    pub fn bids(&self) -> &[Order] {
        &self.bids.orders
    }

    /// Resting offers, best first.
    pub fn offers(&self) -> &[Order] {
        &self.offers.orders
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderStatus, OrderType};

    fn order(cl_ord_id: &str, side: Side, price: Decimal, qty: i64) -> Order {
        Order::new(
            cl_ord_id,
            "ABC",
            "CLIENT",
            "MATCHER",
            side,
            OrderType::Limit,
            price,
            Decimal::from(qty),
        )
    }

    fn at(price: i64) -> Decimal {
        Decimal::from(price)
    }

    #[test]
    fn bids_sort_best_price_first() {
        let mut book = Book::new();
        book.insert(order("b1", Side::Buy, at(99), 10));
        book.insert(order("b2", Side::Buy, at(101), 10));
        book.insert(order("b3", Side::Buy, at(100), 10));
        let prices: Vec<Decimal> = book.bids().iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![at(101), at(100), at(99)]);
    }

    #[test]
    fn offers_sort_best_price_first() {
        let mut book = Book::new();
        book.insert(order("s1", Side::Sell, at(101), 10));
        book.insert(order("s2", Side::Sell, at(99), 10));
        book.insert(order("s3", Side::Sell, at(100), 10));
        let prices: Vec<Decimal> = book.offers().iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![at(99), at(100), at(101)]);
    }

    #[test]
    fn equal_price_keeps_arrival_order() {
        let mut book = Book::new();
        book.insert(order("b1", Side::Buy, at(100), 10));
        book.insert(order("b2", Side::Buy, at(100), 10));
        book.insert(order("b3", Side::Buy, at(100), 10));
        let ids: Vec<&str> = book.bids().iter().map(|o| o.cl_ord_id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn cancel_removes_and_returns_closed_snapshot() {
        let mut book = Book::new();
        book.insert(order("b1", Side::Buy, at(100), 10));
        let canceled = book.cancel("b1", Side::Buy).expect("resting order");
        assert_eq!(canceled.status(), OrderStatus::Canceled);
        assert_eq!(canceled.open_quantity(), Decimal::ZERO);
        assert!(book.bids().is_empty());
    }

    #[test]
    fn cancel_unknown_id_is_none() {
        let mut book = Book::new();
        book.insert(order("b1", Side::Buy, at(100), 10));
        assert!(book.cancel("nope", Side::Buy).is_none());
        // Wrong side never finds the order either.
        assert!(book.cancel("b1", Side::Sell).is_none());
        assert_eq!(book.bids().len(), 1);
    }

    #[test]
    fn crossing_orders_trade_at_offer_price() {
        let mut book = Book::new();
        book.insert(order("B1", Side::Buy, Decimal::new(1000, 2), 100));
        book.insert(order("S1", Side::Sell, Decimal::new(950, 2), 60));

        let matched = book.match_orders();
        assert_eq!(matched.len(), 2);

        let bid = &matched[0];
        assert_eq!(bid.cl_ord_id, "B1");
        assert_eq!(bid.last_executed_price, Decimal::new(950, 2));
        assert_eq!(bid.last_executed_quantity, Decimal::from(60));
        assert_eq!(bid.executed_quantity, Decimal::from(60));
        assert_eq!(bid.open_quantity(), Decimal::from(40));

        let offer = &matched[1];
        assert_eq!(offer.cl_ord_id, "S1");
        assert_eq!(offer.executed_quantity, Decimal::from(60));
        assert!(offer.is_closed());

        // B1 keeps resting with its remainder; S1 is gone.
        assert_eq!(book.bids().len(), 1);
        assert_eq!(book.bids()[0].open_quantity(), Decimal::from(40));
        assert!(book.offers().is_empty());
    }

    #[test]
    fn time_priority_fills_earlier_bid_completely_first() {
        let mut book = Book::new();
        book.insert(order("B1", Side::Buy, at(100), 40));
        book.insert(order("B2", Side::Buy, at(100), 60));
        book.insert(order("S1", Side::Sell, at(100), 100));

        let matched = book.match_orders();
        // Two pairs: B1/S1 then B2/S1.
        assert_eq!(matched.len(), 4);
        assert_eq!(matched[0].cl_ord_id, "B1");
        assert_eq!(matched[0].last_executed_quantity, Decimal::from(40));
        assert!(matched[0].is_closed());
        assert_eq!(matched[2].cl_ord_id, "B2");
        assert_eq!(matched[2].last_executed_quantity, Decimal::from(60));
        assert!(book.bids().is_empty());
        assert!(book.offers().is_empty());
    }

    #[test]
    fn price_priority_beats_arrival_order() {
        let mut book = Book::new();
        book.insert(order("B1", Side::Buy, at(99), 10));
        book.insert(order("B2", Side::Buy, at(100), 10));
        book.insert(order("S1", Side::Sell, at(99), 10));

        let matched = book.match_orders();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].cl_ord_id, "B2", "better-priced bid fills first");
        assert_eq!(book.bids()[0].cl_ord_id, "B1");
    }

    #[test]
    fn closed_orders_never_reappear() {
        let mut book = Book::new();
        book.insert(order("B1", Side::Buy, at(100), 10));
        book.insert(order("S1", Side::Sell, at(100), 10));
        assert_eq!(book.match_orders().len(), 2);

        book.insert(order("S2", Side::Sell, at(100), 10));
        assert!(
            book.match_orders().is_empty(),
            "B1 was filled and must not match again"
        );
    }

    #[test]
    fn canceled_order_excluded_from_matching() {
        let mut book = Book::new();
        book.insert(order("B1", Side::Buy, at(100), 10));
        book.cancel("B1", Side::Buy).unwrap();
        book.insert(order("S1", Side::Sell, at(100), 10));
        assert!(book.match_orders().is_empty());
        assert_eq!(book.offers().len(), 1);
    }

    #[test]
    fn non_crossing_spread_still_trades_at_offer_price() {
        // Top of book is crossed unconditionally whenever both sides rest.
        let mut book = Book::new();
        book.insert(order("B1", Side::Buy, at(90), 10));
        book.insert(order("S1", Side::Sell, at(110), 10));
        let matched = book.match_orders();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].last_executed_price, at(110));
    }

    #[test]
    fn match_sweeps_multiple_price_levels() {
        let mut book = Book::new();
        book.insert(order("S1", Side::Sell, at(99), 30));
        book.insert(order("S2", Side::Sell, at(100), 30));
        book.insert(order("B1", Side::Buy, at(100), 60));

        let matched = book.match_orders();
        assert_eq!(matched.len(), 4);
        // First pair at the best offer, second at the next level.
        assert_eq!(matched[1].cl_ord_id, "S1");
        assert_eq!(matched[0].last_executed_price, at(99));
        assert_eq!(matched[3].cl_ord_id, "S2");
        assert_eq!(matched[2].last_executed_price, at(100));
        let bid = &matched[2];
        assert_eq!(bid.executed_quantity, Decimal::from(60));
        assert!(bid.is_closed());
        // avg px = (99*30 + 100*30) / 60
        assert_eq!(bid.avg_px, Decimal::new(995, 1));
    }

    #[test]
    fn empty_book_matches_nothing() {
        let mut book = Book::new();
        assert!(book.match_orders().is_empty());
        book.insert(order("B1", Side::Buy, at(100), 10));
        assert!(book.match_orders().is_empty(), "one-sided book cannot cross");
    }
}
