//! Synthetic order stream for tests and benchmarks.
//!
//! Deterministic, seeded stream of limit orders for one symbol. Same config
//! (including seed) produces the same sequence, so replay-based tests and
//! benchmarks are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::order::Order;
use crate::types::{OrderType, Side};

/// Configuration for the synthetic order stream. All ranges are inclusive.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// RNG seed. Same seed, same stream.
    pub seed: u64,
    /// Symbol stamped on every generated order.
    pub symbol: String,
    /// Number of orders produced by [`Feed::all_orders`].
    pub num_orders: usize,
    /// Probability of Buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Limit price band, whole ticks.
    pub price_min: i64,
    pub price_max: i64,
    /// Quantity band, whole units.
    pub quantity_min: u64,
    pub quantity_max: u64,
    /// Number of distinct counterparties (sender comp ids CLIENT1..=CLIENTn).
    pub num_parties: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            symbol: "ABC".into(),
            num_orders: 1000,
            buy_ratio: 0.5,
            price_min: 95,
            price_max: 105,
            quantity_min: 1,
            quantity_max: 100,
            num_parties: 5,
        }
    }
}

/// Deterministic order stream. Create with [`Feed::new`], pull orders with
/// [`Feed::next_order`] or collect with [`Feed::all_orders`].
pub struct Feed {
    rng: StdRng,
    config: FeedConfig,
    next_id: u64,
}

impl Feed {
    pub fn new(config: FeedConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            rng,
            config,
            next_id: 1,
        }
    }

    /// Generates the next order, advancing the RNG and id counter.
    pub fn next_order(&mut self) -> Order {
        let id = self.next_id;
        self.next_id += 1;
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            Side::Buy
        } else {
            Side::Sell
        };
        let price = self
            .rng
            .gen_range(self.config.price_min..=self.config.price_max);
        let quantity = self
            .rng
            .gen_range(self.config.quantity_min..=self.config.quantity_max);
        let party = self.rng.gen_range(1..=self.config.num_parties.max(1));
        Order::new(
            format!("feed-{}", id),
            self.config.symbol.clone(),
            format!("CLIENT{}", party),
            "MATCHER",
            side,
            OrderType::Limit,
            Decimal::from(price),
            Decimal::from(quantity),
        )
    }

    /// Exactly `n` orders, advancing the stream.
    pub fn take_orders(&mut self, n: usize) -> Vec<Order> {
        (0..n).map(|_| self.next_order()).collect()
    }

    /// The full stream, as sized by `config.num_orders`.
    pub fn all_orders(&mut self) -> Vec<Order> {
        let n = self.config.num_orders;
        self.take_orders(n)
    }
}
