#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use restaurant_analytics::db::repositories::LocalRepository;
use restaurant_analytics::models::{parse_order_time, Order, Restaurant};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the
/// process-global environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn order(id: i64, restaurant_id: i64, time: &str, amount: f64) -> Order {
    Order::new(
        id,
        restaurant_id,
        parse_order_time(time).expect("valid fixture timestamp"),
        amount,
    )
}

/// Four restaurants; "Sushi Place" in Tokyo is id 2.
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new(1, "Tandoori Treats", "Bangalore", "North Indian"),
        Restaurant::new(2, "Sushi Place", "Tokyo", "Japanese"),
        Restaurant::new(3, "Pasta Corner", "Rome", "Italian"),
        Restaurant::new(4, "Burger Hub", "Chicago", "American"),
    ]
}

/// Orders in the week of 2025-06-22 plus two outside it.
///
/// Week revenue: 1 => 300, 2 => 450, 3 => 120, 4 => 0.
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(1, 1, "2025-06-22T12:00:00", 100.0),
        order(2, 1, "2025-06-23T19:30:00", 200.0),
        order(3, 2, "2025-06-23T10:00:00", 150.0),
        order(4, 2, "2025-06-23T14:00:00", 100.0),
        order(5, 2, "2025-06-25T19:10:00", 200.0),
        order(6, 3, "2025-06-28T23:59:59", 120.0),
        order(7, 4, "2025-06-21T12:00:00", 999.0),
        order(8, 3, "2025-06-29T00:00:00", 80.0),
    ]
}

pub fn sample_repository() -> LocalRepository {
    LocalRepository::with_data(sample_restaurants(), sample_orders())
}

/// Write `restaurants.json` and `orders.json` into `dir`.
pub fn write_dataset(dir: &Path, restaurants: &[Restaurant], orders: &[Order]) {
    std::fs::write(
        dir.join("restaurants.json"),
        serde_json::to_vec_pretty(restaurants).expect("encode restaurants"),
    )
    .expect("write restaurants.json");
    std::fs::write(
        dir.join("orders.json"),
        serde_json::to_vec_pretty(orders).expect("encode orders"),
    )
    .expect("write orders.json");
}
