//! Automatic restock simulation.
//!
//! A producer thread generates synthetic deliveries on a fixed interval and
//! hands them to the caller over an mpsc channel. The caller drains the
//! receiver and applies each product to its store, so store mutations stay
//! serialized on a single thread; the store itself needs no locking.

use crate::model::Product;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Tuning for a restock run. Usually derived from
/// [`StockConfig::restock`](crate::config::StockConfig::restock).
#[derive(Debug, Clone, PartialEq)]
pub struct RestockSettings {
    pub batch: u32,
    pub interval: Duration,
    pub price_min: f64,
    pub price_max: f64,
}

pub struct RestockWorker {
    handle: JoinHandle<()>,
    stop: Arc<AtomicBool>,
}

impl RestockWorker {
    /// Spawn the producer thread. Products arrive on the returned receiver,
    /// one per interval, `settings.batch` in total.
    pub fn spawn(settings: RestockSettings) -> (Self, Receiver<Product>) {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || produce(settings, tx, flag));
        (Self { handle, stop }, rx)
    }

    /// Signal the producer and wait for it to exit. The flag is checked
    /// around each sleep, so this blocks for at most one interval.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
    }

    /// Wait for the producer to deliver its whole batch.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

fn produce(settings: RestockSettings, tx: Sender<Product>, stop: Arc<AtomicBool>) {
    let mut rng = rand::thread_rng();

    for n in 1..=settings.batch {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        thread::sleep(settings.interval);
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let price = rng.gen_range(settings.price_min..=settings.price_max);
        let price = (price * 100.0).round() / 100.0;
        let product = Product::new(format!("restock-{}", n), price);

        // Receiver gone means the consumer lost interest; wind down.
        if tx.send(product).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::InventoryStore;

    fn fast_settings(batch: u32) -> RestockSettings {
        RestockSettings {
            batch,
            interval: Duration::from_millis(1),
            price_min: 10.0,
            price_max: 100.0,
        }
    }

    #[test]
    fn test_delivers_whole_batch() {
        let (worker, rx) = RestockWorker::spawn(fast_settings(3));

        let mut store = InMemoryStore::new();
        for product in rx {
            store.add(product).unwrap();
        }
        worker.join();

        let all = store.list_all().unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["restock-1", "restock-2", "restock-3"]);
    }

    #[test]
    fn test_prices_stay_in_range() {
        let (worker, rx) = RestockWorker::spawn(fast_settings(10));

        let products: Vec<_> = rx.iter().collect();
        worker.join();

        assert_eq!(products.len(), 10);
        for product in &products {
            assert!(
                (10.0..=100.0).contains(&product.price),
                "price out of range: {}",
                product.price
            );
            // Rounded to cents
            let cents = product.price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_stop_ends_run_early() {
        let settings = RestockSettings {
            batch: 100,
            interval: Duration::from_millis(5),
            price_min: 10.0,
            price_max: 100.0,
        };
        let (worker, rx) = RestockWorker::spawn(settings);

        // Wait for proof of life, then pull the plug
        let first = rx.recv().unwrap();
        assert_eq!(first.name, "restock-1");
        worker.stop();

        let rest: Vec<_> = rx.iter().collect();
        assert!(rest.len() < 99, "worker kept producing after stop");
    }

    #[test]
    fn test_dropped_receiver_ends_worker() {
        let (worker, rx) = RestockWorker::spawn(fast_settings(100));
        drop(rx);
        // Must return promptly rather than looping over a dead channel
        worker.join();
    }
}
