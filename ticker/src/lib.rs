//! Stock price notification: one subject holding the current price, a
//! list of subscribers told about every update. Displaying is a separate
//! capability from observing; a type may implement either or both.

use std::sync::{Arc, Mutex};
use tracing::debug;

/// Gets told about every price update.
pub trait Observer {
    fn price_updated(&mut self, price: f64);
}

/// Renders the price it last saw. Independent from [`Observer`].
pub trait DisplayElement {
    fn display_price(&self);
}

pub type SharedObserver = Arc<Mutex<dyn Observer + Send>>;

/// The observed subject: a stock with a current price, a stored alert
/// threshold and its subscriber list.
pub struct Stock {
    symbol: String,
    price: f64,
    threshold: f64,
    observers: Vec<SharedObserver>,
}

impl Stock {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: 0.0,
            threshold: 0.0,
            observers: Vec::new(),
        }
    }

    /// Registration is idempotent: a handle already on the list is not
    /// added twice.
    pub fn register(&mut self, observer: SharedObserver) {
        if !self
            .observers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &observer))
        {
            self.observers.push(observer);
        }
    }

    pub fn remove(&mut self, observer: SharedObserver) {
        self.observers
            .retain(|existing| !Arc::ptr_eq(existing, &observer));
    }

    /// Stores the new price and notifies every subscriber.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.notify();
    }

    /// Announces the current price to every subscriber. Runs on every
    /// [`Stock::set_price`]; calling it directly re-announces.
    pub fn notify(&self) {
        debug!(
            symbol = %self.symbol,
            price = self.price,
            observers = self.observers.len(),
            "Notifying observers"
        );
        for observer in &self.observers {
            observer.lock().unwrap().price_updated(self.price);
        }
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Observer without a display: announces updates straight to the console
/// and remembers the last price it saw.
pub struct Investor {
    name: String,
    symbol: String,
    last_price: f64,
}

impl Investor {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            last_price: 0.0,
        }
    }

    pub fn last_price(&self) -> f64 {
        self.last_price
    }
}

impl Observer for Investor {
    fn price_updated(&mut self, price: f64) {
        self.last_price = price;
        println!(
            "{} has been notified: {}'s price is now ${:.2}",
            self.name, self.symbol, price
        );
    }
}

/// Observer and display in one: remembers the latest price and renders
/// it on every update.
pub struct AppDisplay {
    symbol: String,
    price: f64,
}

impl AppDisplay {
    /// Creates the display already registered with `stock`.
    pub fn subscribe(stock: &mut Stock) -> Arc<Mutex<AppDisplay>> {
        let display = Arc::new(Mutex::new(AppDisplay {
            symbol: stock.symbol().to_string(),
            price: 0.0,
        }));
        stock.register(display.clone());
        display
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Observer for AppDisplay {
    fn price_updated(&mut self, price: f64) {
        self.price = price;
        self.display_price();
    }
}

impl DisplayElement for AppDisplay {
    fn display_price(&self) {
        println!("Current Price of {}: ${:.2}", self.symbol, self.price);
    }
}
