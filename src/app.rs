// src/app.rs
use crate::config::AppConfig;
use crate::dates::Clock;
use crate::domain::{ListingProvider, StaticListings};
use crate::visitors::VisitorStore;
use chrono::{NaiveDate, Utc};

/// Shared state handed to every request.
pub struct App {
    pub config: AppConfig,
    pub listings: Box<dyn ListingProvider>,
    pub visitors: VisitorStore,
    clock: Clock,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let visitors = VisitorStore::new(config.visitor_ttl_secs);
        Self {
            config,
            listings: Box::new(StaticListings),
            visitors,
            clock: Clock::System,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Day used for date validation.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}
