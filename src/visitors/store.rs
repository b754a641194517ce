// src/visitors/store.rs
use crate::domain::{Listing, Market};
use crate::errors::ServerError;
use crate::forms::{
    FormError, FormSession, LogSubmission, Notice, SubmitOutcome, BOOKING_FLOW, INQUIRY_FLOW,
};
use crate::visitors::token::hash_token;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Per-visitor UI state: one dialog per flow and the toasts not yet shown.
#[derive(Debug)]
pub struct Visitor {
    inquiry: FormSession<LogSubmission>,
    booking: FormSession<LogSubmission>,
    toasts: Vec<Notice>,
    last_seen: i64,
}

impl Visitor {
    fn new(now: i64) -> Self {
        Self {
            inquiry: FormSession::new(&INQUIRY_FLOW, LogSubmission),
            booking: FormSession::new(&BOOKING_FLOW, LogSubmission),
            toasts: Vec::new(),
            last_seen: now,
        }
    }

    pub fn session(&self, market: Market) -> &FormSession<LogSubmission> {
        match market {
            Market::Buy => &self.inquiry,
            Market::Rent => &self.booking,
        }
    }

    pub fn session_mut(&mut self, market: Market) -> &mut FormSession<LogSubmission> {
        match market {
            Market::Buy => &mut self.inquiry,
            Market::Rent => &mut self.booking,
        }
    }

    /// The dialog currently on screen, if any.
    pub fn open_session(&self) -> Option<&FormSession<LogSubmission>> {
        Market::ALL
            .into_iter()
            .map(|m| self.session(m))
            .find(|s| s.dialog().is_open())
    }

    /// Open a flow's dialog. Any other flow's dialog is dismissed first so only
    /// one dialog is live at a time.
    pub fn open(&mut self, market: Market, listing: Listing) {
        for other in Market::ALL.into_iter().filter(|m| *m != market) {
            if self.session(other).dialog().is_open() {
                self.session_mut(other).cancel();
            }
        }
        self.session_mut(market).open(listing);
    }

    pub fn submit(&mut self, market: Market, today: NaiveDate) -> Result<SubmitOutcome, FormError> {
        let (session, toasts) = match market {
            Market::Buy => (&mut self.inquiry, &mut self.toasts),
            Market::Rent => (&mut self.booking, &mut self.toasts),
        };
        session.submit(today, toasts)
    }

    /// Queued toasts; they are shown once.
    pub fn take_toasts(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.toasts)
    }
}

/// In-memory visitor state keyed by the SHA-256 of the visitor cookie.
/// A visitor idle for `ttl_secs` is gone; expired entries are swept at most
/// once per TTL.
#[derive(Debug)]
pub struct VisitorStore {
    ttl_secs: i64,
    inner: Mutex<Visitors>,
}

#[derive(Debug, Default)]
struct Visitors {
    by_hash: HashMap<[u8; 32], Visitor>,
    last_sweep: i64,
}

impl Visitors {
    fn sweep(&mut self, now: i64, ttl_secs: i64) {
        if now - self.last_sweep < ttl_secs {
            return;
        }
        self.last_sweep = now;

        let before = self.by_hash.len();
        self.by_hash.retain(|_, v| now - v.last_seen < ttl_secs);
        if self.by_hash.len() < before {
            debug!("🧹 expired {} idle visitor(s)", before - self.by_hash.len());
        }
    }
}

impl VisitorStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            inner: Mutex::new(Visitors::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Visitors>, ServerError> {
        self.inner.lock().map_err(|_| ServerError::InternalError)
    }

    /// Run `f` on the visitor for `token`, creating it on first sight.
    /// Holding the lock for the whole call serializes a visitor's requests.
    pub fn with_visitor<T, F>(&self, token: &str, now: i64, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Visitor) -> T,
    {
        let mut visitors = self.lock()?;
        visitors.sweep(now, self.ttl_secs);

        let ttl_secs = self.ttl_secs;
        let visitor = visitors
            .by_hash
            .entry(hash_token(token))
            .and_modify(|v| {
                if now - v.last_seen >= ttl_secs {
                    *v = Visitor::new(now);
                }
            })
            .or_insert_with(|| Visitor::new(now));
        visitor.last_seen = now;

        Ok(f(visitor))
    }

    /// Like `with_visitor`, but an unknown or expired token gets `None` and
    /// nothing is stored for it.
    pub fn peek_visitor<T, F>(&self, token: &str, now: i64, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(Option<&mut Visitor>) -> T,
    {
        let mut visitors = self.lock()?;
        visitors.sweep(now, self.ttl_secs);

        let visitor = visitors
            .by_hash
            .get_mut(&hash_token(token))
            .filter(|v| now - v.last_seen < self.ttl_secs);
        Ok(match visitor {
            Some(v) => {
                v.last_seen = now;
                f(Some(v))
            }
            None => f(None),
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().map(|v| v.by_hash.len()).unwrap_or(0)
    }
}
