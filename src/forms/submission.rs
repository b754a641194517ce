// src/forms/submission.rs
use crate::domain::Listing;
use crate::forms::draft::FormDraft;
use crate::forms::error::SubmissionError;
use crate::forms::flow::Flow;
use serde_json::json;
use tracing::info;

/// A transient message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Where notices go. Fire-and-forget: nothing comes back.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Side effect run once a draft has been accepted.
pub trait SubmissionHandler {
    fn submit(
        &self,
        flow: &Flow,
        draft: &FormDraft,
        listing: &Listing,
        notifier: &mut dyn Notifier,
    ) -> Result<(), SubmissionError>;
}

/// Logs the request and tells the visitor it was received.
/// Nothing is sent anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmission;

impl SubmissionHandler for LogSubmission {
    fn submit(
        &self,
        flow: &Flow,
        draft: &FormDraft,
        listing: &Listing,
        notifier: &mut dyn Notifier,
    ) -> Result<(), SubmissionError> {
        let fields = serde_json::to_value(draft)
            .map_err(|e| SubmissionError::NotRecorded(e.to_string()))?;
        let record = json!({
            "market": flow.market,
            "listing": listing,
            "fields": fields,
        });
        info!(request = %record, "📨 {} for {}", flow.success_title, listing.location);

        notifier.notify(Notice {
            title: flow.success_title.to_string(),
            description: flow.success_description(listing),
        });
        Ok(())
    }
}
