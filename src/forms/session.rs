// src/forms/session.rs
use crate::domain::Listing;
use crate::forms::controller::{FormController, Submission};
use crate::forms::dialog::DialogPresenter;
use crate::forms::error::{FormError, SubmissionError};
use crate::forms::flow::Flow;
use crate::forms::schema::ValidationResult;
use crate::forms::submission::{Notifier, SubmissionHandler};
use chrono::NaiveDate;
use tracing::{info, warn};

/// What the open dialog should show about the last submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Invalid(ValidationResult),
    Failed(SubmissionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handler ran; the dialog is closed and the form reset.
    Accepted { listing: Listing },
    /// Validation failed; the dialog stays open with the draft intact.
    Rejected(ValidationResult),
    /// Handler failed; the dialog stays open with the draft intact.
    Failed(SubmissionError),
}

/// A dialog plus its form, configured by a `Flow` and a submission handler.
/// Both the inquiry and the booking dialogs are instances of this.
#[derive(Debug)]
pub struct FormSession<H> {
    flow: &'static Flow,
    dialog: DialogPresenter,
    form: FormController,
    handler: H,
    feedback: Feedback,
}

impl<H: SubmissionHandler> FormSession<H> {
    pub fn new(flow: &'static Flow, handler: H) -> Self {
        Self {
            flow,
            dialog: DialogPresenter::new(),
            form: FormController::new(flow.schema),
            handler,
            feedback: Feedback::None,
        }
    }

    pub fn flow(&self) -> &'static Flow {
        self.flow
    }

    pub fn dialog(&self) -> &DialogPresenter {
        &self.dialog
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Open for `listing`, replacing any current target. Starts from a blank draft.
    pub fn open(&mut self, listing: Listing) {
        info!("🪟 open {} dialog for {}", self.flow.market.slug(), listing.location);
        self.dialog.open(listing);
        self.form.reset();
        self.feedback = Feedback::None;
    }

    pub fn cancel(&mut self) {
        if self.dialog.is_open() {
            info!("🪟 {} dialog dismissed", self.flow.market.slug());
        }
        self.dialog.close();
        self.form.reset();
        self.feedback = Feedback::None;
    }

    /// Store raw submitted values. A bad value leaves the draft untouched.
    pub fn set_inputs<'a, I>(&mut self, inputs: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.ensure_open()?;
        self.form.set_inputs(inputs)
    }

    pub fn submit(
        &mut self,
        today: NaiveDate,
        notifier: &mut dyn Notifier,
    ) -> Result<SubmitOutcome, FormError> {
        let listing = self.dialog.target().cloned().ok_or(FormError::DialogClosed)?;

        let draft = match self.form.submit(today) {
            Submission::Accepted(draft) => draft,
            Submission::Rejected(result) => {
                info!(
                    "✋ {} submission rejected: {} field(s) invalid",
                    self.flow.market.slug(),
                    result.len()
                );
                self.feedback = Feedback::Invalid(result.clone());
                return Ok(SubmitOutcome::Rejected(result));
            }
        };

        match self.handler.submit(self.flow, &draft, &listing, notifier) {
            Ok(()) => {
                self.dialog.close();
                self.form.reset();
                self.feedback = Feedback::None;
                Ok(SubmitOutcome::Accepted { listing })
            }
            Err(e) => {
                warn!("⚠️ {} submission for {} failed: {e}", self.flow.market.slug(), listing.location);
                self.feedback = Feedback::Failed(e.clone());
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }

    fn ensure_open(&self) -> Result<(), FormError> {
        if self.dialog.is_open() {
            Ok(())
        } else {
            Err(FormError::DialogClosed)
        }
    }
}
