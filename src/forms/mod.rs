//! Dialog forms: schemas, draft state, the open/closed dialog and what
//! happens once a draft is accepted.

pub mod controller;
pub mod dialog;
pub mod draft;
pub mod error;
pub mod flow;
pub mod schema;
pub mod session;
pub mod submission;

pub use draft::FormDraft;
pub use error::FormError;
pub use flow::{Flow, BOOKING_FLOW, INQUIRY_FLOW};
pub use schema::{FieldKind, FieldSpec};
pub use session::{Feedback, FormSession, SubmitOutcome};
pub use submission::{LogSubmission, Notice, SubmissionHandler};
