mod form_submission;

pub use form_submission::{FormSubmission, SendyStatus};
