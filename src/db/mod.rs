pub mod form_submissions;
