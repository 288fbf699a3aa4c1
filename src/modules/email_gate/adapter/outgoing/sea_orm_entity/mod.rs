pub mod email_submissions;
