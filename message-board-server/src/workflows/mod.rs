pub mod listing;
pub mod submission;

pub use listing::{ListingWorkflow, LISTING_LIMIT};
pub use submission::{Submission, SubmissionWorkflow};
