//! KYC verification workflow
//!
//! State machine, document storage and persistence for the submit/review
//! lifecycle.

mod model;
mod service;
pub mod state;
pub mod storage;

pub use model::{
    KycSubmissionFields, KycSubmissionResponse, RejectKycRequest, ResubmitKycRequest,
    ReviewedUserSummary, SubmittedDocuments,
};
pub use service::{KycError, KycService};
pub use state::{can_submit, check_submission, KycStateError, ReviewAction};
pub use storage::{DocumentKind, DocumentStore, StorageError, MAX_DOCUMENT_BYTES};
