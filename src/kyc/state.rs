//! KYC lifecycle state machine
//!
//! Pure transition logic, kept free of I/O so the guards and review rules
//! can be exercised directly. Statuses move
//! `not_submitted -> pending -> {approved | rejected | resubmission_requested}`;
//! a rejected or resubmission-requested user may submit again, returning to
//! pending. Approved is terminal for submission.

use thiserror::Error;

use crate::models::KycStatus;

/// Errors raised by transition guards
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KycStateError {
    #[error("KYC verification is already {}. You cannot submit another request.", .0.as_str())]
    SubmissionClosed(KycStatus),

    #[error("Rejection reason is required")]
    MissingReason,

    #[error("Resubmission message is required")]
    MissingMessage,
}

/// Admin review decision on a pending (or previously reviewed) submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject { reason: String },
    RequestResubmission { message: String },
}

impl ReviewAction {
    /// Check the action carries what it requires
    pub fn validate(&self) -> Result<(), KycStateError> {
        match self {
            ReviewAction::Approve => Ok(()),
            ReviewAction::Reject { reason } if reason.trim().is_empty() => {
                Err(KycStateError::MissingReason)
            }
            ReviewAction::Reject { .. } => Ok(()),
            ReviewAction::RequestResubmission { message } if message.trim().is_empty() => {
                Err(KycStateError::MissingMessage)
            }
            ReviewAction::RequestResubmission { .. } => Ok(()),
        }
    }

    /// Status the user ends up in once the action is applied
    pub fn target_status(&self) -> KycStatus {
        match self {
            ReviewAction::Approve => KycStatus::Approved,
            ReviewAction::Reject { .. } => KycStatus::Rejected,
            ReviewAction::RequestResubmission { .. } => KycStatus::ResubmissionRequested,
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            ReviewAction::Reject { reason } => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn resubmission_message(&self) -> Option<&str> {
        match self {
            ReviewAction::RequestResubmission { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Outcome message surfaced to the reviewing admin
    pub fn outcome_message(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "KYC approved successfully",
            ReviewAction::Reject { .. } => "KYC rejected successfully",
            ReviewAction::RequestResubmission { .. } => {
                "KYC resubmission requested successfully"
            }
        }
    }
}

/// Whether a user in `status` may (re)submit documents
pub fn can_submit(status: KycStatus) -> bool {
    !matches!(status, KycStatus::Pending | KycStatus::Approved)
}

/// Guard for the submit transition
pub fn check_submission(status: KycStatus) -> Result<(), KycStateError> {
    if can_submit(status) {
        Ok(())
    } else {
        Err(KycStateError::SubmissionClosed(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_allowed_states() {
        assert!(can_submit(KycStatus::NotSubmitted));
        assert!(can_submit(KycStatus::Rejected));
        assert!(can_submit(KycStatus::ResubmissionRequested));
    }

    #[test]
    fn test_submission_closed_states() {
        assert!(!can_submit(KycStatus::Pending));
        assert!(!can_submit(KycStatus::Approved));

        assert_eq!(
            check_submission(KycStatus::Pending),
            Err(KycStateError::SubmissionClosed(KycStatus::Pending))
        );
        assert_eq!(
            check_submission(KycStatus::Approved),
            Err(KycStateError::SubmissionClosed(KycStatus::Approved))
        );
    }

    #[test]
    fn test_submission_closed_message_names_status() {
        let err = check_submission(KycStatus::Approved).unwrap_err();
        assert!(err.to_string().contains("approved"));
    }

    #[test]
    fn test_approve_is_unconditional() {
        let action = ReviewAction::Approve;
        assert!(action.validate().is_ok());
        assert_eq!(action.target_status(), KycStatus::Approved);
    }

    #[test]
    fn test_reject_requires_reason() {
        let action = ReviewAction::Reject {
            reason: String::new(),
        };
        assert_eq!(action.validate(), Err(KycStateError::MissingReason));

        let action = ReviewAction::Reject {
            reason: "   ".to_string(),
        };
        assert_eq!(action.validate(), Err(KycStateError::MissingReason));

        let action = ReviewAction::Reject {
            reason: "blurry ID photo".to_string(),
        };
        assert!(action.validate().is_ok());
        assert_eq!(action.target_status(), KycStatus::Rejected);
        assert_eq!(action.rejection_reason(), Some("blurry ID photo"));
    }

    #[test]
    fn test_resubmission_requires_message() {
        let action = ReviewAction::RequestResubmission {
            message: String::new(),
        };
        assert_eq!(action.validate(), Err(KycStateError::MissingMessage));

        let action = ReviewAction::RequestResubmission {
            message: "please upload a readable address proof".to_string(),
        };
        assert!(action.validate().is_ok());
        assert_eq!(action.target_status(), KycStatus::ResubmissionRequested);
    }
}
