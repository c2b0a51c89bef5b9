//! KYC workflow tests
//!
//! These exercise the submission guards and admin review transitions of the
//! KYC lifecycle, including the full reject-and-resubmit cycle.

use goldvest_server::kyc::{can_submit, check_submission, KycStateError, ReviewAction};
use goldvest_server::models::KycStatus;

// ============================================================================
// Submission Guard Tests
// ============================================================================

#[test]
fn test_first_submission_is_allowed() {
    assert!(check_submission(KycStatus::NotSubmitted).is_ok());
}

#[test]
fn test_pending_submission_blocks_another() {
    let err = check_submission(KycStatus::Pending).unwrap_err();
    assert_eq!(err, KycStateError::SubmissionClosed(KycStatus::Pending));
    assert!(err.to_string().contains("pending"));
    assert!(err.to_string().contains("cannot submit"));
}

#[test]
fn test_approved_user_cannot_resubmit() {
    let err = check_submission(KycStatus::Approved).unwrap_err();
    assert_eq!(err, KycStateError::SubmissionClosed(KycStatus::Approved));
    assert!(err.to_string().contains("approved"));
}

#[test]
fn test_rejected_and_resubmission_requested_may_submit() {
    assert!(can_submit(KycStatus::Rejected));
    assert!(can_submit(KycStatus::ResubmissionRequested));
}

// ============================================================================
// Review Transition Tests
// ============================================================================

#[test]
fn test_approve_moves_to_approved() {
    let action = ReviewAction::Approve;
    assert!(action.validate().is_ok());
    assert_eq!(action.target_status(), KycStatus::Approved);
    assert!(action.rejection_reason().is_none());
    assert!(action.resubmission_message().is_none());
}

#[test]
fn test_reject_without_reason_is_invalid() {
    let action = ReviewAction::Reject {
        reason: String::new(),
    };
    assert_eq!(action.validate(), Err(KycStateError::MissingReason));
    assert_eq!(
        action.validate().unwrap_err().to_string(),
        "Rejection reason is required"
    );
}

#[test]
fn test_reject_with_blurry_id_photo_reason() {
    // Admin rejects a pending user citing an unreadable document.
    let action = ReviewAction::Reject {
        reason: "blurry ID photo".to_string(),
    };

    assert!(action.validate().is_ok());
    assert_eq!(action.target_status(), KycStatus::Rejected);
    assert_eq!(action.rejection_reason(), Some("blurry ID photo"));

    // Rejected users no longer match the pending queue predicate.
    assert_ne!(action.target_status(), KycStatus::Pending);
    // And they are free to try again.
    assert!(can_submit(action.target_status()));
}

#[test]
fn test_resubmission_request_without_message_is_invalid() {
    let action = ReviewAction::RequestResubmission {
        message: "  ".to_string(),
    };
    assert_eq!(action.validate(), Err(KycStateError::MissingMessage));
}

#[test]
fn test_resubmission_request_carries_message() {
    let action = ReviewAction::RequestResubmission {
        message: "address proof must show the full street name".to_string(),
    };
    assert!(action.validate().is_ok());
    assert_eq!(action.target_status(), KycStatus::ResubmissionRequested);
    assert_eq!(
        action.resubmission_message(),
        Some("address proof must show the full street name")
    );
}

#[test]
fn test_outcome_messages() {
    assert_eq!(
        ReviewAction::Approve.outcome_message(),
        "KYC approved successfully"
    );
    assert!(ReviewAction::Reject {
        reason: "r".to_string()
    }
    .outcome_message()
    .contains("rejected"));
    assert!(ReviewAction::RequestResubmission {
        message: "m".to_string()
    }
    .outcome_message()
    .contains("resubmission"));
}

// ============================================================================
// Full Lifecycle Walkthrough
// ============================================================================

#[test]
fn test_reject_then_resubmit_cycle() {
    // Fresh user submits.
    let mut status = KycStatus::NotSubmitted;
    assert!(check_submission(status).is_ok());
    status = KycStatus::Pending;
    assert!(!can_submit(status));

    // Admin rejects with a reason.
    let reject = ReviewAction::Reject {
        reason: "document expired".to_string(),
    };
    reject.validate().unwrap();
    status = reject.target_status();
    assert_eq!(status, KycStatus::Rejected);

    // The user may submit again, landing back in pending.
    assert!(check_submission(status).is_ok());
    status = KycStatus::Pending;
    assert!(!can_submit(status));

    // Second review approves; submission is closed from then on.
    let approve = ReviewAction::Approve;
    approve.validate().unwrap();
    status = approve.target_status();
    assert_eq!(status, KycStatus::Approved);
    assert!(check_submission(status).is_err());
}
