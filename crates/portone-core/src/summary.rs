// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Short alert texts for flow outcomes.
//
// Host shells show one alert per finished flow. The outcome class drives the
// icon/colour; the title and message are the visible text.

use crate::result::{
    IdentityVerificationError, IdentityVerificationResult, IssueBillingKeyError,
    IssueBillingKeyResult, PaymentError, PaymentResult,
};

/// Outcome class of a finished flow from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// The PG declined or the user cancelled.
    Failed,
    /// The request never reached the PG.
    Rejected,
    /// The completion signal could not be understood.
    Unknown,
}

/// Title and message for a host alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub message: String,
    pub outcome: Outcome,
}

impl Summary {
    fn new(outcome: Outcome, title: &str, message: String) -> Self {
        Self {
            title: title.to_owned(),
            message,
            outcome,
        }
    }
}

/// Message of a failure, falling back to the PG's code.
fn failure_message(message: &Option<String>, code: &str) -> String {
    message.clone().unwrap_or_else(|| format!("PG code: {code}"))
}

pub fn summarize_payment(result: &PaymentResult) -> Summary {
    match result {
        Ok(success) => Summary::new(
            Outcome::Succeeded,
            "Payment succeeded",
            format!("txId {}, paymentId {}", success.tx_id, success.payment_id),
        ),
        Err(PaymentError::Failed { code, message, .. }) => {
            Summary::new(Outcome::Failed, "Payment failed", failure_message(message, code))
        }
        Err(PaymentError::InvalidArgument { message }) => {
            Summary::new(Outcome::Rejected, "Invalid payment request", message.clone())
        }
        Err(PaymentError::Unknown { message }) => {
            Summary::new(Outcome::Unknown, "Unknown error", message.clone())
        }
    }
}

pub fn summarize_billing_key(result: &IssueBillingKeyResult) -> Summary {
    match result {
        Ok(success) => Summary::new(
            Outcome::Succeeded,
            "Billing key issued",
            success.billing_key.clone(),
        ),
        Err(IssueBillingKeyError::Failed { code, message, .. }) => Summary::new(
            Outcome::Failed,
            "Billing key issuance failed",
            failure_message(message, code),
        ),
        Err(IssueBillingKeyError::InvalidArgument { message }) => Summary::new(
            Outcome::Rejected,
            "Invalid billing key request",
            message.clone(),
        ),
        Err(IssueBillingKeyError::Unknown { message }) => {
            Summary::new(Outcome::Unknown, "Unknown error", message.clone())
        }
    }
}

pub fn summarize_identity_verification(result: &IdentityVerificationResult) -> Summary {
    match result {
        Ok(success) => Summary::new(
            Outcome::Succeeded,
            "Identity verified",
            format!(
                "identityVerificationTxId {}, identityVerificationId {}",
                success.identity_verification_tx_id, success.identity_verification_id
            ),
        ),
        Err(IdentityVerificationError::Failed { code, message, .. }) => Summary::new(
            Outcome::Failed,
            "Identity verification failed",
            failure_message(message, code),
        ),
        Err(IdentityVerificationError::InvalidArgument { message }) => Summary::new(
            Outcome::Rejected,
            "Invalid identity verification request",
            message.clone(),
        ),
        Err(IdentityVerificationError::Unknown { message }) => {
            Summary::new(Outcome::Unknown, "Unknown error", message.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{FlowError, PaymentSuccess};

    #[test]
    fn payment_success() {
        let summary = summarize_payment(&Ok(PaymentSuccess {
            tx_id: "t1".into(),
            payment_id: "p1".into(),
        }));
        assert_eq!(summary.outcome, Outcome::Succeeded);
        assert_eq!(summary.message, "txId t1, paymentId p1");
    }

    #[test]
    fn failure_without_message_shows_code() {
        let summary = summarize_billing_key(&Err(IssueBillingKeyError::Failed {
            billing_key: None,
            code: "FAILURE_TYPE_PG".into(),
            message: None,
            pg_code: None,
            pg_message: None,
        }));
        assert_eq!(summary.outcome, Outcome::Failed);
        assert_eq!(summary.message, "PG code: FAILURE_TYPE_PG");
    }

    #[test]
    fn failure_message_wins_over_code() {
        let summary = summarize_payment(&Err(PaymentError::Failed {
            tx_id: None,
            payment_id: Some("p1".into()),
            code: "E001".into(),
            message: Some("declined".into()),
            pg_code: Some("8001".into()),
            pg_message: None,
        }));
        assert_eq!(summary.title, "Payment failed");
        assert_eq!(summary.message, "declined");
    }

    #[test]
    fn rejected_and_unknown() {
        let rejected =
            summarize_identity_verification(&Err(IdentityVerificationError::invalid_argument(
                "invalid store id",
            )));
        assert_eq!(rejected.outcome, Outcome::Rejected);
        assert_eq!(rejected.message, "invalid store id");

        let unknown = summarize_payment(&Err(PaymentError::unknown("txId is missing")));
        assert_eq!(unknown.outcome, Outcome::Unknown);
        assert_eq!(unknown.title, "Unknown error");
    }
}
