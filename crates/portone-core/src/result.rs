// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal outcomes of the three flows.
//
// A flow ends in exactly one of these values, delivered once through the
// caller's completion callback. The error taxonomy is closed: `Failed` when
// the PG reported a code, `InvalidArgument` when the request never reached
// the PG, `Unknown` when the completion signal was malformed.

use serde::Serialize;
use thiserror::Error;

/// Constructors shared by every flow error, used by the protocol layer for
/// outcomes that do not depend on the operation.
pub trait FlowError: std::error::Error + Send + 'static {
    fn invalid_argument(message: impl Into<String>) -> Self;
    fn unknown(message: impl Into<String>) -> Self;
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccess {
    pub tx_id: String,
    pub payment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum PaymentError {
    #[error("payment failed with code {code}")]
    Failed {
        tx_id: Option<String>,
        payment_id: Option<String>,
        code: String,
        message: Option<String>,
        pg_code: Option<String>,
        pg_message: Option<String>,
    },

    #[error("invalid payment request: {message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl FlowError for PaymentError {
    fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown { message: message.into() }
    }
}

pub type PaymentResult = Result<PaymentSuccess, PaymentError>;

// ---------------------------------------------------------------------------
// Billing key issuance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBillingKeySuccess {
    pub billing_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum IssueBillingKeyError {
    /// A failed issuance usually carries no billing key.
    #[error("billing key issuance failed with code {code}")]
    Failed {
        billing_key: Option<String>,
        code: String,
        message: Option<String>,
        pg_code: Option<String>,
        pg_message: Option<String>,
    },

    #[error("invalid billing key request: {message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl FlowError for IssueBillingKeyError {
    fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown { message: message.into() }
    }
}

pub type IssueBillingKeyResult = Result<IssueBillingKeySuccess, IssueBillingKeyError>;

// ---------------------------------------------------------------------------
// Identity verification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityVerificationSuccess {
    pub identity_verification_tx_id: String,
    pub identity_verification_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum IdentityVerificationError {
    #[error("identity verification failed with code {code}")]
    Failed {
        identity_verification_tx_id: Option<String>,
        identity_verification_id: Option<String>,
        code: String,
        message: Option<String>,
        pg_code: Option<String>,
        pg_message: Option<String>,
    },

    #[error("invalid identity verification request: {message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl FlowError for IdentityVerificationError {
    fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown { message: message.into() }
    }
}

pub type IdentityVerificationResult =
    Result<IdentityVerificationSuccess, IdentityVerificationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_serializes_with_type_tag() {
        let err = PaymentError::Failed {
            tx_id: Some("t1".into()),
            payment_id: Some("p1".into()),
            code: "E001".into(),
            message: Some("declined".into()),
            pg_code: None,
            pg_message: None,
        };

        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "type": "Failed",
                "txId": "t1",
                "paymentId": "p1",
                "code": "E001",
                "message": "declined",
                "pgCode": null,
                "pgMessage": null,
            })
        );
    }

    #[test]
    fn display_texts() {
        let err = IssueBillingKeyError::invalid_argument("invalid store id");
        assert_eq!(err.to_string(), "invalid billing key request: invalid store id");

        let err = IdentityVerificationError::unknown("identityVerificationId is missing");
        assert_eq!(err.to_string(), "identityVerificationId is missing");
    }

    #[test]
    fn success_uses_contract_names() {
        let success = IdentityVerificationSuccess {
            identity_verification_tx_id: "itx".into(),
            identity_verification_id: "iv".into(),
        };
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({ "identityVerificationTxId": "itx", "identityVerificationId": "iv" })
        );
    }
}
