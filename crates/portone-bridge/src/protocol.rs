// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wire protocol between the host and the browser SDK runtime.
//
// Outbound: a request is encoded to JSON and embedded in an HTML document
// that calls the SDK with `redirectUrl` pointing at the completion URL.
// Inbound: the SDK either navigates to the completion URL with the outcome in
// the query string, or posts a single string to the error handler channel.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use portone_core::config::BridgeConfig;
use portone_core::error::Result;
use portone_core::result::{
    FlowError, IdentityVerificationError, IdentityVerificationResult,
    IdentityVerificationSuccess, IssueBillingKeyError, IssueBillingKeyResult,
    IssueBillingKeySuccess, PaymentError, PaymentResult, PaymentSuccess,
};
use portone_core::types::{IdentityVerificationRequest, IssueBillingKeyRequest, PaymentRequest};

/// The three browser SDK entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Payment,
    IssueBillingKey,
    IdentityVerification,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::IssueBillingKey => "issue-billing-key",
            Self::IdentityVerification => "identity-verification",
        }
    }

    /// Name of the `PortOne` global's method that starts the flow.
    pub fn sdk_function(&self) -> &'static str {
        match self {
            Self::Payment => "requestPayment",
            Self::IssueBillingKey => "requestIssueBillingKey",
            Self::IdentityVerification => "requestIdentityVerification",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ties a request model to its outcome types and completion decoding.
pub trait Operation: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: OperationKind;

    type Success: fmt::Debug + Send + 'static;
    type Error: FlowError;

    /// Reject requests the SDK would refuse anyway.
    fn validate(&self) -> Result<()>;

    /// The caller-supplied `redirectUrl`, which the bridge overrides.
    fn redirect_url(&self) -> Option<&str>;

    /// Decode a completion URL's query into the flow's outcome.
    fn decode_completion(query: &CompletionQuery) -> OperationResult<Self>;
}

pub type OperationResult<O> =
    std::result::Result<<O as Operation>::Success, <O as Operation>::Error>;

impl Operation for PaymentRequest {
    const KIND: OperationKind = OperationKind::Payment;

    type Success = PaymentSuccess;
    type Error = PaymentError;

    fn validate(&self) -> Result<()> {
        PaymentRequest::validate(self)
    }

    fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    fn decode_completion(query: &CompletionQuery) -> PaymentResult {
        if let Some(failure) = query.failure() {
            return Err(PaymentError::Failed {
                tx_id: query.owned("txId"),
                payment_id: query.owned("paymentId"),
                code: failure.code,
                message: failure.message,
                pg_code: failure.pg_code,
                pg_message: failure.pg_message,
            });
        }
        Ok(PaymentSuccess {
            tx_id: query.require::<Self::Error>(Self::KIND, "txId")?,
            payment_id: query.require::<Self::Error>(Self::KIND, "paymentId")?,
        })
    }
}

impl Operation for IssueBillingKeyRequest {
    const KIND: OperationKind = OperationKind::IssueBillingKey;

    type Success = IssueBillingKeySuccess;
    type Error = IssueBillingKeyError;

    fn validate(&self) -> Result<()> {
        IssueBillingKeyRequest::validate(self)
    }

    fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    fn decode_completion(query: &CompletionQuery) -> IssueBillingKeyResult {
        if let Some(failure) = query.failure() {
            return Err(IssueBillingKeyError::Failed {
                billing_key: query.owned("billingKey"),
                code: failure.code,
                message: failure.message,
                pg_code: failure.pg_code,
                pg_message: failure.pg_message,
            });
        }
        Ok(IssueBillingKeySuccess {
            billing_key: query.require::<Self::Error>(Self::KIND, "billingKey")?,
        })
    }
}

impl Operation for IdentityVerificationRequest {
    const KIND: OperationKind = OperationKind::IdentityVerification;

    type Success = IdentityVerificationSuccess;
    type Error = IdentityVerificationError;

    fn validate(&self) -> Result<()> {
        IdentityVerificationRequest::validate(self)
    }

    fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    fn decode_completion(query: &CompletionQuery) -> IdentityVerificationResult {
        if let Some(failure) = query.failure() {
            return Err(IdentityVerificationError::Failed {
                identity_verification_tx_id: query.owned("identityVerificationTxId"),
                identity_verification_id: query.owned("identityVerificationId"),
                code: failure.code,
                message: failure.message,
                pg_code: failure.pg_code,
                pg_message: failure.pg_message,
            });
        }
        let tx_id = query.require::<Self::Error>(Self::KIND, "identityVerificationTxId")?;
        let id = query.require::<Self::Error>(Self::KIND, "identityVerificationId")?;
        Ok(IdentityVerificationSuccess {
            identity_verification_tx_id: tx_id,
            identity_verification_id: id,
        })
    }
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// Encode a request to the JSON the SDK expects.
pub fn encode<R: Serialize>(request: &R) -> Result<String> {
    Ok(serde_json::to_string(request)?)
}

/// Make a JSON text safe to place inside an HTML `<script>` element.
///
/// Every `<` becomes `\u003c`, so neither `</script>` nor `<!--` can reach the
/// HTML tokenizer. The result is still valid JSON with the same meaning.
pub fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Script statement that starts the flow once the SDK has loaded.
///
/// The caller's `redirectUrl` is shadowed by the spread order, and a rejected
/// promise forwards the error message to the host's error channel.
pub fn invocation_script(
    kind: OperationKind,
    request_json: &str,
    config: &BridgeConfig,
) -> Result<String> {
    let redirect = escape_for_script(&serde_json::to_string(&config.completion_url)?);
    let handler = escape_for_script(&serde_json::to_string(&config.error_handler_name)?);
    Ok(format!(
        "const request = {request};\n\
         PortOne.{function}({{\n  ...request,\n  redirectUrl: {redirect},\n}}).catch((e) => {{\n  \
         window.webkit.messageHandlers[{handler}].postMessage(e.message);\n}});",
        request = escape_for_script(request_json),
        function = kind.sdk_function(),
    ))
}

/// Full HTML document loaded into the embedded runtime.
pub fn render_document(
    kind: OperationKind,
    request_json: &str,
    config: &BridgeConfig,
) -> Result<String> {
    let script = invocation_script(kind, request_json, config)?;
    Ok(format!(
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         </head>\n\
         <body>\n\
         <script src=\"{sdk}\"></script>\n\
         <script>\n\
         document.addEventListener('DOMContentLoaded', () => {{\n\
         {script}\n\
         }});\n\
         </script>\n\
         </body>\n\
         </html>\n",
        sdk = config.browser_sdk_url,
    ))
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// Decision returned to the runtime for a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    Allow,
    Cancel,
}

/// Whether `url` targets the completion endpoint, ignoring its query.
pub fn is_completion_url(url: &Url, completion: &Url) -> bool {
    url.scheme() == completion.scheme()
        && url.host_str() == completion.host_str()
        && url.port_or_known_default() == completion.port_or_known_default()
        && url.path() == completion.path()
}

/// Whether `url` must leave the runtime for another app.
pub fn is_deep_link(url: &Url) -> bool {
    !matches!(url.scheme(), "http" | "https")
}

/// PG failure details present when the completion URL carries `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub code: String,
    pub message: Option<String>,
    pub pg_code: Option<String>,
    pub pg_message: Option<String>,
}

/// Query parameters of a completion URL. The first occurrence of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionQuery {
    params: IndexMap<String, String>,
}

impl CompletionQuery {
    pub fn from_url(url: &Url) -> Self {
        let mut params = IndexMap::new();
        for (name, value) in url.query_pairs() {
            params
                .entry(name.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { params }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }

    /// A correlation identifier the success outcome cannot do without.
    fn require<E: FlowError>(
        &self,
        kind: OperationKind,
        name: &str,
    ) -> std::result::Result<String, E> {
        self.owned(name).ok_or_else(|| {
            E::unknown(format!("{name} not found in the {kind} completion URL"))
        })
    }

    /// `code` is the sole success/failure discriminator.
    pub fn failure(&self) -> Option<Failure> {
        Some(Failure {
            code: self.owned("code")?,
            message: self.owned("message"),
            pg_code: self.owned("pgCode"),
            pg_message: self.owned("pgMessage"),
        })
    }
}

/// Decode a completion URL for operation `O`.
pub fn decode_completion<O: Operation>(url: &Url) -> OperationResult<O> {
    O::decode_completion(&CompletionQuery::from_url(url))
}
