// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `PortOne.requestIdentityVerification` request model.

use serde::{Deserialize, Serialize};

use super::common::{Customer, WindowTypes};
use super::vocab::{Carrier, Locale};
use crate::error::{Result, require_non_empty};
use crate::json::JsonValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdentityVerificationRequest {
    pub store_id: String,
    pub identity_verification_id: String,
    pub channel_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_type: Option<WindowTypes>,
    /// Replaced by the bridge's completion URL when the flow starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_redirect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<JsonValue>,
    /// Pre-selects the carrier for phone verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
}

impl IdentityVerificationRequest {
    pub fn new(
        store_id: impl Into<String>,
        identity_verification_id: impl Into<String>,
        channel_key: impl Into<String>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            identity_verification_id: identity_verification_id.into(),
            channel_key: channel_key.into(),
            customer: None,
            window_type: None,
            redirect_url: None,
            force_redirect: None,
            app_scheme: None,
            locale: None,
            custom_data: None,
            bypass: None,
            carrier: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty("storeId", &self.store_id)?;
        require_non_empty("identityVerificationId", &self.identity_verification_id)?;
        require_non_empty("channelKey", &self.channel_key)
    }
}
