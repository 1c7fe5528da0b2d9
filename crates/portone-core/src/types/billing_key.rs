// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `PortOne.requestIssueBillingKey` request model.

use serde::{Deserialize, Serialize};

use super::common::{Customer, OfferPeriod, WindowTypes};
use super::vocab::{
    BillingKeyMethod, CardCompany, Carrier, Country, Currency, EasyPayProvider, Locale,
    ProductType,
};
use crate::error::{Result, require_non_empty};
use crate::json::JsonValue;

/// Issue a reusable billing key.
///
/// The operation's correlation id is the billing key itself, which the PG
/// assigns; `issue_id` is an optional merchant-side handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IssueBillingKeyRequest {
    pub store_id: String,
    pub channel_key: String,
    pub billing_key_method: BillingKeyMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_name: Option<String>,
    /// Amount shown on the PG window; nothing is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_type: Option<WindowTypes>,
    /// Replaced by the bridge's completion URL when the flow starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_period: Option<OfferPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<BillingKeyCardOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<BillingKeyMobileOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_pay: Option<BillingKeyEasyPayOptions>,
}

impl IssueBillingKeyRequest {
    pub fn new(
        store_id: impl Into<String>,
        channel_key: impl Into<String>,
        billing_key_method: BillingKeyMethod,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            channel_key: channel_key.into(),
            billing_key_method,
            issue_id: None,
            issue_name: None,
            display_amount: None,
            currency: None,
            customer: None,
            window_type: None,
            redirect_url: None,
            notice_urls: None,
            app_scheme: None,
            offer_period: None,
            locale: None,
            custom_data: None,
            bypass: None,
            product_type: None,
            country: None,
            card: None,
            mobile: None,
            easy_pay: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty("storeId", &self.store_id)?;
        require_non_empty("channelKey", &self.channel_key)?;
        if let Some(issue_id) = &self.issue_id {
            require_non_empty("issueId", issue_id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BillingKeyCardOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_cards: Option<Vec<CardCompany>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BillingKeyMobileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_carriers: Option<Vec<Carrier>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BillingKeyEasyPayOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_pay_provider: Option<EasyPayProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_easy_pay_providers: Option<Vec<EasyPayProvider>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_request() {
        let request = IssueBillingKeyRequest {
            issue_name: Some("빌링키 발급 테스트".into()),
            app_scheme: Some("portoneexample://".into()),
            ..IssueBillingKeyRequest::new("store-1", "channel-1", BillingKeyMethod::Card)
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "storeId": "store-1",
                "channelKey": "channel-1",
                "billingKeyMethod": "CARD",
                "issueName": "빌링키 발급 테스트",
                "appScheme": "portoneexample://",
            })
        );
    }

    #[test]
    fn empty_issue_id_is_invalid() {
        let request = IssueBillingKeyRequest {
            issue_id: Some(String::new()),
            ..IssueBillingKeyRequest::new("store-1", "channel-1", BillingKeyMethod::Mobile)
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn mobile_options() {
        let request = IssueBillingKeyRequest {
            mobile: Some(BillingKeyMobileOptions {
                available_carriers: Some(vec![Carrier::Skt, Carrier::Kt]),
                ..Default::default()
            }),
            ..IssueBillingKeyRequest::new("store-1", "channel-1", BillingKeyMethod::Mobile)
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mobile"], json!({ "availableCarriers": ["SKT", "KT"] }));
    }
}
