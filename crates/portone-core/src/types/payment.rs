// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `PortOne.requestPayment` request model.

use serde::{Deserialize, Serialize};

use super::common::{Address, Customer, Installment, OfferPeriod, Product, StoreDetails, WindowTypes};
use super::vocab::{
    Bank, Carrier, CardCompany, CashReceiptType, Country, Currency, EasyPayPayMethod,
    EasyPayProvider, GiftCertificateType, Locale, PaymentPayMethod, ProductType,
};
use crate::error::{Result, require_non_empty};
use crate::json::JsonValue;

/// A one-off payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentRequest {
    pub store_id: String,
    /// Merchant-assigned id, unique per payment attempt.
    pub payment_id: String,
    pub order_name: String,
    pub total_amount: i64,
    pub currency: Currency,
    pub pay_method: PaymentPayMethod,
    pub channel_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<i64>,
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
    pub confirm_url: Option<String>,
    /// Scheme the PG's companion apps return to, e.g. `myapp://`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_escrow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cultural_expense: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<JsonValue>,
    /// PG-specific parameters passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_period: Option<OfferPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_details: Option<StoreDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_account: Option<VirtualAccountOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<TransferOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<MobileOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_certificate: Option<GiftCertificateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_pay: Option<EasyPayOptions>,
}

impl PaymentRequest {
    /// Build a request with every optional field absent.
    pub fn new(
        store_id: impl Into<String>,
        payment_id: impl Into<String>,
        order_name: impl Into<String>,
        total_amount: i64,
        currency: Currency,
        pay_method: PaymentPayMethod,
        channel_key: impl Into<String>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            payment_id: payment_id.into(),
            order_name: order_name.into(),
            total_amount,
            currency,
            pay_method,
            channel_key: channel_key.into(),
            tax_free_amount: None,
            vat_amount: None,
            customer: None,
            window_type: None,
            redirect_url: None,
            notice_urls: None,
            confirm_url: None,
            app_scheme: None,
            is_escrow: None,
            products: None,
            is_cultural_expense: None,
            locale: None,
            custom_data: None,
            bypass: None,
            product_type: None,
            offer_period: None,
            country: None,
            shipping_address: None,
            promotion_id: None,
            store_details: None,
            card: None,
            virtual_account: None,
            transfer: None,
            mobile: None,
            gift_certificate: None,
            easy_pay: None,
        }
    }

    /// Check the mandatory identifiers are present.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("storeId", &self.store_id)?;
        require_non_empty("paymentId", &self.payment_id)?;
        require_non_empty("orderName", &self.order_name)?;
        require_non_empty("channelKey", &self.channel_key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_company: Option<CardCompany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_cards: Option<Vec<CardCompany>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<Installment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_card_point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_app_card_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_installment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_free_interest_from_mall: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VirtualAccountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_expiry: Option<AccountExpiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_receipt_type: Option<CashReceiptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedAccount>,
}

/// Deposit deadline for a virtual account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountExpiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Pre-assigned virtual account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FixedAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransferOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_receipt_type: Option<CashReceiptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MobileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_carriers: Option<Vec<Carrier>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GiftCertificateOptions {
    pub gift_certificate_type: GiftCertificateType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EasyPayOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_pay_provider: Option<EasyPayProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_easy_pay_providers: Option<Vec<EasyPayProvider>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_pay_methods: Option<Vec<EasyPayPayMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_cards: Option<Vec<CardCompany>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<Installment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_card_point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_receipt_type: Option<CashReceiptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_identifier: Option<String>,
}
