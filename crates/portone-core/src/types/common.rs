// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Value objects shared by the request models.

use serde::{Deserialize, Serialize};

use super::vocab::{CardCompany, Country, Gender, WindowType};

/// Buyer details forwarded to the PG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Four digits, e.g. `1990`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,
    /// Two digits, e.g. `01`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_month: Option<String>,
    /// Two digits, e.g. `15`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_day: Option<String>,
}

/// Postal address. Both address lines are required by the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    pub address_line1: String,
    pub address_line2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

impl Address {
    pub fn new(address_line1: impl Into<String>, address_line2: impl Into<String>) -> Self {
        Self {
            country: None,
            address_line1: address_line1.into(),
            address_line2: address_line2.into(),
            city: None,
            province: None,
        }
    }
}

/// One line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub amount: i64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: i64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: None,
            amount,
            quantity,
            tag: None,
            link: None,
        }
    }
}

/// Installment policy for card payments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Installment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_installment_plans: Option<Vec<FreeInstallmentPlan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_option: Option<InstallmentMonthOption>,
}

/// Interest-free months offered for one card issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FreeInstallmentPlan {
    pub card_company: CardCompany,
    pub months: Vec<u32>,
}

/// Either a fixed installment length or a list the buyer picks from.
///
/// Encodes as `{"fixedMonth": 3}` or `{"availableMonthList": [3, 6]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallmentMonthOption {
    FixedMonth(u32),
    AvailableMonthList(Vec<u32>),
}

/// Service period of what is being sold.
///
/// Encodes as `{"range": {"from": .., "to": ..}}` or `{"interval": ".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OfferPeriod {
    Range(OfferPeriodRange),
    /// ISO 8601 duration, e.g. `1m`.
    Interval(String),
}

/// Inclusive period bounds as ISO 8601 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferPeriodRange {
    pub from: String,
    pub to: String,
}

/// Merchant details some PGs display on their window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceo_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<StoreOpeningHours>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreOpeningHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

/// Window presentation per device class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pc: Option<WindowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<WindowType>,
}
