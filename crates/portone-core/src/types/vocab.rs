// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Closed vocabularies of the browser SDK contract.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PortOneError, Result};

contract_enum! {
    /// ISO 4217 currency.
    Currency as "currency" {
        Krw => "KRW",
        Usd => "USD",
        Eur => "EUR",
        Jpy => "JPY",
        Cny => "CNY",
        Hkd => "HKD",
        Twd => "TWD",
        Sgd => "SGD",
        Thb => "THB",
        Vnd => "VND",
        Php => "PHP",
        Myr => "MYR",
        Idr => "IDR",
        Inr => "INR",
        Mnt => "MNT",
        Aud => "AUD",
        Nzd => "NZD",
        Cad => "CAD",
        Gbp => "GBP",
        Chf => "CHF",
        Sek => "SEK",
        Nok => "NOK",
        Dkk => "DKK",
        Pln => "PLN",
        Czk => "CZK",
        Huf => "HUF",
        Rub => "RUB",
        Try => "TRY",
        Aed => "AED",
        Sar => "SAR",
        Ils => "ILS",
        Brl => "BRL",
        Mxn => "MXN",
        Zar => "ZAR",
    }
}

contract_enum! {
    /// Method used by a payment request.
    PaymentPayMethod as "payment method" {
        Card => "CARD",
        VirtualAccount => "VIRTUAL_ACCOUNT",
        Transfer => "TRANSFER",
        Mobile => "MOBILE",
        GiftCertificate => "GIFT_CERTIFICATE",
        EasyPay => "EASY_PAY",
        Paypal => "PAYPAL",
        Alipay => "ALIPAY",
        ConvenienceStore => "CONVENIENCE_STORE",
    }
}

contract_enum! {
    /// Method a billing key is issued against.
    BillingKeyMethod as "billing key method" {
        Card => "CARD",
        Mobile => "MOBILE",
        EasyPay => "EASY_PAY",
        Paypal => "PAYPAL",
    }
}

contract_enum! {
    /// Korean banks and securities firms.
    Bank as "bank" {
        BankOfKorea => "BANK_OF_KOREA",
        KoreaDevelopmentBank => "KOREA_DEVELOPMENT_BANK",
        IndustrialBankOfKorea => "INDUSTRIAL_BANK_OF_KOREA",
        KookminBank => "KOOKMIN_BANK",
        SuhyupBank => "SUHYUP_BANK",
        ExportImportBankOfKorea => "EXPORT_IMPORT_BANK_OF_KOREA",
        NhNonghyupBank => "NH_NONGHYUP_BANK",
        LocalNonghyup => "LOCAL_NONGHYUP",
        WooriBank => "WOORI_BANK",
        ScBankKorea => "SC_BANK_KOREA",
        CitiBankKorea => "CITI_BANK_KOREA",
        DaeguBank => "DAEGU_BANK",
        BusanBank => "BUSAN_BANK",
        GwangjuBank => "GWANGJU_BANK",
        JejuBank => "JEJU_BANK",
        JeonbukBank => "JEONBUK_BANK",
        KyongnamBank => "KYONGNAM_BANK",
        Kfcc => "KFCC",
        Shinhyup => "SHINHYUP",
        SavingsBankKorea => "SAVINGS_BANK_KOREA",
        MorganStanleyBank => "MORGAN_STANLEY_BANK",
        HsbcBank => "HSBC_BANK",
        DeutscheBank => "DEUTSCHE_BANK",
        JpMorganChaseBank => "JP_MORGAN_CHASE_BANK",
        MizuhoBank => "MIZUHO_BANK",
        MufgBank => "MUFG_BANK",
        BankOfAmericaBank => "BANK_OF_AMERICA_BANK",
        BnpParibasBank => "BNP_PARIBAS_BANK",
        Icbc => "ICBC",
        BankOfChina => "BANK_OF_CHINA",
        NationalForestryCooperativeFederation => "NATIONAL_FORESTRY_COOPERATIVE_FEDERATION",
        UnitedOverseasBank => "UNITED_OVERSEAS_BANK",
        BankOfCommunications => "BANK_OF_COMMUNICATIONS",
        ChinaConstructionBank => "CHINA_CONSTRUCTION_BANK",
        Epost => "EPOST",
        Kodit => "KODIT",
        Kibo => "KIBO",
        HanaBank => "HANA_BANK",
        ShinhanBank => "SHINHAN_BANK",
        KBank => "K_BANK",
        KakaoBank => "KAKAO_BANK",
        TossBank => "TOSS_BANK",
        Kcis => "KCIS",
        DaishinSavingsBank => "DAISHIN_SAVINGS_BANK",
        SbiSavingsBank => "SBI_SAVINGS_BANK",
        HkSavingsBank => "HK_SAVINGS_BANK",
        WelcomeSavingsBank => "WELCOME_SAVINGS_BANK",
        ShinhanSavingsBank => "SHINHAN_SAVINGS_BANK",
        KyoboSecurities => "KYOBO_SECURITIES",
        DaishinSecurities => "DAISHIN_SECURITIES",
        MeritzSecurities => "MERITZ_SECURITIES",
        MiraeAssetSecurities => "MIRAE_ASSET_SECURITIES",
        BookookSecurities => "BOOKOOK_SECURITIES",
        SamsungSecurities => "SAMSUNG_SECURITIES",
        ShinyoungSecurities => "SHINYOUNG_SECURITIES",
        ShinhanFinancialInvestment => "SHINHAN_FINANCIAL_INVESTMENT",
        YuantaSecurities => "YUANTA_SECURITIES",
        EugeneInvestmentSecurities => "EUGENE_INVESTMENT_SECURITIES",
        KakaoPaySecurities => "KAKAO_PAY_SECURITIES",
        TossSecurities => "TOSS_SECURITIES",
        KoreaFossSecurities => "KOREA_FOSS_SECURITIES",
        HanaFinancialInvestment => "HANA_FINANCIAL_INVESTMENT",
        HiInvestmentSecurities => "HI_INVESTMENT_SECURITIES",
        KoreaInvestmentSecurities => "KOREA_INVESTMENT_SECURITIES",
        HanwhaInvestmentSecurities => "HANWHA_INVESTMENT_SECURITIES",
        HyundaiMotorSecurities => "HYUNDAI_MOTOR_SECURITIES",
        DbFinancialInvestment => "DB_FINANCIAL_INVESTMENT",
        KbSecurities => "KB_SECURITIES",
        KtbInvestmentSecurities => "KTB_INVESTMENT_SECURITIES",
        NhInvestmentSecurities => "NH_INVESTMENT_SECURITIES",
        SkSecurities => "SK_SECURITIES",
        Sci => "SCI",
        KiwoomSecurities => "KIWOOM_SECURITIES",
        EbestInvestmentSecurities => "EBEST_INVESTMENT_SECURITIES",
        CapeInvestmentCertificate => "CAPE_INVESTMENT_CERTIFICATE",
    }
}

contract_enum! {
    /// Card issuers.
    CardCompany as "card company" {
        KoreaDevelopmentBank => "KOREA_DEVELOPMENT_BANK",
        Kfcc => "KFCC",
        Shinhyup => "SHINHYUP",
        Epost => "EPOST",
        SavingsBankKorea => "SAVINGS_BANK_KOREA",
        KakaoBank => "KAKAO_BANK",
        WooriCard => "WOORI_CARD",
        BcCard => "BC_CARD",
        GwangjuCard => "GWANGJU_CARD",
        SamsungCard => "SAMSUNG_CARD",
        ShinhanCard => "SHINHAN_CARD",
        HyundaiCard => "HYUNDAI_CARD",
        LotteCard => "LOTTE_CARD",
        SuhyupCard => "SUHYUP_CARD",
        CitiCard => "CITI_CARD",
        NhCard => "NH_CARD",
        JeonbukCard => "JEONBUK_CARD",
        JejuCard => "JEJU_CARD",
        HanaCard => "HANA_CARD",
        KookminCard => "KOOKMIN_CARD",
        KBank => "K_BANK",
        TossBank => "TOSS_BANK",
        Visa => "VISA",
        Master => "MASTER",
        Jcb => "JCB",
        UnionPay => "UNION_PAY",
        Amex => "AMEX",
        Diners => "DINERS",
    }
}

contract_enum! {
    /// Mobile carriers.
    Carrier as "carrier" {
        Skt => "SKT",
        Kt => "KT",
        Lgu => "LGU",
        Hello => "HELLO",
        Kct => "KCT",
        Sk7 => "SK7",
    }
}

contract_enum! {
    Gender as "gender" {
        Male => "MALE",
        Female => "FEMALE",
        Other => "OTHER",
    }
}

contract_enum! {
    ProductType as "product type" {
        Real => "REAL",
        Digital => "DIGITAL",
    }
}

contract_enum! {
    CashReceiptType as "cash receipt type" {
        Personal => "PERSONAL",
        Corporate => "CORPORATE",
        Anonymous => "ANONYMOUS",
    }
}

contract_enum! {
    /// Kind of transaction a redirect result belongs to.
    TransactionType as "transaction type" {
        Payment => "PAYMENT",
        IssueBillingKey => "ISSUE_BILLING_KEY",
        IdentityVerification => "IDENTITY_VERIFICATION",
        IssueBillingKeyAndPay => "ISSUE_BILLING_KEY_AND_PAY",
    }
}

contract_enum! {
    /// How the PG window is presented.
    WindowType as "window type" {
        Iframe => "IFRAME",
        Popup => "POPUP",
        Redirection => "REDIRECTION",
        Ui => "UI",
    }
}

contract_enum! {
    /// Display language of the PG window.
    Locale as "locale" {
        KoKr => "KO_KR",
        EnUs => "EN_US",
        ZhCn => "ZH_CN",
        ZhTw => "ZH_TW",
        JaJp => "JA_JP",
        RuRu => "RU_RU",
        ThTh => "TH_TH",
        TrTr => "TR_TR",
        ViVn => "VI_VN",
    }
}

contract_enum! {
    /// Simple-pay wallets.
    EasyPayProvider as "easy pay provider" {
        Samsungpay => "SAMSUNGPAY",
        Kakaopay => "KAKAOPAY",
        Naverpay => "NAVERPAY",
        Payco => "PAYCO",
        Ssgpay => "SSGPAY",
        Chai => "CHAI",
        Lpay => "LPAY",
        Kpay => "KPAY",
        Tosspay => "TOSSPAY",
        Lgpay => "LGPAY",
        Pinpay => "PINPAY",
        Applepay => "APPLEPAY",
        Skpay => "SKPAY",
        TossBrandpay => "TOSS_BRANDPAY",
        KbApp => "KB_APP",
        Alipay => "ALIPAY",
        Hyphen => "HYPHEN",
        Tmoney => "TMONEY",
        Paypal => "PAYPAL",
        Smilepay => "SMILEPAY",
        Miraeassetpay => "MIRAEASSETPAY",
        Wechatpay => "WECHATPAY",
    }
}

contract_enum! {
    /// Funding source a wallet may offer.
    EasyPayPayMethod as "easy pay method" {
        Card => "CARD",
        Transfer => "TRANSFER",
        Charge => "CHARGE",
    }
}

contract_enum! {
    GiftCertificateType as "gift certificate type" {
        Booknlife => "BOOKNLIFE",
        SmartMunsang => "SMART_MUNSANG",
        Cultureland => "CULTURELAND",
        Happymoney => "HAPPYMONEY",
        Culturegift => "CULTUREGIFT",
    }
}

/// ISO 3166-1 alpha-2 country code, e.g. `KR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country(String);

impl Country {
    /// Validate and normalise a two-letter code.
    pub fn new(code: &str) -> Result<Self> {
        let upper = code.trim().to_ascii_uppercase();
        if upper.len() != 2 || !upper.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PortOneError::InvalidValue {
                kind: "country",
                value: code.to_owned(),
            });
        }
        Ok(Self(upper))
    }

    /// Republic of Korea.
    pub fn kr() -> Self {
        Self("KR".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Country {
    type Err = PortOneError;

    fn from_str(code: &str) -> Result<Self> {
        Self::new(code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_match_contract() {
        assert_eq!(Bank::KookminBank.as_str(), "KOOKMIN_BANK");
        assert_eq!(Bank::KBank.as_str(), "K_BANK");
        assert_eq!(CardCompany::BcCard.as_str(), "BC_CARD");
        assert_eq!(Carrier::Sk7.as_str(), "SK7");
        assert_eq!(TransactionType::IssueBillingKeyAndPay.as_str(), "ISSUE_BILLING_KEY_AND_PAY");
        assert_eq!(PaymentPayMethod::ConvenienceStore.as_str(), "CONVENIENCE_STORE");
    }

    #[test]
    fn every_bank_parses_back() {
        for bank in Bank::ALL {
            assert_eq!(bank.as_str().parse::<Bank>().unwrap(), *bank);
        }
        assert_eq!(Bank::ALL.len(), 75);
    }

    #[test]
    fn enums_encode_as_bare_strings() {
        assert_eq!(serde_json::to_string(&Bank::KookminBank).unwrap(), r#""KOOKMIN_BANK""#);
        let currency: Currency = serde_json::from_str(r#""JPY""#).unwrap();
        assert_eq!(currency, Currency::Jpy);
    }

    #[test]
    fn unknown_raw_value_is_rejected() {
        let err = "BITCOIN".parse::<Currency>().unwrap_err();
        assert!(matches!(err, PortOneError::InvalidValue { kind: "currency", .. }));
        assert!(serde_json::from_str::<Carrier>(r#""VERIZON""#).is_err());
    }

    #[test]
    fn country_is_normalised_and_validated() {
        assert_eq!(Country::new("kr").unwrap(), Country::kr());
        assert!(Country::new("KOR").is_err());
        assert!(Country::new("1A").is_err());
        assert!(serde_json::from_str::<Country>(r#""K""#).is_err());
    }
}
