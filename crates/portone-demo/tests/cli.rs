// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end runs of the demo shell.

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const PAYMENT: &str = r#"{
    "storeId": "s1",
    "paymentId": "p1",
    "orderName": "order",
    "totalAmount": 1000,
    "currency": "KRW",
    "payMethod": "CARD",
    "channelKey": "c1"
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn demo() -> Command {
    Command::new(cargo_bin!("portone-demo"))
}

#[test]
fn render_prints_runtime_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(&dir, "payment.json", PAYMENT);

    demo()
        .arg("render")
        .arg("payment")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cdn.portone.io/v2/browser-sdk.js"))
        .stdout(predicate::str::contains("PortOne.requestPayment({"))
        .stdout(predicate::str::contains(r#""storeId":"s1""#));

    Ok(())
}

#[test]
fn simulate_success() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(&dir, "payment.json", PAYMENT);

    demo()
        .args(["simulate", "payment"])
        .arg(&request)
        .arg("--event")
        .arg("navigate=https://ios-sdk.portone.io/done?txId=t1&paymentId=p1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancel"))
        .stdout(predicate::str::contains("Payment succeeded: txId t1, paymentId p1"))
        .stdout(predicate::str::contains(r#"{"Ok":{"txId":"t1","paymentId":"p1"}}"#));

    Ok(())
}

#[test]
fn simulate_failure_without_pg_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(&dir, "payment.json", PAYMENT);

    demo()
        .args(["simulate", "payment"])
        .arg(&request)
        .arg("--event")
        .arg("navigate=https://ios-sdk.portone.io/done?txId=t1&paymentId=p1&code=E001&message=declined")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment failed: declined"))
        .stdout(predicate::str::contains(r#""code":"E001""#))
        .stdout(predicate::str::contains(r#""pgCode":null"#));

    Ok(())
}

#[test]
fn error_message_wins_over_later_navigation() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(&dir, "payment.json", PAYMENT);

    demo()
        .args(["simulate", "payment"])
        .arg(&request)
        .args(["--event", "error=invalid store id"])
        .args(["--event", "navigate=https://ios-sdk.portone.io/done?txId=t1&paymentId=p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid payment request: invalid store id"))
        .stdout(predicate::str::contains("Payment succeeded").not());

    Ok(())
}

#[test]
fn deep_link_leaves_flow_pending() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(&dir, "payment.json", PAYMENT);

    demo()
        .args(["simulate", "payment"])
        .arg(&request)
        .args(["--event", "navigate=kakaotalk://kakaopay/pg?token=abc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("open kakaotalk://kakaopay/pg?token=abc"))
        .stdout(predicate::str::contains("no outcome"));

    Ok(())
}

#[test]
fn loose_request_with_unknown_key_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(
        &dir,
        "identity.json",
        r#"{"storeId":"s1","identityVerificationId":"iv1","channelKey":"c1","redirectURL":"x"}"#,
    );

    demo()
        .args(["simulate", "identity-verification"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid identity verification request"))
        .stdout(predicate::str::contains("unknown field"));

    Ok(())
}

#[test]
fn billing_key_with_custom_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = write(
        &dir,
        "bridge.json",
        r#"{"completionUrl":"https://host.example/portone/done"}"#,
    );
    let request = write(
        &dir,
        "billing.json",
        r#"{"storeId":"s1","channelKey":"c1","billingKeyMethod":"CARD"}"#,
    );

    demo()
        .arg("--config")
        .arg(&config)
        .args(["simulate", "billing-key"])
        .arg(&request)
        .args(["--event", "navigate=https://ios-sdk.portone.io/done?billingKey=bk-1"])
        .args(["--event", "navigate=https://host.example/portone/done?billingKey=bk-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("navigate https://ios-sdk.portone.io/done?billingKey=bk-1: Allow"))
        .stdout(predicate::str::contains("Billing key issued: bk-2"));

    Ok(())
}

#[test]
fn init_config_writes_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bridge.json");

    demo().arg("init-config").arg(&path).assert().success();

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains(r#""completionUrl": "https://ios-sdk.portone.io/done""#));
    Ok(())
}

#[test]
fn render_rejects_empty_mandatory_field() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let request = write(&dir, "payment.json", &PAYMENT.replace(r#""c1""#, r#""""#));

    demo()
        .arg("render")
        .arg("payment")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("channelKey"));

    Ok(())
}
