// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for request encoding, runtime document rendering and
// completion URL decoding in the portone-bridge crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use url::Url;

use portone_bridge::protocol::{OperationKind, decode_completion, encode, render_document};
use portone_core::config::BridgeConfig;
use portone_core::types::{
    CardOptions, Currency, Customer, Installment, InstallmentMonthOption, PaymentPayMethod,
    PaymentRequest, Product,
};

fn sample_request() -> PaymentRequest {
    PaymentRequest {
        customer: Some(Customer {
            customer_id: Some("customer-001".into()),
            full_name: Some("홍길동".into()),
            email: Some("test@example.com".into()),
            ..Default::default()
        }),
        products: Some(
            (0..10)
                .map(|i| Product::new(format!("product-{i}"), format!("상품 {i}"), 1500, 1))
                .collect(),
        ),
        card: Some(CardOptions {
            installment: Some(Installment {
                free_installment_plans: None,
                month_option: Some(InstallmentMonthOption::AvailableMonthList(vec![2, 3, 6, 12])),
            }),
            ..Default::default()
        }),
        ..PaymentRequest::new(
            "store-bench",
            "payment-bench",
            "벤치마크 주문",
            15000,
            Currency::Krw,
            PaymentPayMethod::Card,
            "channel-bench",
        )
    }
}

fn bench_encode(c: &mut Criterion) {
    let request = sample_request();
    c.bench_function("encode_payment_request", |b| {
        b.iter(|| encode(black_box(&request)))
    });
}

fn bench_render(c: &mut Criterion) {
    let config = BridgeConfig::default();
    let json = encode(&sample_request()).unwrap_or_default();
    c.bench_function("render_runtime_document", |b| {
        b.iter(|| render_document(OperationKind::Payment, black_box(&json), &config))
    });
}

fn bench_decode(c: &mut Criterion) {
    let success = Url::parse("https://ios-sdk.portone.io/done?txId=tx-0193&paymentId=payment-bench")
        .expect("valid URL");
    let failure = Url::parse(
        "https://ios-sdk.portone.io/done?txId=tx-0193&paymentId=payment-bench&code=FAILURE_TYPE_PG&message=%EC%B9%B4%EB%93%9C%20%EA%B1%B0%EC%A0%88&pgCode=8001",
    )
    .expect("valid URL");

    c.bench_function("decode_completion_success", |b| {
        b.iter(|| decode_completion::<PaymentRequest>(black_box(&success)))
    });
    c.bench_function("decode_completion_failure", |b| {
        b.iter(|| decode_completion::<PaymentRequest>(black_box(&failure)))
    });
}

criterion_group!(benches, bench_encode, bench_render, bench_decode);
criterion_main!(benches);
