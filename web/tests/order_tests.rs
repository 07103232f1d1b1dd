/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use entity::order::OrderState;
use uuid::Uuid;
use web::endpoints::orders::{MakeOrderRequest, OrderLineRequest, PublicOrderResponse};

#[test]
fn test_make_order_request_deserialization() {
    let body = r#"{
        "forklift": "7f8de4d8-7c13-4566-9c4f-9b331cb0b737",
        "estimate_at": "2025-06-01T10:00:00",
        "lines": [{"material": "a8098c1a-f86e-11da-bd1a-00112444be1e", "quantity": 3}]
    }"#;

    let request: MakeOrderRequest = serde_json::from_str(body).unwrap();

    assert_eq!(request.lines.len(), 1);
    assert_eq!(request.lines[0].quantity, 3);
}

#[test]
fn test_make_order_request_has_no_operator_field() {
    // The operator always comes from the authenticated principal; a
    // payload trying to smuggle one in still parses, the field just
    // does not exist to be read.
    let request = MakeOrderRequest {
        forklift: Uuid::new_v4(),
        estimate_at: NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        lines: vec![OrderLineRequest {
            material: Uuid::new_v4(),
            quantity: 1,
        }],
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(!json.contains("operator"));
}

#[test]
fn test_public_order_response_exposes_derived_canceled_flag() {
    let naive_date = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    let response = PublicOrderResponse {
        id: Uuid::new_v4(),
        operator: Uuid::new_v4(),
        forklift: Uuid::new_v4(),
        state: OrderState::CanceledNoMaterial,
        canceled: OrderState::CanceledNoMaterial.is_canceled(),
        estimate_at: naive_date,
        order_at: None,
        created_at: naive_date,
        lines: Vec::new(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains(r#""canceled":true"#));
    assert!(json.contains("CanceledNoMaterial"));
}
