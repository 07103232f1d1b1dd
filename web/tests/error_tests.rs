/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::http::StatusCode;
use axum::response::IntoResponse;
use core::orders::{OrderError, TransitionError};
use web::error::WebError;

#[test]
fn test_error_status_codes() {
    let cases = [
        (WebError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (
            WebError::Unauthorized("x".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (WebError::Forbidden("x".to_string()), StatusCode::FORBIDDEN),
        (WebError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (WebError::Conflict("x".to_string()), StatusCode::CONFLICT),
        (
            WebError::InvalidReference("x".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            WebError::InternalServerError("x".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.into_response().status(), expected);
    }
}

#[test]
fn test_already_in_state_is_accepted_not_error() {
    let response = WebError::AlreadyInState("Order already confirmed".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[test]
fn test_transition_errors_map_to_conflict() {
    for order_error in [
        OrderError::AlreadyDelivered,
        OrderError::AlreadyCanceled,
        OrderError::StateChanged,
    ] {
        let error = WebError::from(TransitionError::Order(order_error));

        assert!(matches!(error, WebError::Conflict(_)));
    }
}

#[test]
fn test_helper_messages() {
    assert!(matches!(
        WebError::not_found("Order"),
        WebError::NotFound(msg) if msg == "Order not found"
    ));
    assert!(matches!(
        WebError::already_exists("Material"),
        WebError::Conflict(msg) if msg == "Material already exists"
    ));
    assert!(matches!(
        WebError::protected_user(),
        WebError::Forbidden(_)
    ));
}
