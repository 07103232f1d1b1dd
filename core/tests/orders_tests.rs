/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Order state machine tests

use chrono::NaiveDate;
use core::consts::{ROLE_FORKLIFT, ROLE_OPERATOR};
use core::orders::{
    Applied, OrderAction, OrderError, Transition, TransitionError, apply_transition, create_order,
    plan_transition, NewOrderLine,
};
use core::types::MOrder;
use entity::order::OrderState;
use entity::material_by_order;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

fn sample_order(state: OrderState) -> MOrder {
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    MOrder {
        id: Uuid::new_v4(),
        operator: Uuid::new_v4(),
        forklift: Uuid::new_v4(),
        state,
        estimate_at: naive_date,
        order_at: None,
        created_at: naive_date,
        modified_at: naive_date,
    }
}

#[test]
fn test_actor_roles() {
    assert_eq!(OrderAction::Confirm.actor_role(), ROLE_OPERATOR);
    assert_eq!(OrderAction::CancelByOperator.actor_role(), ROLE_OPERATOR);
    assert_eq!(OrderAction::CancelNoMaterial.actor_role(), ROLE_FORKLIFT);
    assert_eq!(OrderAction::Deliver.actor_role(), ROLE_FORKLIFT);
}

#[test]
fn test_plan_transition_from_pending() {
    for (action, target) in [
        (OrderAction::Confirm, OrderState::Confirmed),
        (OrderAction::CancelByOperator, OrderState::CanceledByOperator),
        (OrderAction::CancelNoMaterial, OrderState::CanceledNoMaterial),
        (OrderAction::Deliver, OrderState::Delivered),
    ] {
        assert_eq!(
            plan_transition(&OrderState::Pending, action),
            Ok(Transition::Apply(target))
        );
    }
}

#[test]
fn test_plan_transition_from_confirmed() {
    assert_eq!(
        plan_transition(&OrderState::Confirmed, OrderAction::Confirm),
        Ok(Transition::AlreadyInState)
    );
    assert_eq!(
        plan_transition(&OrderState::Confirmed, OrderAction::CancelByOperator),
        Ok(Transition::Apply(OrderState::CanceledByOperator))
    );
    assert_eq!(
        plan_transition(&OrderState::Confirmed, OrderAction::Deliver),
        Ok(Transition::Apply(OrderState::Delivered))
    );
}

#[test]
fn test_plan_transition_terminal_states() {
    // Delivered orders cannot be canceled or confirmed.
    assert_eq!(
        plan_transition(&OrderState::Delivered, OrderAction::CancelNoMaterial),
        Err(OrderError::AlreadyDelivered)
    );
    assert_eq!(
        plan_transition(&OrderState::Delivered, OrderAction::Confirm),
        Err(OrderError::AlreadyDelivered)
    );
    // Repeating the delivery is a no-op, not an error.
    assert_eq!(
        plan_transition(&OrderState::Delivered, OrderAction::Deliver),
        Ok(Transition::AlreadyInState)
    );

    // Canceled orders reject everything except repeating the same
    // cancellation.
    assert_eq!(
        plan_transition(&OrderState::CanceledByOperator, OrderAction::Confirm),
        Err(OrderError::AlreadyCanceled)
    );
    assert_eq!(
        plan_transition(&OrderState::CanceledByOperator, OrderAction::CancelNoMaterial),
        Err(OrderError::AlreadyCanceled)
    );
    assert_eq!(
        plan_transition(&OrderState::CanceledByOperator, OrderAction::CancelByOperator),
        Ok(Transition::AlreadyInState)
    );
    assert_eq!(
        plan_transition(&OrderState::CanceledNoMaterial, OrderAction::Deliver),
        Err(OrderError::AlreadyCanceled)
    );
}

#[tokio::test]
async fn test_apply_transition_already_in_state() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let order = sample_order(OrderState::Confirmed);

    let result = apply_transition(&db, order.clone(), OrderAction::Confirm)
        .await
        .unwrap();

    assert_eq!(result, Applied::AlreadyInState(order));
}

#[tokio::test]
async fn test_apply_transition_confirm() {
    let order = sample_order(OrderState::Pending);
    let mut updated = order.clone();
    updated.state = OrderState::Confirmed;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([vec![updated.clone()]])
        .into_connection();

    let result = apply_transition(&db, order, OrderAction::Confirm)
        .await
        .unwrap();

    assert_eq!(result, Applied::Updated(updated));
}

#[tokio::test]
async fn test_apply_transition_concurrent_change() {
    let order = sample_order(OrderState::Pending);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let result = apply_transition(&db, order, OrderAction::Deliver).await;

    assert!(matches!(
        result,
        Err(TransitionError::Order(OrderError::StateChanged))
    ));
}

#[tokio::test]
async fn test_create_order_persists_lines() {
    let operator = Uuid::new_v4();
    let forklift = Uuid::new_v4();
    let material = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let mut order = sample_order(OrderState::Pending);
    order.operator = operator;
    order.forklift = forklift;

    let line = material_by_order::Model {
        id: Uuid::new_v4(),
        order: order.id,
        material,
        quantity: 3,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order.clone()]])
        .append_query_results([vec![line]])
        .into_connection();

    let created = create_order(
        &db,
        operator,
        forklift,
        naive_date,
        vec![NewOrderLine {
            material,
            quantity: 3,
        }],
    )
    .await
    .unwrap();

    assert_eq!(created.state, OrderState::Pending);
    assert_eq!(created.operator, operator);
    assert_eq!(created.forklift, forklift);
}
