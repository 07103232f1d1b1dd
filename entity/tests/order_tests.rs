/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for order entity and its state enum

use chrono::NaiveDate;
use entity::order::OrderState;
use entity::*;
use sea_orm::{ActiveEnum, DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[test]
fn test_order_state_values() {
    assert_eq!(OrderState::Pending.to_value(), 0);
    assert_eq!(OrderState::Confirmed.to_value(), 1);
    assert_eq!(OrderState::Delivered.to_value(), 2);
    assert_eq!(OrderState::CanceledByOperator.to_value(), 3);
    assert_eq!(OrderState::CanceledNoMaterial.to_value(), 4);
}

#[test]
fn test_order_state_classification() {
    assert!(!OrderState::Pending.is_canceled());
    assert!(!OrderState::Confirmed.is_canceled());
    assert!(!OrderState::Delivered.is_canceled());
    assert!(OrderState::CanceledByOperator.is_canceled());
    assert!(OrderState::CanceledNoMaterial.is_canceled());

    assert!(!OrderState::Pending.is_terminal());
    assert!(!OrderState::Confirmed.is_terminal());
    assert!(OrderState::Delivered.is_terminal());
    assert!(OrderState::CanceledByOperator.is_terminal());
    assert!(OrderState::CanceledNoMaterial.is_terminal());
}

#[tokio::test]
async fn test_order_entity_basic() -> Result<(), DbErr> {
    let order_id = Uuid::new_v4();
    let operator_id = Uuid::new_v4();
    let forklift_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order::Model {
            id: order_id,
            operator: operator_id,
            forklift: forklift_id,
            state: OrderState::Pending,
            estimate_at: naive_date,
            order_at: None,
            created_at: naive_date,
            modified_at: naive_date,
        }]])
        .into_connection();

    let result = order::Entity::find_by_id(order_id).one(&db).await?;

    assert!(result.is_some());
    let order = result.unwrap();
    assert_eq!(order.state, OrderState::Pending);
    assert_eq!(order.operator, operator_id);
    assert!(order.order_at.is_none());

    Ok(())
}

#[tokio::test]
async fn test_order_line_entity_basic() -> Result<(), DbErr> {
    let line_id = Uuid::new_v4();
    let order_id = Uuid::new_v4();
    let material_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![material_by_order::Model {
            id: line_id,
            order: order_id,
            material: material_id,
            quantity: 3,
        }]])
        .into_connection();

    let result = material_by_order::Entity::find_by_id(line_id).one(&db).await?;

    assert!(result.is_some());
    let line = result.unwrap();
    assert_eq!(line.order, order_id);
    assert_eq!(line.material, material_id);
    assert_eq!(line.quantity, 3);

    Ok(())
}
