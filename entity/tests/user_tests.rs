/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: user_id,
            username: "testuser".to_owned(),
            password: "hashed_password".to_owned(),
            active: true,
            super_user: false,
            created_at: naive_date,
            modified_at: naive_date,
        }]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.username, "testuser");
    assert!(user.active);
    assert!(!user.super_user);

    Ok(())
}

#[tokio::test]
async fn test_role_assignment_lookup() -> Result<(), DbErr> {
    let assignment_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role_by_user::Model {
            id: assignment_id,
            role: "operator".to_owned(),
            user: user_id,
        }]])
        .into_connection();

    let result = role_by_user::Entity::find_by_id(assignment_id).one(&db).await?;

    assert!(result.is_some());
    let assignment = result.unwrap();
    assert_eq!(assignment.role, "operator");
    assert_eq!(assignment.user, user_id);

    Ok(())
}
