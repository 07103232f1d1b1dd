/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Generic record store tests

use chrono::NaiveDate;
use core::crud;
use core::filter::MaterialFilter;
use core::types::{EMaterial, MMaterial, MUser};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use uuid::Uuid;

fn sample_material(name: &str) -> MMaterial {
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    MMaterial {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        unit: "kg".to_owned(),
        color: None,
        image: None,
        created_at: naive_date,
        modified_at: naive_date,
    }
}

fn sample_user(username: &str) -> MUser {
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    MUser {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        password: "hash".to_owned(),
        active: true,
        super_user: false,
        created_at: naive_date,
        modified_at: naive_date,
    }
}

#[tokio::test]
async fn test_get_by_id_absent() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MMaterial>::new()])
        .into_connection();

    let result = crud::get_by_id::<EMaterial>(&db, Uuid::new_v4()).await?;

    assert!(result.is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_reports_absence() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    assert!(crud::delete::<EMaterial>(&db, Uuid::new_v4()).await?);
    assert!(!crud::delete::<EMaterial>(&db, Uuid::new_v4()).await?);
    Ok(())
}

#[tokio::test]
async fn test_update_with_empty_change_set_is_a_noop() -> Result<(), DbErr> {
    // No query results queued: touching the database would fail.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let user = sample_user("alice");
    let unchanged: core::types::AUser = user.clone().into();

    let result = crud::update(&db, user.clone(), unchanged).await?;

    assert_eq!(result, user);
    Ok(())
}

#[tokio::test]
async fn test_filter_partial_without_filter() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_material("steel"), sample_material("copper")]])
        .into_connection();

    let rows =
        crud::filter_partial::<MaterialFilter>(&db, None, None, 0, 100).await?;

    assert_eq!(rows.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_filter_partial_falls_back_on_query_failure() -> Result<(), DbErr> {
    // First query (filtered) fails at the storage layer; the store
    // must serve the unfiltered page instead of propagating.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("operator does not exist".to_owned())])
        .append_query_results([vec![sample_material("steel")]])
        .into_connection();

    let filter = MaterialFilter {
        name: Some("steel".to_owned()),
        ..Default::default()
    };

    let rows = crud::filter_partial(&db, None, Some(filter), 0, 100).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "steel");
    Ok(())
}

#[tokio::test]
async fn test_filter_by_attributes() -> Result<(), DbErr> {
    use core::types::CMaterial;
    use sea_orm::{ColumnTrait, Condition};

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_material("steel")]])
        .into_connection();

    let rows = crud::filter_by_attributes::<EMaterial>(
        &db,
        Condition::all().add(CMaterial::Unit.eq("kg")),
        0,
        100,
    )
    .await?;

    assert_eq!(rows.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_id_list() -> Result<(), DbErr> {
    let first = sample_material("steel");
    let second = sample_material("copper");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![first.clone(), second.clone()]])
        .into_connection();

    let rows = crud::filter_by_id_list::<EMaterial>(&db, vec![first.id, second.id]).await?;

    assert_eq!(rows.len(), 2);
    Ok(())
}
