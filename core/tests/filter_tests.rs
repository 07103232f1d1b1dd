/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Filter builder tests, asserted against the generated SQL.

use core::filter::{MaterialFilter, OrderFilter, RecordFilter, UserFilter};
use core::types::{EOrder, EUser};
use entity::order::OrderState;
use sea_orm::{DbBackend, EntityTrait, QueryTrait};

#[test]
fn test_order_filter_default_sort_is_newest_first() {
    let filter = OrderFilter::default();
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#"ORDER BY "orders"."created_at" DESC"#), "{}", sql);
}

#[test]
fn test_order_filter_state_predicate() {
    let filter = OrderFilter {
        state: Some(OrderState::Confirmed),
        ..Default::default()
    };
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#""orders"."state" = 1"#), "{}", sql);
}

#[test]
fn test_order_filter_canceled_maps_to_state_set() {
    let filter = OrderFilter {
        canceled: Some(true),
        ..Default::default()
    };
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#""orders"."state" IN (3, 4)"#), "{}", sql);

    let filter = OrderFilter {
        canceled: Some(false),
        ..Default::default()
    };
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#""orders"."state" NOT IN (3, 4)"#), "{}", sql);
}

#[test]
fn test_order_filter_created_range() {
    let filter: OrderFilter =
        serde_urlencoded::from_str("created_gte=2025-01-01T00:00:00&created_lt=2025-02-01T00:00:00")
            .unwrap();
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#""orders"."created_at" >="#), "{}", sql);
    assert!(sql.contains(r#""orders"."created_at" <"#), "{}", sql);
}

#[test]
fn test_order_filter_rejects_malformed_query() {
    let parsed = serde_urlencoded::from_str::<OrderFilter>("created_gt=not-a-date");

    assert!(parsed.is_err());
}

#[test]
fn test_order_filter_custom_sort() {
    let filter = OrderFilter {
        order_by: Some("state,-created_at".to_string()),
        ..Default::default()
    };
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(
        sql.contains(r#"ORDER BY "orders"."state" ASC, "orders"."created_at" DESC"#),
        "{}",
        sql
    );
}

#[test]
fn test_unknown_sort_keys_are_ignored() {
    let filter = OrderFilter {
        order_by: Some("nonsense".to_string()),
        ..Default::default()
    };
    let sql = filter.apply(EOrder::find()).build(DbBackend::Postgres).to_string();

    assert!(!sql.contains("ORDER BY"), "{}", sql);
}

#[test]
fn test_user_filter_predicates() {
    let filter = UserFilter {
        username: Some("alice".to_string()),
        active: Some(true),
        ..Default::default()
    };
    let sql = filter.apply(EUser::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#""users"."username" = 'alice'"#), "{}", sql);
    assert!(sql.contains(r#""users"."active" = TRUE"#), "{}", sql);
    assert!(sql.contains(r#"ORDER BY "users"."username" ASC"#), "{}", sql);
}

#[test]
fn test_user_filter_search_uses_like() {
    let filter = UserFilter {
        search: Some("ali".to_string()),
        ..Default::default()
    };
    let sql = filter.apply(EUser::find()).build(DbBackend::Postgres).to_string();

    assert!(sql.contains(r#"LIKE '%ali%'"#), "{}", sql);
}

#[test]
fn test_material_filter_parses_from_query_string() {
    let filter: MaterialFilter =
        serde_urlencoded::from_str("name_like=steel&order_by=-created_at&page=2").unwrap();

    assert_eq!(filter.name_like.as_deref(), Some("steel"));
    assert_eq!(filter.order_by.as_deref(), Some("-created_at"));
    assert!(filter.name.is_none());
}
