/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Access policy tests

use chrono::NaiveDate;
use core::consts::{ROLE_ADMIN, ROLE_FORKLIFT, ROLE_OPERATOR};
use core::roles::{
    OrderScope, RoleProfile, has_role, is_super_user_or_admin, order_scope, order_visible,
};
use core::types::{MOrder, MUser, Principal};
use entity::order::OrderState;
use uuid::Uuid;

fn principal(super_user: bool, roles: &[&str]) -> Principal {
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    Principal {
        user: MUser {
            id: Uuid::new_v4(),
            username: "someone".to_owned(),
            password: "hash".to_owned(),
            active: true,
            super_user,
            created_at: naive_date,
            modified_at: naive_date,
        },
        roles: roles.iter().map(|role| role.to_string()).collect(),
    }
}

fn order_for(operator: Uuid, forklift: Uuid) -> MOrder {
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    MOrder {
        id: Uuid::new_v4(),
        operator,
        forklift,
        state: OrderState::Pending,
        estimate_at: naive_date,
        order_at: None,
        created_at: naive_date,
        modified_at: naive_date,
    }
}

#[test]
fn test_has_role() {
    let roles = vec![ROLE_OPERATOR.to_string()];

    assert!(has_role(&roles, ROLE_OPERATOR));
    assert!(!has_role(&roles, ROLE_ADMIN));
    assert!(!has_role(&[], ROLE_OPERATOR));
}

#[test]
fn test_super_user_or_admin() {
    assert!(is_super_user_or_admin(&principal(true, &[])));
    assert!(is_super_user_or_admin(&principal(false, &[ROLE_ADMIN])));
    assert!(!is_super_user_or_admin(&principal(false, &[ROLE_OPERATOR])));
}

#[test]
fn test_order_scope_variants() {
    assert!(matches!(
        order_scope(&principal(true, &[])),
        OrderScope::Unrestricted
    ));
    assert!(matches!(
        order_scope(&principal(false, &[ROLE_ADMIN])),
        OrderScope::Unrestricted
    ));
    assert!(matches!(
        order_scope(&principal(false, &[ROLE_OPERATOR])),
        OrderScope::Restricted(_)
    ));
    assert!(matches!(
        order_scope(&principal(false, &[ROLE_OPERATOR, ROLE_FORKLIFT])),
        OrderScope::Restricted(_)
    ));
    assert!(matches!(
        order_scope(&principal(false, &[])),
        OrderScope::Nothing
    ));
}

#[test]
fn test_order_visibility() {
    let operator = principal(false, &[ROLE_OPERATOR]);
    let forklift = principal(false, &[ROLE_FORKLIFT]);
    let admin = principal(false, &[ROLE_ADMIN]);
    let outsider = principal(false, &[]);

    let own_by_operator = order_for(operator.user.id, forklift.user.id);
    let foreign = order_for(Uuid::new_v4(), Uuid::new_v4());

    assert!(order_visible(&operator, &own_by_operator));
    assert!(!order_visible(&operator, &foreign));

    assert!(order_visible(&forklift, &own_by_operator));
    assert!(!order_visible(&forklift, &foreign));

    assert!(order_visible(&admin, &foreign));
    assert!(!order_visible(&outsider, &foreign));
}

#[test]
fn test_operator_scoped_to_operator_column_only() {
    let operator = principal(false, &[ROLE_OPERATOR]);

    // Being named as the forklift on an order does not make it
    // visible to a plain operator.
    let named_as_forklift = order_for(Uuid::new_v4(), operator.user.id);

    assert!(!order_visible(&operator, &named_as_forklift));
}

#[test]
fn test_role_profile_tags() {
    let profile = RoleProfile::Operator {
        machine: "press-1".to_owned(),
        area: "north".to_owned(),
    };
    assert_eq!(profile.role_id(), ROLE_OPERATOR);

    let profile = RoleProfile::Forklift {
        name: "lift-7".to_owned(),
    };
    assert_eq!(profile.role_id(), ROLE_FORKLIFT);

    let profile = RoleProfile::Admin {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    assert_eq!(profile.role_id(), ROLE_ADMIN);
}
