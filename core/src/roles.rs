/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Capability checks for authenticated principals and the visibility
//! scoping they impose on order queries.

use sea_orm::{ColumnTrait, Condition};

use super::consts::{ROLE_ADMIN, ROLE_FORKLIFT, ROLE_OPERATOR};
use super::types::*;

/// Role-specific profile payload. Exactly one variant exists per role
/// assignment, so the "one profile per assignment" rule holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    Admin {
        first_name: String,
        last_name: String,
    },
    Operator {
        machine: String,
        area: String,
    },
    Forklift {
        name: String,
    },
}

impl RoleProfile {
    pub fn role_id(&self) -> &'static str {
        match self {
            Self::Admin { .. } => ROLE_ADMIN,
            Self::Operator { .. } => ROLE_OPERATOR,
            Self::Forklift { .. } => ROLE_FORKLIFT,
        }
    }
}

pub fn has_role(roles: &[String], role: &str) -> bool {
    roles.iter().any(|assigned| assigned == role)
}

pub fn is_super_user_or_admin(principal: &Principal) -> bool {
    principal.user.super_user || has_role(&principal.roles, ROLE_ADMIN)
}

/// Which orders a principal may see.
#[derive(Debug, Clone)]
pub enum OrderScope {
    /// Admins and super users see everything.
    Unrestricted,
    /// Operators and forklift operators see the orders naming them.
    Restricted(Condition),
    /// No qualifying role, nothing is visible.
    Nothing,
}

pub fn order_scope(principal: &Principal) -> OrderScope {
    if is_super_user_or_admin(principal) {
        return OrderScope::Unrestricted;
    }

    let mut condition = Condition::any();
    let mut scoped = false;

    if has_role(&principal.roles, ROLE_OPERATOR) {
        condition = condition.add(COrder::Operator.eq(principal.user.id));
        scoped = true;
    }

    if has_role(&principal.roles, ROLE_FORKLIFT) {
        condition = condition.add(COrder::Forklift.eq(principal.user.id));
        scoped = true;
    }

    if scoped {
        OrderScope::Restricted(condition)
    } else {
        OrderScope::Nothing
    }
}

/// Single-record counterpart of [`order_scope`]. Out-of-scope orders
/// are reported as absent, never as forbidden.
pub fn order_visible(principal: &Principal, order: &MOrder) -> bool {
    match order_scope(principal) {
        OrderScope::Unrestricted => true,
        OrderScope::Nothing => false,
        OrderScope::Restricted(_) => {
            (has_role(&principal.roles, ROLE_OPERATOR) && order.operator == principal.user.id)
                || (has_role(&principal.roles, ROLE_FORKLIFT)
                    && order.forklift == principal.user.id)
        }
    }
}
