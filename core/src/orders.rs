/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Order lifecycle. Transitions are planned against the observed state
//! and applied with a compare-and-swap so two racing requests cannot
//! both win.

use chrono::Utc;
use entity::order::OrderState;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use std::fmt;
use uuid::Uuid;

use super::consts::{ROLE_FORKLIFT, ROLE_OPERATOR};
use super::types::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrderAction {
    Confirm,
    CancelByOperator,
    CancelNoMaterial,
    Deliver,
}

impl OrderAction {
    pub fn target(&self) -> OrderState {
        match self {
            Self::Confirm => OrderState::Confirmed,
            Self::CancelByOperator => OrderState::CanceledByOperator,
            Self::CancelNoMaterial => OrderState::CanceledNoMaterial,
            Self::Deliver => OrderState::Delivered,
        }
    }

    /// Role that may trigger the action, always against its own orders.
    pub fn actor_role(&self) -> &'static str {
        match self {
            Self::Confirm | Self::CancelByOperator => ROLE_OPERATOR,
            Self::CancelNoMaterial | Self::Deliver => ROLE_FORKLIFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    AlreadyDelivered,
    AlreadyCanceled,
    /// The compare-and-swap found a different state than observed.
    StateChanged,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::AlreadyDelivered => write!(f, "Order has already been delivered"),
            OrderError::AlreadyCanceled => write!(f, "Order has already been canceled"),
            OrderError::StateChanged => write!(f, "Order was modified concurrently"),
        }
    }
}

impl std::error::Error for OrderError {}

#[derive(Debug)]
pub enum TransitionError {
    Order(OrderError),
    Db(DbErr),
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::Order(err) => write!(f, "{}", err),
            TransitionError::Db(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for TransitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransitionError::Order(err) => Some(err),
            TransitionError::Db(err) => Some(err),
        }
    }
}

impl From<OrderError> for TransitionError {
    fn from(err: OrderError) -> Self {
        TransitionError::Order(err)
    }
}

impl From<DbErr> for TransitionError {
    fn from(err: DbErr) -> Self {
        TransitionError::Db(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Apply(OrderState),
    /// The target state already holds; a repeat of an earlier request,
    /// not an error.
    AlreadyInState,
}

pub fn plan_transition(current: &OrderState, action: OrderAction) -> Result<Transition, OrderError> {
    let target = action.target();

    if *current == target {
        return Ok(Transition::AlreadyInState);
    }

    match current {
        OrderState::Delivered => Err(OrderError::AlreadyDelivered),
        OrderState::CanceledByOperator | OrderState::CanceledNoMaterial => {
            Err(OrderError::AlreadyCanceled)
        }
        OrderState::Pending | OrderState::Confirmed => Ok(Transition::Apply(target)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Updated(MOrder),
    AlreadyInState(MOrder),
}

pub async fn apply_transition(
    db: &DatabaseConnection,
    order: MOrder,
    action: OrderAction,
) -> Result<Applied, TransitionError> {
    let target = match plan_transition(&order.state, action)? {
        Transition::AlreadyInState => return Ok(Applied::AlreadyInState(order)),
        Transition::Apply(target) => target,
    };

    let now = Utc::now().naive_utc();
    let mut update = EOrder::update_many()
        .col_expr(COrder::State, Expr::value(target.clone()))
        .col_expr(COrder::ModifiedAt, Expr::value(now));

    if target == OrderState::Delivered {
        update = update.col_expr(COrder::OrderAt, Expr::value(Some(now)));
    }

    let result = update
        .filter(COrder::Id.eq(order.id))
        .filter(COrder::State.eq(order.state.clone()))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(OrderError::StateChanged.into());
    }

    let updated = EOrder::find_by_id(order.id)
        .one(db)
        .await?
        .ok_or(OrderError::StateChanged)?;

    Ok(Applied::Updated(updated))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub material: Uuid,
    pub quantity: i64,
}

/// Persists the order and all of its material lines in one
/// transaction. The operator id comes from the authenticated
/// principal, never from the request payload.
pub async fn create_order(
    db: &DatabaseConnection,
    operator: Uuid,
    forklift: Uuid,
    estimate_at: chrono::NaiveDateTime,
    lines: Vec<NewOrderLine>,
) -> Result<MOrder, DbErr> {
    let txn = db.begin().await?;
    let now = Utc::now().naive_utc();

    let order = AOrder {
        id: Set(Uuid::new_v4()),
        operator: Set(operator),
        forklift: Set(forklift),
        state: Set(OrderState::Pending),
        estimate_at: Set(estimate_at),
        order_at: Set(None),
        created_at: Set(now),
        modified_at: Set(now),
    }
    .insert(&txn)
    .await?;

    for line in lines {
        AMaterialByOrder {
            id: Set(Uuid::new_v4()),
            order: Set(order.id),
            material: Set(line.material),
            quantity: Set(line.quantity),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(order)
}
