/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_role;
use crate::error::{WebError, WebResult};
use crate::requests::{PageParams, parse_filter};
use axum::extract::{Path, Query, RawQuery, State};
use axum::{Extension, Json};
use chrono::NaiveDateTime;
use core::consts::{ROLE_FORKLIFT, ROLE_OPERATOR};
use core::crud;
use core::database::get_role_assignment;
use core::filter::OrderFilter;
use core::orders::{Applied, NewOrderLine, OrderAction, apply_transition, create_order};
use core::roles::{OrderScope, order_scope, order_visible};
use core::types::*;
use entity::order::OrderState;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct OrderLineRequest {
    pub material: Uuid,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeOrderRequest {
    pub forklift: Uuid,
    pub estimate_at: NaiveDateTime,
    pub lines: Vec<OrderLineRequest>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OrderLineResponse {
    pub material: Uuid,
    pub name: String,
    pub unit: String,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicOrderResponse {
    pub id: Uuid,
    pub operator: Uuid,
    pub forklift: Uuid,
    pub state: OrderState,
    pub canceled: bool,
    pub estimate_at: NaiveDateTime,
    pub order_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub lines: Vec<OrderLineResponse>,
}

async fn order_responses(
    db: &DatabaseConnection,
    orders: &[MOrder],
) -> WebResult<Vec<PublicOrderResponse>> {
    let order_ids: Vec<Uuid> = orders.iter().map(|order| order.id).collect();

    let lines = EMaterialByOrder::find()
        .filter(CMaterialByOrder::Order.is_in(order_ids))
        .all(db)
        .await?;

    let materials = crud::filter_by_id_list::<EMaterial>(
        db,
        lines.iter().map(|line| line.material).collect(),
    )
    .await?;
    let materials: HashMap<Uuid, &MMaterial> = materials
        .iter()
        .map(|material| (material.id, material))
        .collect();

    let mut lines_by_order: HashMap<Uuid, Vec<OrderLineResponse>> = HashMap::new();
    for line in &lines {
        if let Some(material) = materials.get(&line.material) {
            lines_by_order
                .entry(line.order)
                .or_default()
                .push(OrderLineResponse {
                    material: line.material,
                    name: material.name.clone(),
                    unit: material.unit.clone(),
                    quantity: line.quantity,
                });
        }
    }

    Ok(orders
        .iter()
        .map(|order| PublicOrderResponse {
            id: order.id,
            operator: order.operator,
            forklift: order.forklift,
            state: order.state.clone(),
            canceled: order.state.is_canceled(),
            estimate_at: order.estimate_at,
            order_at: order.order_at,
            created_at: order.created_at,
            lines: lines_by_order.remove(&order.id).unwrap_or_default(),
        })
        .collect())
}

async fn single_order_response(
    db: &DatabaseConnection,
    order: MOrder,
) -> WebResult<PublicOrderResponse> {
    order_responses(db, &[order])
        .await?
        .pop()
        .ok_or_else(|| WebError::InternalServerError("Failed to load order".to_string()))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Query(page): Query<PageParams>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<Paginated<Vec<PublicOrderResponse>>>> {
    let window = page.clamp(state.cli.max_page_size);

    let scope = match order_scope(&principal) {
        OrderScope::Unrestricted => None,
        OrderScope::Restricted(condition) => Some(condition),
        OrderScope::Nothing => {
            return Ok(Json(Paginated {
                data: Vec::new(),
                total: 0,
                page: window.page,
                size: window.size,
            }));
        }
    };

    let filter = parse_filter::<OrderFilter>(query.as_deref());

    let total = match scope.clone() {
        Some(condition) => crud::count_where::<EOrder>(&state.db, condition).await?,
        None => crud::count::<EOrder>(&state.db).await?,
    };

    let orders = crud::filter_partial(&state.db, scope, filter, window.skip, window.size).await?;

    let res = Paginated {
        data: order_responses(&state.db, &orders).await?,
        total,
        page: window.page,
        size: window.size,
    };

    Ok(Json(res))
}

pub async fn get_order(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(order): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    let order = crud::get_by_id::<EOrder>(&state.db, order)
        .await?
        .ok_or_else(|| WebError::not_found("Order"))?;

    // Out-of-scope orders read as absent, their existence is not leaked.
    if !order_visible(&principal, &order) {
        return Err(WebError::not_found("Order"));
    }

    let res = BaseResponse {
        error: false,
        message: single_order_response(&state.db, order).await?,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<MakeOrderRequest>,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    require_role(&principal, ROLE_OPERATOR)?;

    if body.lines.is_empty() {
        return Err(WebError::BadRequest(
            "Order must contain at least one material line".to_string(),
        ));
    }

    if body.lines.iter().any(|line| line.quantity <= 0) {
        return Err(WebError::BadRequest(
            "Material quantities must be positive".to_string(),
        ));
    }

    let forklift_assignment = get_role_assignment(&state.db, body.forklift, ROLE_FORKLIFT).await?;

    if forklift_assignment.is_none() {
        return Err(WebError::InvalidReference(
            "Named user is not a forklift operator".to_string(),
        ));
    }

    let lines = body
        .lines
        .iter()
        .map(|line| NewOrderLine {
            material: line.material,
            quantity: line.quantity,
        })
        .collect();

    // The operator is always the authenticated principal.
    let order = create_order(
        &state.db,
        principal.user.id,
        body.forklift,
        body.estimate_at,
        lines,
    )
    .await?;

    let res = BaseResponse {
        error: false,
        message: single_order_response(&state.db, order).await?,
    };

    Ok(Json(res))
}

fn state_label(state: &OrderState) -> &'static str {
    match state {
        OrderState::Pending => "pending",
        OrderState::Confirmed => "confirmed",
        OrderState::Delivered => "delivered",
        OrderState::CanceledByOperator | OrderState::CanceledNoMaterial => "canceled",
    }
}

async fn transition_order(
    state: &ServerState,
    principal: &Principal,
    order_id: Uuid,
    action: OrderAction,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    require_role(principal, action.actor_role())?;

    let order = crud::get_by_id::<EOrder>(&state.db, order_id)
        .await?
        .ok_or_else(|| WebError::not_found("Order"))?;

    let owned = if action.actor_role() == ROLE_OPERATOR {
        order.operator == principal.user.id
    } else {
        order.forklift == principal.user.id
    };

    if !owned {
        return Err(WebError::not_found("Order"));
    }

    match apply_transition(&state.db, order, action).map_err(WebError::from)? {
        Applied::AlreadyInState(order) => Err(WebError::AlreadyInState(format!(
            "Order already {}",
            state_label(&order.state)
        ))),
        Applied::Updated(order) => {
            let res = BaseResponse {
                error: false,
                message: single_order_response(&state.db, order).await?,
            };

            Ok(Json(res))
        }
    }
}

pub async fn post_confirm(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(order): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    transition_order(&state, &principal, order, OrderAction::Confirm).await
}

pub async fn delete_order(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(order): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    transition_order(&state, &principal, order, OrderAction::CancelByOperator).await
}

pub async fn post_no_material(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(order): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    transition_order(&state, &principal, order, OrderAction::CancelNoMaterial).await
}

pub async fn post_delivered(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(order): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicOrderResponse>>> {
    transition_order(&state, &principal, order, OrderAction::Deliver).await
}
