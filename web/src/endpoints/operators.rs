/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_admin;
use crate::error::{WebError, WebResult};
use crate::requests::{PageParams, parse_filter};
use axum::extract::{Path, Query, RawQuery, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::consts::ROLE_OPERATOR;
use core::crud;
use core::database::{create_user_with_profile, get_role_assignment, get_user_by_username};
use core::filter::OperatorFilter;
use core::input::{validate_password, validate_username};
use core::roles::RoleProfile;
use core::types::*;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeOperatorRequest {
    pub username: String,
    pub password: String,
    pub machine: String,
    pub area: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchOperatorRequest {
    pub username: Option<String>,
    pub machine: Option<String>,
    pub area: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicOperatorResponse {
    pub id: Uuid,
    pub username: String,
    pub active: bool,
    pub super_user: bool,
    pub machine: String,
    pub area: String,
}

fn operator_response(user: &MUser, profile: &MOperator) -> PublicOperatorResponse {
    PublicOperatorResponse {
        id: user.id,
        username: user.username.clone(),
        active: user.active,
        super_user: user.super_user,
        machine: profile.machine.clone(),
        area: profile.area.clone(),
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(page): Query<PageParams>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<Paginated<Vec<PublicOperatorResponse>>>> {
    let window = page.clamp(state.cli.max_page_size);
    let filter = parse_filter::<OperatorFilter>(query.as_deref());

    let total = crud::count::<EOperator>(&state.db).await?;
    let profiles = crud::filter_partial(&state.db, None, filter, window.skip, window.size).await?;

    let assignments = crud::filter_by_id_list::<ERoleByUser>(
        &state.db,
        profiles.iter().map(|profile| profile.id).collect(),
    )
    .await?;
    let users = crud::filter_by_id_list::<EUser>(
        &state.db,
        assignments.iter().map(|assignment| assignment.user).collect(),
    )
    .await?;

    let assignment_users: HashMap<Uuid, Uuid> = assignments
        .iter()
        .map(|assignment| (assignment.id, assignment.user))
        .collect();
    let users: HashMap<Uuid, &MUser> = users.iter().map(|user| (user.id, user)).collect();

    let data = profiles
        .iter()
        .filter_map(|profile| {
            let user = assignment_users
                .get(&profile.id)
                .and_then(|user_id| users.get(user_id).copied())?;
            Some(operator_response(user, profile))
        })
        .collect();

    let res = Paginated {
        data,
        total,
        page: window.page,
        size: window.size,
    };

    Ok(Json(res))
}

async fn find_operator(
    state: &ServerState,
    user_id: Uuid,
) -> WebResult<(MUser, MRoleByUser, MOperator)> {
    let assignment = get_role_assignment(&state.db, user_id, ROLE_OPERATOR)
        .await?
        .ok_or_else(|| WebError::not_found("Operator"))?;

    let profile = crud::get_by_id::<EOperator>(&state.db, assignment.id)
        .await?
        .ok_or_else(|| WebError::not_found("Operator"))?;

    let user = crud::get_by_id::<EUser>(&state.db, user_id)
        .await?
        .ok_or_else(|| WebError::not_found("Operator"))?;

    Ok((user, assignment, profile))
}

pub async fn get_operator(
    state: State<Arc<ServerState>>,
    Path(user): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicOperatorResponse>>> {
    let (user, _assignment, profile) = find_operator(&state, user).await?;

    let res = BaseResponse {
        error: false,
        message: operator_response(&user, &profile),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<MakeOperatorRequest>,
) -> WebResult<Json<BaseResponse<PublicOperatorResponse>>> {
    require_admin(&principal)?;

    if let Err(reason) = validate_username(&body.username) {
        return Err(WebError::invalid_username(reason));
    }

    if let Err(reason) = validate_password(&body.password) {
        return Err(WebError::invalid_password(reason));
    }

    let existing_user = get_user_by_username(&state.db, &body.username).await?;

    if existing_user.is_some() {
        return Err(WebError::already_exists("User"));
    }

    let user = create_user_with_profile(
        &state.db,
        &body.username,
        generate_hash(body.password),
        true,
        RoleProfile::Operator {
            machine: body.machine.clone(),
            area: body.area.clone(),
        },
    )
    .await?;

    let (user, _assignment, profile) = find_operator(&state, user.id).await?;

    let res = BaseResponse {
        error: false,
        message: operator_response(&user, &profile),
    };

    Ok(Json(res))
}

pub async fn patch_operator(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(user): Path<Uuid>,
    Json(body): Json<PatchOperatorRequest>,
) -> WebResult<Json<BaseResponse<PublicOperatorResponse>>> {
    require_admin(&principal)?;

    let (user, _assignment, profile) = find_operator(&state, user).await?;

    if user.super_user {
        return Err(WebError::protected_user());
    }

    let user = if let Some(username) = body.username {
        if let Err(reason) = validate_username(&username) {
            return Err(WebError::invalid_username(reason));
        }

        let existing_user = get_user_by_username(&state.db, &username).await?;

        if existing_user.is_some_and(|existing| existing.id != user.id) {
            return Err(WebError::already_exists("Username"));
        }

        let mut auser: AUser = user.into();
        auser.username = Set(username);
        auser.modified_at = Set(Utc::now().naive_utc());
        auser.update(&state.db).await?
    } else {
        user
    };

    let mut aprofile: AOperator = profile.clone().into();

    if let Some(machine) = body.machine {
        aprofile.machine = Set(machine);
    }

    if let Some(area) = body.area {
        aprofile.area = Set(area);
    }

    let profile = crud::update(&state.db, profile, aprofile).await?;

    let res = BaseResponse {
        error: false,
        message: operator_response(&user, &profile),
    };

    Ok(Json(res))
}

pub async fn delete_operator(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(user): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_admin(&principal)?;

    let (user, _assignment, _profile) = find_operator(&state, user).await?;

    if user.super_user {
        return Err(WebError::protected_user());
    }

    // Dropping the user cascades to the assignment and the profile.
    if !crud::delete::<EUser>(&state.db, user.id).await? {
        return Err(WebError::not_found("Operator"));
    }

    let res = BaseResponse {
        error: false,
        message: "Operator deleted".to_string(),
    };

    Ok(Json(res))
}
