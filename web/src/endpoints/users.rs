/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{require_admin, require_super_user};
use crate::error::{WebError, WebResult};
use crate::requests::{PageParams, parse_filter};
use axum::extract::{Path, Query, RawQuery, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::crud;
use core::database::get_user_by_username;
use core::filter::UserFilter;
use core::input::{validate_password, validate_username};
use core::types::*;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub username: String,
    pub password: String,
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchUserRequest {
    pub username: Option<String>,
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SetPasswordRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicUserResponse {
    pub id: Uuid,
    pub username: String,
    pub active: bool,
    pub super_user: bool,
}

impl From<&MUser> for PublicUserResponse {
    fn from(user: &MUser) -> Self {
        PublicUserResponse {
            id: user.id,
            username: user.username.clone(),
            active: user.active,
            super_user: user.super_user,
        }
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Query(page): Query<PageParams>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<Paginated<Vec<PublicUserResponse>>>> {
    require_admin(&principal)?;

    let window = page.clamp(state.cli.max_page_size);
    let filter = parse_filter::<UserFilter>(query.as_deref());

    let total = crud::count::<EUser>(&state.db).await?;
    let users = crud::filter_partial(&state.db, None, filter, window.skip, window.size).await?;

    let res = Paginated {
        data: users.iter().map(PublicUserResponse::from).collect(),
        total,
        page: window.page,
        size: window.size,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<MakeUserRequest>,
) -> WebResult<Json<BaseResponse<PublicUserResponse>>> {
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

    let now = Utc::now().naive_utc();
    let user = crud::create(
        &state.db,
        AUser {
            id: Set(Uuid::new_v4()),
            username: Set(body.username.clone()),
            password: Set(generate_hash(body.password)),
            active: Set(body.active.unwrap_or(true)),
            super_user: Set(false),
            created_at: Set(now),
            modified_at: Set(now),
        },
    )
    .await?;

    let res = BaseResponse {
        error: false,
        message: PublicUserResponse::from(&user),
    };

    Ok(Json(res))
}

pub async fn get_user(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(user): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicUserResponse>>> {
    require_admin(&principal)?;

    let user = crud::get_by_id::<EUser>(&state.db, user)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let res = BaseResponse {
        error: false,
        message: PublicUserResponse::from(&user),
    };

    Ok(Json(res))
}

pub async fn patch_user(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(user): Path<Uuid>,
    Json(body): Json<PatchUserRequest>,
) -> WebResult<Json<BaseResponse<PublicUserResponse>>> {
    require_admin(&principal)?;

    let user = crud::get_by_id::<EUser>(&state.db, user)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    if user.super_user {
        return Err(WebError::protected_user());
    }

    let mut auser: AUser = user.clone().into();

    if let Some(username) = body.username {
        if let Err(reason) = validate_username(&username) {
            return Err(WebError::invalid_username(reason));
        }

        let existing_user = get_user_by_username(&state.db, &username).await?;

        if existing_user.is_some_and(|existing| existing.id != user.id) {
            return Err(WebError::already_exists("Username"));
        }

        auser.username = Set(username);
    }

    if let Some(active) = body.active {
        auser.active = Set(active);
    }

    auser.modified_at = Set(Utc::now().naive_utc());
    let user = crud::update(&state.db, user, auser).await?;

    let res = BaseResponse {
        error: false,
        message: PublicUserResponse::from(&user),
    };

    Ok(Json(res))
}

pub async fn patch_user_password(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(user): Path<Uuid>,
    Json(body): Json<SetPasswordRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_admin(&principal)?;

    let user = crud::get_by_id::<EUser>(&state.db, user)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    if user.super_user {
        return Err(WebError::protected_user());
    }

    if let Err(reason) = validate_password(&body.password) {
        return Err(WebError::invalid_password(reason));
    }

    let mut auser: AUser = user.clone().into();
    auser.password = Set(generate_hash(body.password));
    auser.modified_at = Set(Utc::now().naive_utc());
    crud::update(&state.db, user, auser).await?;

    let res = BaseResponse {
        error: false,
        message: "Password updated".to_string(),
    };

    Ok(Json(res))
}

pub async fn delete_user(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(user): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_super_user(&principal)?;

    let user = crud::get_by_id::<EUser>(&state.db, user)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    if user.super_user {
        return Err(WebError::protected_user());
    }

    if !crud::delete::<EUser>(&state.db, user.id).await? {
        return Err(WebError::not_found("User"));
    }

    let res = BaseResponse {
        error: false,
        message: "User deleted".to_string(),
    };

    Ok(Json(res))
}
