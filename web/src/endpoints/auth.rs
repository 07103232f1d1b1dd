/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{decode_refresh_token, encode_access_token, encode_refresh_token};
use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::{Extension, Json};
use chrono::Utc;
use core::database::{get_user_by_username, load_role_ids};
use core::input::{validate_password, validate_username};
use core::types::*;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchMeRequest {
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    pub id: Uuid,
    pub username: String,
    pub active: bool,
    pub super_user: bool,
    pub roles: Vec<String>,
}

impl UserInfoResponse {
    pub fn new(user: &MUser, roles: Vec<String>) -> Self {
        UserInfoResponse {
            id: user.id,
            username: user.username.clone(),
            active: user.active,
            super_user: user.super_user,
            roles,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenWithUserResponse {
    pub user: UserInfoResponse,
    pub access_token: String,
    pub access_expires_at: i64,
    pub refresh_token: String,
    pub refresh_expires_at: i64,
    pub token_type: String,
}

fn token_payload(cli: &Cli, user: &MUser, roles: Vec<String>) -> WebResult<TokenWithUserResponse> {
    let (access_token, access_expires_at) =
        encode_access_token(cli, user.id).map_err(|_| WebError::failed_to_generate_token())?;
    let (refresh_token, refresh_expires_at) =
        encode_refresh_token(cli, user.id).map_err(|_| WebError::failed_to_generate_token())?;

    Ok(TokenWithUserResponse {
        user: UserInfoResponse::new(user, roles),
        access_token,
        access_expires_at,
        refresh_token,
        refresh_expires_at,
        token_type: "Bearer".to_string(),
    })
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<BaseResponse<TokenWithUserResponse>>> {
    let user = get_user_by_username(&state.db, &body.username)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password).map_err(|_| WebError::invalid_credentials())?;

    if !user.active {
        return Err(WebError::inactive_user());
    }

    let roles = load_role_ids(&state.db, user.id).await?;
    tracing::debug!("User {} logged in", user.username);

    let res = BaseResponse {
        error: false,
        message: token_payload(&state.cli, &user, roles)?,
    };

    Ok(Json(res))
}

pub async fn post_refresh(
    state: State<Arc<ServerState>>,
    Json(body): Json<RefreshRequest>,
) -> WebResult<Json<BaseResponse<TokenWithUserResponse>>> {
    let claims = decode_refresh_token(&state.cli, &body.refresh_token)
        .ok_or_else(|| WebError::Unauthorized("Invalid or expired refresh token".to_string()))?;

    let user = EUser::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::Unauthorized("Invalid or expired refresh token".to_string()))?;

    if !user.active {
        return Err(WebError::inactive_user());
    }

    let roles = load_role_ids(&state.db, user.id).await?;

    let res = BaseResponse {
        error: false,
        message: token_payload(&state.cli, &user, roles)?,
    };

    Ok(Json(res))
}

pub async fn get_me(
    Extension(principal): Extension<Principal>,
) -> WebResult<Json<BaseResponse<UserInfoResponse>>> {
    let res = BaseResponse {
        error: false,
        message: UserInfoResponse::new(&principal.user, principal.roles.clone()),
    };

    Ok(Json(res))
}

pub async fn patch_me(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<PatchMeRequest>,
) -> WebResult<Json<BaseResponse<UserInfoResponse>>> {
    let mut auser: AUser = principal.user.clone().into();
    let mut changed = false;

    if let Some(username) = body.username {
        if let Err(reason) = validate_username(&username) {
            return Err(WebError::invalid_username(reason));
        }

        let existing_user = EUser::find()
            .filter(CUser::Username.eq(username.clone()))
            .one(&state.db)
            .await?;

        if existing_user.is_some_and(|existing| existing.id != principal.user.id) {
            return Err(WebError::already_exists("Username"));
        }

        auser.username = Set(username);
        changed = true;
    }

    let user = if changed {
        auser.modified_at = Set(Utc::now().naive_utc());
        auser.update(&state.db).await?
    } else {
        principal.user.clone()
    };

    let res = BaseResponse {
        error: false,
        message: UserInfoResponse::new(&user, principal.roles.clone()),
    };

    Ok(Json(res))
}

pub async fn patch_me_password(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<ChangePasswordRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    verify_password(body.old_password, &principal.user.password)
        .map_err(|_| WebError::Unauthorized("Incorrect password".to_string()))?;

    if let Err(reason) = validate_password(&body.password) {
        return Err(WebError::invalid_password(reason));
    }

    let mut auser: AUser = principal.user.clone().into();
    auser.password = Set(generate_hash(body.password));
    auser.modified_at = Set(Utc::now().naive_utc());
    auser.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Password updated".to_string(),
    };

    Ok(Json(res))
}
