/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Json, Response};
use chrono::{Duration, Utc};
use core::database::load_role_ids;
use core::input::load_secret;
use core::roles::{has_role, is_super_user_or_admin};
use core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::error::{WebError, WebResult};

#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
}

pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, (StatusCode, Json<BaseResponse<String>>)> {
    let auth_header = req.headers_mut().get(axum::http::header::AUTHORIZATION);

    let auth_header = match auth_header {
        Some(header) => header.to_str().map_err(|_| {
            (
                StatusCode::FORBIDDEN,
                Json(BaseResponse {
                    error: true,
                    message: "Authorization header empty".to_string(),
                }),
            )
        })?,
        None => {
            return Err((
                StatusCode::FORBIDDEN,
                Json(BaseResponse {
                    error: true,
                    message: "Authorization header not found".to_string(),
                }),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let (bearer, token) = (header.next(), header.next());

    if bearer != Some("Bearer") || token.is_none() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(BaseResponse {
                error: true,
                message: "Invalid Authorization header".to_string(),
            }),
        ));
    }

    let token_str = match token {
        Some(token) => token.to_string(),
        None => {
            return Err((
                StatusCode::FORBIDDEN,
                Json(BaseResponse {
                    error: true,
                    message: "Missing authorization token".to_string(),
                }),
            ));
        }
    };

    let claims = match decode_access_token(&state.cli, &token_str) {
        Some(claims) => claims,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(BaseResponse {
                    error: true,
                    message: "Unable to decode token".to_string(),
                }),
            ));
        }
    };

    let current_user = match EUser::find_by_id(claims.sub)
        .one(&state.db)
        .await
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BaseResponse {
                    error: true,
                    message: "Database error".to_string(),
                }),
            )
        })? {
        Some(user) => user,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(BaseResponse {
                    error: true,
                    message: "User not found".to_string(),
                }),
            ));
        }
    };

    // Inactive principals are rejected everywhere except login/refresh,
    // which live outside this layer.
    if !current_user.active {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(BaseResponse {
                error: true,
                message: "User inactive".to_string(),
            }),
        ));
    }

    let roles = load_role_ids(&state.db, current_user.id)
        .await
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BaseResponse {
                    error: true,
                    message: "Database error".to_string(),
                }),
            )
        })?;

    req.extensions_mut().insert(Principal {
        user: current_user,
        roles,
    });
    Ok(next.run(req).await)
}

fn issue_token(secret_file: &str, id: Uuid, expiration_seconds: i64) -> Result<(String, i64)> {
    let now = Utc::now();
    let expires_at = (now + Duration::seconds(expiration_seconds)).timestamp();

    let claims = Claims {
        sub: id,
        exp: expires_at as usize,
        iat: now.timestamp() as usize,
    };
    let secret = load_secret(secret_file);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .context("Failed to encode token")?;

    Ok((token, expires_at))
}

fn decode_token(secret_file: &str, jwt: &str) -> Option<Claims> {
    let secret = load_secret(secret_file);

    decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

pub fn encode_access_token(cli: &Cli, id: Uuid) -> Result<(String, i64)> {
    issue_token(&cli.jwt_access_secret_file, id, cli.access_token_expiration)
}

pub fn encode_refresh_token(cli: &Cli, id: Uuid) -> Result<(String, i64)> {
    issue_token(
        &cli.jwt_refresh_secret_file,
        id,
        cli.refresh_token_expiration,
    )
}

/// `None` on a bad signature or an expired token.
pub fn decode_access_token(cli: &Cli, jwt: &str) -> Option<Claims> {
    decode_token(&cli.jwt_access_secret_file, jwt)
}

pub fn decode_refresh_token(cli: &Cli, jwt: &str) -> Option<Claims> {
    decode_token(&cli.jwt_refresh_secret_file, jwt)
}

pub fn require_admin(principal: &Principal) -> WebResult<()> {
    if is_super_user_or_admin(principal) {
        Ok(())
    } else {
        Err(WebError::permission_denied())
    }
}

pub fn require_super_user(principal: &Principal) -> WebResult<()> {
    if principal.user.super_user {
        Ok(())
    } else {
        Err(WebError::permission_denied())
    }
}

pub fn require_role(principal: &Principal, role: &str) -> WebResult<()> {
    if has_role(&principal.roles, role) {
        Ok(())
    } else {
        Err(WebError::permission_denied())
    }
}
