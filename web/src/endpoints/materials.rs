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
use core::crud;
use core::filter::MaterialFilter;
use core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeMaterialRequest {
    pub name: String,
    pub unit: String,
    pub color: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchMaterialRequest {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicMaterialResponse {
    pub id: Uuid,
    pub name: String,
    pub unit: String,
    pub color: Option<String>,
    pub image: Option<String>,
}

impl From<&MMaterial> for PublicMaterialResponse {
    fn from(material: &MMaterial) -> Self {
        PublicMaterialResponse {
            id: material.id,
            name: material.name.clone(),
            unit: material.unit.clone(),
            color: material.color.clone(),
            image: material.image.clone(),
        }
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(page): Query<PageParams>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<Paginated<Vec<PublicMaterialResponse>>>> {
    let window = page.clamp(state.cli.max_page_size);
    let filter = parse_filter::<MaterialFilter>(query.as_deref());

    let total = crud::count::<EMaterial>(&state.db).await?;
    let materials = crud::filter_partial(&state.db, None, filter, window.skip, window.size).await?;

    let res = Paginated {
        data: materials.iter().map(PublicMaterialResponse::from).collect(),
        total,
        page: window.page,
        size: window.size,
    };

    Ok(Json(res))
}

pub async fn get_material(
    state: State<Arc<ServerState>>,
    Path(material): Path<Uuid>,
) -> WebResult<Json<BaseResponse<PublicMaterialResponse>>> {
    let material = crud::get_by_id::<EMaterial>(&state.db, material)
        .await?
        .ok_or_else(|| WebError::not_found("Material"))?;

    let res = BaseResponse {
        error: false,
        message: PublicMaterialResponse::from(&material),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<MakeMaterialRequest>,
) -> WebResult<Json<BaseResponse<PublicMaterialResponse>>> {
    require_admin(&principal)?;

    let existing_material = EMaterial::find()
        .filter(CMaterial::Name.eq(body.name.clone()))
        .one(&state.db)
        .await?;

    if existing_material.is_some() {
        return Err(WebError::already_exists("Material"));
    }

    let now = Utc::now().naive_utc();
    let material = crud::create(
        &state.db,
        AMaterial {
            id: Set(Uuid::new_v4()),
            name: Set(body.name.clone()),
            unit: Set(body.unit.clone()),
            color: Set(body.color.clone()),
            image: Set(body.image.clone()),
            created_at: Set(now),
            modified_at: Set(now),
        },
    )
    .await?;

    let res = BaseResponse {
        error: false,
        message: PublicMaterialResponse::from(&material),
    };

    Ok(Json(res))
}

pub async fn patch_material(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(material): Path<Uuid>,
    Json(body): Json<PatchMaterialRequest>,
) -> WebResult<Json<BaseResponse<PublicMaterialResponse>>> {
    require_admin(&principal)?;

    let material = crud::get_by_id::<EMaterial>(&state.db, material)
        .await?
        .ok_or_else(|| WebError::not_found("Material"))?;

    let mut amaterial: AMaterial = material.clone().into();

    if let Some(name) = body.name {
        let existing_material = EMaterial::find()
            .filter(CMaterial::Name.eq(name.clone()))
            .one(&state.db)
            .await?;

        if existing_material.is_some_and(|existing| existing.id != material.id) {
            return Err(WebError::already_exists("Material"));
        }

        amaterial.name = Set(name);
    }

    if let Some(unit) = body.unit {
        amaterial.unit = Set(unit);
    }

    if let Some(color) = body.color {
        amaterial.color = Set(Some(color));
    }

    if let Some(image) = body.image {
        amaterial.image = Set(Some(image));
    }

    amaterial.modified_at = Set(Utc::now().naive_utc());
    let material = crud::update(&state.db, material, amaterial).await?;

    let res = BaseResponse {
        error: false,
        message: PublicMaterialResponse::from(&material),
    };

    Ok(Json(res))
}

pub async fn delete_material(
    state: State<Arc<ServerState>>,
    Extension(principal): Extension<Principal>,
    Path(material): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_admin(&principal)?;

    if !crud::delete::<EMaterial>(&state.db, material).await? {
        return Err(WebError::not_found("Material"));
    }

    let res = BaseResponse {
        error: false,
        message: "Material deleted".to_string(),
    };

    Ok(Json(res))
}
