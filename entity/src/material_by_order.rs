/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One material line of an order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "material_by_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub order: Uuid,
    pub material: Uuid,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Order,
    Material,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Order => Entity::belongs_to(super::order::Entity)
                .from(Column::Order)
                .to(super::order::Column::Id)
                .into(),
            Self::Material => Entity::belongs_to(super::material::Entity)
                .from(Column::Material)
                .to(super::material::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
