/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum OrderState {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    Confirmed,
    #[sea_orm(num_value = 2)]
    Delivered,
    #[sea_orm(num_value = 3)]
    CanceledByOperator,
    #[sea_orm(num_value = 4)]
    CanceledNoMaterial,
}

impl OrderState {
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::CanceledByOperator | Self::CanceledNoMaterial)
    }

    /// No transition leaves a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Confirmed)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub operator: Uuid,
    pub forklift: Uuid,
    pub state: OrderState,
    pub estimate_at: NaiveDateTime,
    pub order_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Operator,
    Forklift,
    MaterialByOrder,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Operator => Entity::belongs_to(super::user::Entity)
                .from(Column::Operator)
                .to(super::user::Column::Id)
                .into(),
            Self::Forklift => Entity::belongs_to(super::user::Entity)
                .from(Column::Forklift)
                .to(super::user::Column::Id)
                .into(),
            Self::MaterialByOrder => Entity::has_many(super::material_by_order::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
