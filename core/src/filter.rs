/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Declarative list filters. Each entity gets its own filter type that
//! deserializes straight from the request query string; predicates and
//! sort keys are resolved against columns at compile time.

use chrono::NaiveDateTime;
use entity::order::OrderState;
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, Select};
use serde::Deserialize;

use super::types::*;

pub trait RecordFilter {
    type Entity: EntityTrait;

    fn condition(&self) -> Condition;

    /// Maps a sort key from the request to a column, `None` for keys
    /// the entity does not expose.
    fn sort_column(key: &str) -> Option<<Self::Entity as EntityTrait>::Column>;

    /// Comma separated sort keys, `-` prefix for descending.
    fn order_spec(&self) -> Option<&str>;

    fn default_order() -> &'static str;

    fn apply(&self, select: Select<Self::Entity>) -> Select<Self::Entity> {
        let mut select = select.filter(self.condition());

        let spec = self.order_spec().unwrap_or_else(|| Self::default_order());
        for key in spec.split(',').map(str::trim).filter(|key| !key.is_empty()) {
            let (key, direction) = match key.strip_prefix('-') {
                Some(key) => (key, Order::Desc),
                None => (key, Order::Asc),
            };

            if let Some(column) = Self::sort_column(key) {
                select = select.order_by(column, direction);
            }
        }

        select
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub username: Option<String>,
    pub username_like: Option<String>,
    pub active: Option<bool>,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

impl RecordFilter for UserFilter {
    type Entity = EUser;

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(username) = &self.username {
            condition = condition.add(CUser::Username.eq(username.clone()));
        }

        if let Some(username_like) = &self.username_like {
            condition = condition.add(CUser::Username.contains(username_like));
        }

        if let Some(active) = self.active {
            condition = condition.add(CUser::Active.eq(active));
        }

        if let Some(search) = &self.search {
            condition = condition.add(CUser::Username.contains(search));
        }

        condition
    }

    fn sort_column(key: &str) -> Option<CUser> {
        match key {
            "username" => Some(CUser::Username),
            "created_at" => Some(CUser::CreatedAt),
            _ => None,
        }
    }

    fn order_spec(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    fn default_order() -> &'static str {
        "username"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialFilter {
    pub name: Option<String>,
    pub name_like: Option<String>,
    pub unit: Option<String>,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

impl RecordFilter for MaterialFilter {
    type Entity = EMaterial;

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &self.name {
            condition = condition.add(CMaterial::Name.eq(name.clone()));
        }

        if let Some(name_like) = &self.name_like {
            condition = condition.add(CMaterial::Name.contains(name_like));
        }

        if let Some(unit) = &self.unit {
            condition = condition.add(CMaterial::Unit.eq(unit.clone()));
        }

        if let Some(search) = &self.search {
            condition = condition.add(CMaterial::Name.contains(search));
        }

        condition
    }

    fn sort_column(key: &str) -> Option<CMaterial> {
        match key {
            "name" => Some(CMaterial::Name),
            "unit" => Some(CMaterial::Unit),
            "created_at" => Some(CMaterial::CreatedAt),
            _ => None,
        }
    }

    fn order_spec(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    fn default_order() -> &'static str {
        "name"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperatorFilter {
    pub machine: Option<String>,
    pub area: Option<String>,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

impl RecordFilter for OperatorFilter {
    type Entity = EOperator;

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(machine) = &self.machine {
            condition = condition.add(COperator::Machine.eq(machine.clone()));
        }

        if let Some(area) = &self.area {
            condition = condition.add(COperator::Area.eq(area.clone()));
        }

        if let Some(search) = &self.search {
            condition = condition.add(
                Condition::any()
                    .add(COperator::Machine.contains(search))
                    .add(COperator::Area.contains(search)),
            );
        }

        condition
    }

    fn sort_column(key: &str) -> Option<COperator> {
        match key {
            "machine" => Some(COperator::Machine),
            "area" => Some(COperator::Area),
            _ => None,
        }
    }

    fn order_spec(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    fn default_order() -> &'static str {
        "machine"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForkliftFilter {
    pub name: Option<String>,
    pub name_like: Option<String>,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

impl RecordFilter for ForkliftFilter {
    type Entity = EForklift;

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &self.name {
            condition = condition.add(CForklift::Name.eq(name.clone()));
        }

        if let Some(name_like) = &self.name_like {
            condition = condition.add(CForklift::Name.contains(name_like));
        }

        if let Some(search) = &self.search {
            condition = condition.add(CForklift::Name.contains(search));
        }

        condition
    }

    fn sort_column(key: &str) -> Option<CForklift> {
        match key {
            "name" => Some(CForklift::Name),
            _ => None,
        }
    }

    fn order_spec(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    fn default_order() -> &'static str {
        "name"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

impl RecordFilter for AdminFilter {
    type Entity = EAdmin;

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(first_name) = &self.first_name {
            condition = condition.add(CAdmin::FirstName.eq(first_name.clone()));
        }

        if let Some(last_name) = &self.last_name {
            condition = condition.add(CAdmin::LastName.eq(last_name.clone()));
        }

        if let Some(search) = &self.search {
            condition = condition.add(
                Condition::any()
                    .add(CAdmin::FirstName.contains(search))
                    .add(CAdmin::LastName.contains(search)),
            );
        }

        condition
    }

    fn sort_column(key: &str) -> Option<CAdmin> {
        match key {
            "first_name" => Some(CAdmin::FirstName),
            "last_name" => Some(CAdmin::LastName),
            _ => None,
        }
    }

    fn order_spec(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    fn default_order() -> &'static str {
        "first_name"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub state: Option<OrderState>,
    pub canceled: Option<bool>,
    pub created_gt: Option<NaiveDateTime>,
    pub created_gte: Option<NaiveDateTime>,
    pub created_lt: Option<NaiveDateTime>,
    pub created_lte: Option<NaiveDateTime>,
    pub order_by: Option<String>,
}

impl RecordFilter for OrderFilter {
    type Entity = EOrder;

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(state) = &self.state {
            condition = condition.add(COrder::State.eq(state.clone()));
        }

        // Legacy predicate kept for clients that still filter on the
        // old boolean; the state column is the source of truth.
        if let Some(canceled) = self.canceled {
            let canceled_states = [
                OrderState::CanceledByOperator,
                OrderState::CanceledNoMaterial,
            ];

            condition = if canceled {
                condition.add(COrder::State.is_in(canceled_states))
            } else {
                condition.add(COrder::State.is_not_in(canceled_states))
            };
        }

        if let Some(created_gt) = self.created_gt {
            condition = condition.add(COrder::CreatedAt.gt(created_gt));
        }

        if let Some(created_gte) = self.created_gte {
            condition = condition.add(COrder::CreatedAt.gte(created_gte));
        }

        if let Some(created_lt) = self.created_lt {
            condition = condition.add(COrder::CreatedAt.lt(created_lt));
        }

        if let Some(created_lte) = self.created_lte {
            condition = condition.add(COrder::CreatedAt.lte(created_lte));
        }

        condition
    }

    fn sort_column(key: &str) -> Option<COrder> {
        match key {
            "created_at" => Some(COrder::CreatedAt),
            "estimate_at" => Some(COrder::EstimateAt),
            "state" => Some(COrder::State),
            _ => None,
        }
    }

    fn order_spec(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    fn default_order() -> &'static str {
        "-created_at"
    }
}
